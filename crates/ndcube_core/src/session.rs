//! Geometry session: the current dimension and angle
//!
//! The math crate is stateless; the only mutable state in the system is the
//! dimension the user picked and the angle the animation clock has reached.
//! [`GeometrySession`] owns both and rebuilds the [`Bundle`] wholesale on
//! every change. A renderer calls [`take_update`](GeometrySession::take_update)
//! once per frame and replaces its whole object set when it gets one.
//!
//! # Example
//! ```
//! use ndcube_core::GeometrySession;
//!
//! let mut session = GeometrySession::new(3, 0.0).unwrap();
//! assert!(session.take_update().is_some());
//! assert!(session.take_update().is_none());
//!
//! session.advance(0.01);
//! let bundle = session.take_update().unwrap();
//! assert_eq!(bundle.rotation_matrices().len(), 3);
//! ```

use std::sync::Arc;

use crate::bundle::{compose, Bundle};
use crate::error::{validate_dimension, GeometryError};

/// Current dimension/angle plus the bundle built from them
#[derive(Debug)]
pub struct GeometrySession {
    dimension: usize,
    theta: f64,
    bundle: Arc<Bundle>,
    /// Set on every rebuild, cleared by `take_update`
    pending: bool,
}

impl GeometrySession {
    /// Start a session at the given dimension and angle
    ///
    /// The initial bundle counts as an update.
    pub fn new(dimension: usize, theta: f64) -> Result<Self, GeometryError> {
        let bundle = compose(theta, dimension)?;
        log::info!("Geometry session started at dimension {}", dimension);
        Ok(Self {
            dimension,
            theta,
            bundle: Arc::new(bundle),
            pending: true,
        })
    }

    /// Current dimension
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Current angle in radians
    #[inline]
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// The bundle for the current state
    pub fn bundle(&self) -> &Arc<Bundle> {
        &self.bundle
    }

    /// Switch to a new dimension
    ///
    /// `requested` comes straight from user input and is validated here.
    /// On error the session keeps its previous state.
    pub fn set_dimension(&mut self, requested: i64) -> Result<(), GeometryError> {
        let dimension = match validate_dimension(requested) {
            Ok(n) => n,
            Err(e) => {
                log::warn!("Rejected dimension change: {}", e);
                return Err(e);
            }
        };
        log::info!("Dimension changed {} -> {}", self.dimension, dimension);
        self.dimension = dimension;
        self.rebuild()
    }

    /// Jump to an absolute angle
    pub fn set_theta(&mut self, theta: f64) -> Result<(), GeometryError> {
        self.theta = theta;
        self.rebuild()
    }

    /// Move the angle forward by `step` radians
    pub fn advance(&mut self, step: f64) {
        self.theta += step;
        // dimension was validated when it was set
        if let Err(e) = self.rebuild() {
            log::error!("Failed to rebuild bundle: {}", e);
        }
    }

    /// Hand out the latest bundle if it changed since the last call
    pub fn take_update(&mut self) -> Option<Arc<Bundle>> {
        if std::mem::take(&mut self.pending) {
            Some(Arc::clone(&self.bundle))
        } else {
            None
        }
    }

    fn rebuild(&mut self) -> Result<(), GeometryError> {
        self.bundle = Arc::new(compose(self.theta, self.dimension)?);
        self.pending = true;
        Ok(())
    }
}
