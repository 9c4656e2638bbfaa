//! Animation clock system
//!
//! Drives the geometry session one frame at a time:
//! - Delta time calculation
//! - Angle advance
//! - Bundle hand-off when the geometry changed

use std::sync::Arc;
use std::time::{Duration, Instant};

use ndcube_core::{Bundle, GeometrySession};

use crate::config::AnimationConfig;

/// Result of an animation frame
pub struct AnimationResult {
    /// New bundle to replace the rendered objects, if the geometry changed
    pub bundle: Option<Arc<Bundle>>,
    /// Seconds since the previous frame
    pub dt: f32,
}

/// Advances the rotation angle once per frame
pub struct AnimationSystem {
    angle_step: f64,
    frame_interval: Option<Duration>,
    last_frame: Instant,
    frame: u64,
}

impl AnimationSystem {
    /// Create an animation system from config
    pub fn new(config: &AnimationConfig) -> Self {
        let frame_interval = (config.frame_rate > 0.0)
            .then(|| Duration::from_secs_f64(1.0 / config.frame_rate));
        Self {
            angle_step: config.angle_step,
            frame_interval,
            last_frame: Instant::now(),
            frame: 0,
        }
    }

    /// Number of frames run so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Run one animation frame
    ///
    /// Advances the session angle by the configured step and returns the
    /// rebuilt bundle for the renderer.
    pub fn update(&mut self, session: &mut GeometrySession) -> AnimationResult {
        let now = Instant::now();
        // Cap dt so a stall does not show up as one huge frame
        let dt = (now - self.last_frame).as_secs_f32().min(0.25);
        self.last_frame = now;
        self.frame += 1;

        session.advance(self.angle_step);

        AnimationResult {
            bundle: session.take_update(),
            dt,
        }
    }

    /// Sleep off whatever is left of the current frame budget
    pub fn pace(&self) {
        if let Some(interval) = self.frame_interval {
            let elapsed = self.last_frame.elapsed();
            if elapsed < interval {
                std::thread::sleep(interval - elapsed);
            }
        }
    }
}
