//! Core types for the hypercube viewer
//!
//! This crate turns the pure math of `ndcube_math` into the payload a
//! renderer consumes:
//!
//! - [`Bundle`] - Vertices, edges and rotation basis for one (theta, n) pair
//! - [`compose`] - Build a bundle, validating the dimension
//! - [`GeometrySession`] - Current dimension and angle, rebuilt on change
//! - [`BundleWorker`] - Compose bundles on a background thread
//! - [`GeometryError`] - Everything that can go wrong

mod bundle;
mod error;
mod session;
mod worker;

pub use bundle::{compose, Bundle};
pub use error::{validate_dimension, GeometryError, MAX_DIMENSION, MIN_DIMENSION};
pub use session::GeometrySession;
pub use worker::{BundleWorker, ComposeResult};

// Re-export commonly used types from ndcube_math for convenience
pub use ndcube_math::{Edge, MatrixN, VectorN, WireframeShape, RotationPlane};
