//! N-dimensional Hypercube Mathematics
//!
//! This crate provides the pure geometry engine behind the hypercube viewer.
//! Nothing here holds state or performs I/O; every function maps its inputs
//! to a fresh result.
//!
//! ## Core Types
//!
//! - [`MatrixN`] - Dense row-major matrix with explicit dimensions
//! - [`VectorN`] - A point in N-dimensional space
//! - [`Edge`] - Canonical vertex index pair
//!
//! ## Generators
//!
//! - [`matrix`] - Identity, zero, block-diagonal and block-grid assembly
//! - [`rotation`] - The elementary rotation basis for a dimension
//! - [`hypercube`] - Hypercube vertices and the deduplicated edge list

pub mod matrix;
pub mod rotation;
pub mod shape;
pub mod hypercube;

pub use matrix::{MatrixN, VectorN};
pub use rotation::{rotation_basis, basis_planes, basis_len, RotationPlane};
pub use shape::{Edge, WireframeShape};
pub use hypercube::{Hypercube, vertices, edges_of, MAX_INDEXABLE_DIMENSION};
