//! Geometry bundle composition
//!
//! A [`Bundle`] is everything a renderer needs to draw and animate a
//! hypercube: the vertices, the edge list and the rotation basis for the
//! current angle. Bundles are immutable and rebuilt from scratch whenever
//! the dimension or angle changes.

use serde::{Deserialize, Serialize};

use ndcube_math::matrix::{self, MatrixN, VectorN};
use ndcube_math::{basis_len, rotation_basis, Edge, Hypercube, WireframeShape};

use crate::error::{validate_dimension, GeometryError, MAX_DIMENSION};

/// The complete geometry payload for one (theta, n) pair
///
/// Deserialized bundles are checked against the same shape invariants
/// [`compose`] guarantees, so a loaded bundle is as safe to use as a fresh one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBundle")]
pub struct Bundle {
    dimension: usize,
    theta: f64,
    vertices: Vec<VectorN>,
    edges: Vec<Edge>,
    rotation_matrices: Vec<MatrixN>,
}

/// Unchecked wire form of a [`Bundle`]
#[derive(Deserialize)]
struct RawBundle {
    dimension: usize,
    theta: f64,
    vertices: Vec<VectorN>,
    edges: Vec<Edge>,
    rotation_matrices: Vec<MatrixN>,
}

impl TryFrom<RawBundle> for Bundle {
    type Error = GeometryError;

    fn try_from(raw: RawBundle) -> Result<Self, GeometryError> {
        let n = raw.dimension;
        if n > MAX_DIMENSION {
            return Err(GeometryError::DimensionTooLarge(n));
        }
        validate_dimension(n as i64)?;
        let malformed = |msg: String| Err(GeometryError::MalformedBundle(msg));

        if raw.vertices.len() != 1 << n {
            return malformed(format!(
                "{} vertices, expected {} for dimension {}",
                raw.vertices.len(),
                1usize << n,
                n
            ));
        }
        if let Some(i) = raw.vertices.iter().position(|v| v.len() != n) {
            return malformed(format!(
                "vertex {} has length {}, expected {}",
                i,
                raw.vertices[i].len(),
                n
            ));
        }
        if let Some(e) = raw
            .edges
            .iter()
            .find(|e| e.a >= e.b || e.b as usize >= raw.vertices.len())
        {
            return malformed(format!("edge ({}, {}) is not a valid vertex pair", e.a, e.b));
        }
        if raw.rotation_matrices.len() != basis_len(n) {
            return malformed(format!(
                "{} rotation matrices, expected {}",
                raw.rotation_matrices.len(),
                basis_len(n)
            ));
        }
        if let Some(i) = raw
            .rotation_matrices
            .iter()
            .position(|m| m.rows() != n || m.cols() != n)
        {
            let m = &raw.rotation_matrices[i];
            return malformed(format!(
                "rotation {} is {}x{}, expected {}x{}",
                i,
                m.rows(),
                m.cols(),
                n,
                n
            ));
        }

        Ok(Bundle {
            dimension: n,
            theta: raw.theta,
            vertices: raw.vertices,
            edges: raw.edges,
            rotation_matrices: raw.rotation_matrices,
        })
    }
}

/// Build the bundle for angle `theta` in dimension `n`
///
/// Returns an error if `n` is below 2 or above
/// [`MAX_DIMENSION`](crate::MAX_DIMENSION).
pub fn compose(theta: f64, n: usize) -> Result<Bundle, GeometryError> {
    if n > MAX_DIMENSION {
        return Err(GeometryError::DimensionTooLarge(n));
    }
    let n = validate_dimension(n as i64)?;

    let (vertices, edges) = Hypercube::new(n).into_parts();
    let rotation_matrices = rotation_basis(theta, n);

    log::debug!(
        "Composed {}-cube bundle at theta={:.4}: {} vertices, {} edges, {} rotations",
        n,
        theta,
        vertices.len(),
        edges.len(),
        rotation_matrices.len()
    );

    Ok(Bundle {
        dimension: n,
        theta,
        vertices,
        edges,
        rotation_matrices,
    })
}

impl Bundle {
    /// Angle the rotation matrices were built with
    #[inline]
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// The elementary rotation basis
    pub fn rotation_matrices(&self) -> &[MatrixN] {
        &self.rotation_matrices
    }

    /// Edges as a flat index list, two entries per edge
    pub fn edge_indices(&self) -> &[u32] {
        bytemuck::cast_slice(&self.edges)
    }

    /// Multiply the selected basis matrices, in the given order
    ///
    /// An empty selection yields the identity.
    pub fn composite_rotation(&self, selection: &[usize]) -> Result<MatrixN, GeometryError> {
        let len = self.rotation_matrices.len();
        let selected = selection
            .iter()
            .map(|&index| {
                self.rotation_matrices
                    .get(index)
                    .ok_or(GeometryError::BasisIndexOutOfRange { index, len })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(matrix::product(self.dimension, selected))
    }

    /// Apply a rotation to every vertex
    ///
    /// # Panics
    /// Panics if `rotation` is not `n`×`n`.
    pub fn rotated_vertices(&self, rotation: &MatrixN) -> Vec<VectorN> {
        self.vertices
            .iter()
            .map(|v| matrix::transform(rotation, v))
            .collect()
    }
}

impl WireframeShape for Bundle {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn vertices(&self) -> &[VectorN] {
        &self.vertices
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
