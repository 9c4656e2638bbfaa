//! Shape traits and primitives for N-dimensional wireframes
//!
//! Shapes are pure geometric data - no colors, materials, or rendering info.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::matrix::VectorN;

/// An undirected edge between two vertices
///
/// Stored in canonical form (`a < b`) so the same edge never appears
/// twice with swapped endpoints. The layout is two packed `u32`s, so an
/// edge list can be handed to a GPU as a line index buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Pod, Zeroable, Serialize, Deserialize)]
pub struct Edge {
    /// Lower vertex index
    pub a: u32,
    /// Higher vertex index
    pub b: u32,
}

impl Edge {
    /// Create an edge, swapping the endpoints into canonical order
    #[inline]
    pub fn new(i: u32, j: u32) -> Self {
        if i <= j {
            Self { a: i, b: j }
        } else {
            Self { a: j, b: i }
        }
    }

    /// The endpoints as a `(low, high)` tuple
    #[inline]
    pub fn indices(&self) -> (usize, usize) {
        (self.a as usize, self.b as usize)
    }
}

impl From<(u32, u32)> for Edge {
    fn from((i, j): (u32, u32)) -> Self {
        Self::new(i, j)
    }
}

/// Trait for shapes drawn as a wireframe
///
/// A WireframeShape provides the geometric data a line renderer needs:
/// - Vertices: points in N-dimensional space
/// - Edges: index pairs into the vertex list
pub trait WireframeShape: Send + Sync {
    /// Dimension of the space the vertices live in
    fn dimension(&self) -> usize;

    /// Get the vertices of this shape
    fn vertices(&self) -> &[VectorN];

    /// Get the edges of this shape
    fn edges(&self) -> &[Edge];

    /// Get the number of vertices
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Get the number of edges
    #[inline]
    fn edge_count(&self) -> usize {
        self.edges().len()
    }
}
