//! Hypercube (N-dimensional cube) geometry
//!
//! An n-cube has 2^n vertices and n * 2^(n-1) edges. Vertex `i` is the
//! binary expansion of `i`, most significant bit first, so each coordinate
//! is 0.0 or 1.0 and two vertices share an edge exactly when their indices
//! differ in one bit.

use crate::matrix::VectorN;
use crate::shape::{Edge, WireframeShape};

/// Largest dimension whose vertex indices fit the `u32` fields of [`Edge`]
pub const MAX_INDEXABLE_DIMENSION: usize = 32;

/// The 2^n corners of the unit n-cube
///
/// For `n == 0` this is a single zero-length vertex.
///
/// # Panics
/// Panics if `n >= usize::BITS`, where 2^n does not fit a `usize`.
pub fn vertices(n: usize) -> Vec<VectorN> {
    assert!(
        n < usize::BITS as usize,
        "dimension {} has more than usize::MAX vertices",
        n
    );
    (0..1usize << n)
        .map(|i| {
            (0..n)
                .map(|j| if (i >> (n - 1 - j)) & 1 == 1 { 1.0 } else { 0.0 })
                .collect()
        })
        .collect()
}

/// Derive the edge list from a hypercube vertex list
///
/// Each vertex is joined to every neighbour reached by flipping one of its
/// 0 bits to 1. Edges are only emitted from the 0 side, so each appears
/// once and none loops back on itself. Bits are visited from the least
/// significant (last coordinate) upward.
///
/// `vertices` must be the output of [`vertices`] for some dimension.
///
/// # Panics
/// Panics if the dimension exceeds [`MAX_INDEXABLE_DIMENSION`], where
/// vertex indices no longer fit an [`Edge`].
pub fn edges_of(vertices: &[VectorN]) -> Vec<Edge> {
    let n = vertices.first().map_or(0, Vec::len);
    assert!(
        n <= MAX_INDEXABLE_DIMENSION,
        "dimension {} exceeds the u32 edge index range",
        n
    );
    let mut edges = Vec::with_capacity(n * vertices.len() / 2);

    for (i, vertex) in vertices.iter().enumerate() {
        // p = n-1 is the least significant bit
        for p in (0..n).rev() {
            if vertex[p] == 0.0 {
                let j = i + (1 << (n - 1 - p));
                edges.push(Edge::new(i as u32, j as u32));
            }
        }
    }
    edges
}

/// An n-dimensional hypercube - pure geometry without colors
#[derive(Clone, Debug)]
pub struct Hypercube {
    dimension: usize,
    vertices: Vec<VectorN>,
    edges: Vec<Edge>,
}

impl Hypercube {
    /// Build the unit hypercube of the given dimension
    pub fn new(dimension: usize) -> Self {
        let vertices = vertices(dimension);
        let edges = edges_of(&vertices);
        Self {
            dimension,
            vertices,
            edges,
        }
    }

    /// Split into the `(vertices, edges)` pair
    pub fn into_parts(self) -> (Vec<VectorN>, Vec<Edge>) {
        (self.vertices, self.edges)
    }
}

impl WireframeShape for Hypercube {
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vertex_count_and_shape() {
        for n in 0..=10 {
            let verts = vertices(n);
            assert_eq!(verts.len(), 1 << n);
            for v in &verts {
                assert_eq!(v.len(), n);
                assert!(v.iter().all(|&c| c == 0.0 || c == 1.0));
            }
        }
    }

    #[test]
    #[should_panic(expected = "more than usize::MAX vertices")]
    fn test_vertices_rejects_unrepresentable_dimension() {
        vertices(usize::BITS as usize);
    }

    #[test]
    #[should_panic(expected = "u32 edge index range")]
    fn test_edges_of_rejects_wide_vertices() {
        // only the first vertex's length is consulted for the dimension
        let wide = vec![vec![0.0; MAX_INDEXABLE_DIMENSION + 1]];
        edges_of(&wide);
    }

    #[test]
    fn test_zero_dimension() {
        let verts = vertices(0);
        assert_eq!(verts, vec![Vec::<f64>::new()]);
        assert!(edges_of(&verts).is_empty());
    }

    #[test]
    fn test_square() {
        let cube = Hypercube::new(2);
        assert_eq!(
            cube.vertices(),
            &[
                vec![0.0, 0.0],
                vec![0.0, 1.0],
                vec![1.0, 0.0],
                vec![1.0, 1.0],
            ]
        );
        assert_eq!(
            cube.edges(),
            &[
                Edge::new(0, 1),
                Edge::new(0, 2),
                Edge::new(1, 3),
                Edge::new(2, 3),
            ]
        );
    }

    #[test]
    fn test_vertices_are_msb_first() {
        let verts = vertices(4);
        assert_eq!(verts[1], vec![0.0, 0.0, 0.0, 1.0]);
        assert_eq!(verts[8], vec![1.0, 0.0, 0.0, 0.0]);
        assert_eq!(verts[11], vec![1.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_cube() {
        let cube = Hypercube::new(3);
        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.edge_count(), 12);
        assert_eq!(cube.dimension(), 3);
    }

    #[test]
    fn test_edge_count() {
        for n in 1..=10 {
            let cube = Hypercube::new(n);
            assert_eq!(cube.edge_count(), n * (1 << (n - 1)), "n = {}", n);
        }
    }

    #[test]
    fn test_edges_unique_without_self_loops() {
        let cube = Hypercube::new(6);
        let mut seen = HashSet::new();
        for e in cube.edges() {
            assert!(e.a < e.b, "edge {:?} not canonical", e);
            assert!(seen.insert(*e), "edge {:?} duplicated", e);
        }
    }

    #[test]
    fn test_edges_join_single_bit_neighbours() {
        let cube = Hypercube::new(5);
        for e in cube.edges() {
            assert_eq!((e.a ^ e.b).count_ones(), 1, "edge {:?}", e);
        }
        // every vertex has exactly n neighbours
        let mut degree = vec![0usize; cube.vertex_count()];
        for e in cube.edges() {
            let (a, b) = e.indices();
            degree[a] += 1;
            degree[b] += 1;
        }
        assert!(degree.iter().all(|&d| d == 5));
    }

    #[test]
    fn test_into_parts() {
        let (verts, edges) = Hypercube::new(4).into_parts();
        assert_eq!(verts.len(), 16);
        assert_eq!(edges.len(), 32);
    }
}
