//! Elementary rotation basis for N-dimensional space
//!
//! In N dimensions, rotations happen in 2-planes. A rotation confined to a
//! single coordinate plane (identity on every other axis) is an elementary
//! rotation; multiplying a subset of them gives a composite rotation.
//!
//! The basis is enumerated by two nested ranks:
//! - the leading identity rank `m` (axes before the plane),
//! - the trailing identity rank `r` (axes after the plane).
//!
//! For each pair the plane spans axes `m` and `n - r - 1`, so every
//! unordered pair of axes is visited exactly once.

use crate::matrix::{append_blocks, append_blocks_2x2, block_diag, identity, zero, MatrixN};

/// A coordinate plane `(a, b)` with `a < b`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RotationPlane {
    pub a: usize,
    pub b: usize,
}

impl RotationPlane {
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }
}

/// Rotation of size `k` in the plane of its first and last coordinate
///
/// ```text
/// [ cos  0 .. 0  -sin ]
/// [  0   1 .. 0    0  ]
/// [  :       :    :   ]
/// [ sin  0 .. 0   cos ]
/// ```
///
/// For `k == 2` the middle blocks are empty and the result is the plain
/// 2D rotation. `k < 2` has no plane to rotate and yields the identity.
pub fn elementary_rotation(k: usize, theta: f64) -> MatrixN {
    if k < 2 {
        return identity(k);
    }
    let (sin, cos) = theta.sin_cos();
    let inner = k - 2;
    let scalar = |x: f64| MatrixN::from_rows(&[vec![x]]);

    append_blocks(&[
        vec![scalar(cos), zero(1, inner), scalar(-sin)],
        vec![zero(inner, 1), identity(inner), zero(inner, 1)],
        vec![scalar(sin), zero(1, inner), scalar(cos)],
    ])
}

/// Rotations of size `k` that share the leading axis, one per trailing rank
///
/// Each is an elementary rotation of size `k - r` stitched onto a trailing
/// identity of rank `r`.
fn trailing_sub_basis(k: usize, theta: f64) -> Vec<MatrixN> {
    (0..k.saturating_sub(1))
        .map(|r| {
            let size = k - r;
            append_blocks_2x2(
                &elementary_rotation(size, theta),
                &zero(size, r),
                &zero(r, size),
                &identity(r),
            )
        })
        .collect()
}

/// The complete elementary rotation basis for dimension `n`
///
/// Matrices are ordered by leading identity rank, then trailing identity
/// rank. The plane each one rotates is given by [`basis_planes`] at the
/// same index. Returns an empty basis for `n < 2`.
pub fn rotation_basis(theta: f64, n: usize) -> Vec<MatrixN> {
    (0..n.saturating_sub(1))
        .flat_map(|m| {
            let lead = identity(m);
            trailing_sub_basis(n - m, theta)
                .into_iter()
                .map(move |sub| block_diag(&[lead.clone(), sub]))
        })
        .collect()
}

/// The plane rotated by each matrix of [`rotation_basis`], in order
pub fn basis_planes(n: usize) -> Vec<RotationPlane> {
    (0..n.saturating_sub(1))
        .flat_map(|m| (0..n - m - 1).map(move |r| RotationPlane::new(m, n - r - 1)))
        .collect()
}

/// Number of matrices in the basis for dimension `n`
#[inline]
pub fn basis_len(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}
