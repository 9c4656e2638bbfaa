//! N×N matrix kernel for hypercube transformations
//!
//! This module provides the block-matrix operations the rotation basis is
//! built from: identity, zero, block-diagonal assembly and block-grid
//! concatenation, plus the product/transpose helpers a renderer needs to
//! combine basis rotations.
//!
//! Matrices are row-major. The empty (0×0) matrix takes the place of a
//! "nothing here" block and is absorbed silently by every assembly
//! operation.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// A vector in N-dimensional space
pub type VectorN = Vec<f64>;

/// Dense row-major matrix with explicit dimensions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct MatrixN {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

/// Unchecked wire form of a [`MatrixN`]
#[derive(Deserialize)]
struct RawMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl TryFrom<RawMatrix> for MatrixN {
    type Error = String;

    fn try_from(raw: RawMatrix) -> Result<Self, String> {
        if raw.rows.checked_mul(raw.cols) != Some(raw.data.len()) {
            return Err(format!(
                "{}x{} matrix carries {} elements",
                raw.rows,
                raw.cols,
                raw.data.len()
            ));
        }
        if raw.rows == 0 || raw.cols == 0 {
            return Ok(Self::empty());
        }
        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            data: raw.data,
        })
    }
}

impl MatrixN {
    /// The empty matrix (no rows, no columns)
    pub const fn empty() -> Self {
        Self {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }

    /// Build a matrix from a list of rows
    ///
    /// # Panics
    /// Panics if the rows have differing lengths.
    pub fn from_rows(rows: &[VectorN]) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(
                row.len(),
                cols,
                "row {} has {} columns, expected {}",
                i,
                row.len(),
                cols
            );
            data.extend_from_slice(row);
        }
        if cols == 0 {
            return Self::empty();
        }
        Self {
            rows: rows.len(),
            cols,
            data,
        }
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (the matrix dimension for square matrices)
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True for the 0×0 matrix, or any matrix without content
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Borrow one row as a slice
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Copy the matrix out as a list of rows
    pub fn to_rows(&self) -> Vec<VectorN> {
        (0..self.rows).map(|i| self.row(i).to_vec()).collect()
    }

    /// Raw row-major storage
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copy `block` into this matrix with its top-left corner at (row, col)
    fn write_block(&mut self, row: usize, col: usize, block: &MatrixN) {
        for i in 0..block.rows {
            let dst = (row + i) * self.cols + col;
            self.data[dst..dst + block.cols].copy_from_slice(block.row(i));
        }
    }
}

impl Default for MatrixN {
    fn default() -> Self {
        Self::empty()
    }
}

impl Index<(usize, usize)> for MatrixN {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for MatrixN {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data[i * self.cols + j]
    }
}

/// The n×n identity matrix. `identity(0)` is the empty matrix.
pub fn identity(n: usize) -> MatrixN {
    let mut m = zero(n, n);
    for i in 0..n {
        m[(i, i)] = 1.0;
    }
    m
}

/// An m×n matrix of zeros
///
/// A zero-sized request yields the empty matrix.
pub fn zero(m: usize, n: usize) -> MatrixN {
    if m == 0 || n == 0 {
        return MatrixN::empty();
    }
    MatrixN {
        rows: m,
        cols: n,
        data: vec![0.0; m * n],
    }
}

/// Assemble a block-diagonal matrix
///
/// Blocks are placed along the diagonal in order, each starting where the
/// previous one ended. Empty blocks are skipped. Off-diagonal regions are
/// zero.
pub fn block_diag(blocks: &[MatrixN]) -> MatrixN {
    let (rows, cols) = blocks
        .iter()
        .filter(|b| !b.is_empty())
        .fold((0, 0), |(r, c), b| (r + b.rows, c + b.cols));

    let mut result = zero(rows, cols);
    let (mut row_offset, mut col_offset) = (0, 0);
    for block in blocks.iter().filter(|b| !b.is_empty()) {
        result.write_block(row_offset, col_offset, block);
        row_offset += block.rows;
        col_offset += block.cols;
    }
    result
}

/// Concatenate a grid of blocks into one matrix
///
/// Blocks within a grid row are joined horizontally and grid rows are
/// stacked vertically. Blocks without rows or columns are treated as
/// absent, and a grid row with no remaining blocks is skipped entirely.
///
/// # Panics
/// Panics if blocks in a grid row differ in height, or if grid rows
/// produce different widths. Callers are expected to supply consistent
/// shapes.
pub fn append_blocks(grid: &[Vec<MatrixN>]) -> MatrixN {
    // (height, blocks) for each non-empty grid row
    let mut layout: Vec<(usize, Vec<&MatrixN>)> = Vec::with_capacity(grid.len());
    let mut width = None;

    for (r, grid_row) in grid.iter().enumerate() {
        let blocks: Vec<&MatrixN> = grid_row.iter().filter(|b| !b.is_empty()).collect();
        let Some(first) = blocks.first() else {
            continue;
        };
        let height = first.rows;
        assert!(
            blocks.iter().all(|b| b.rows == height),
            "block row {} has blocks of differing heights",
            r
        );

        let row_width: usize = blocks.iter().map(|b| b.cols).sum();
        match width {
            None => width = Some(row_width),
            Some(w) => assert_eq!(
                w, row_width,
                "block row {} is {} wide, expected {}",
                r, row_width, w
            ),
        }
        layout.push((height, blocks));
    }

    let rows = layout.iter().map(|(h, _)| h).sum();
    let mut result = zero(rows, width.unwrap_or(0));

    let mut row_offset = 0;
    for (height, blocks) in layout {
        let mut col_offset = 0;
        for block in blocks {
            result.write_block(row_offset, col_offset, block);
            col_offset += block.cols;
        }
        row_offset += height;
    }
    result
}

/// Concatenate a 2×2 block layout
///
/// ```
/// use ndcube_math::matrix::{append_blocks_2x2, identity, zero};
/// let m = append_blocks_2x2(&identity(2), &zero(2, 1), &zero(1, 2), &identity(1));
/// assert_eq!(m, identity(3));
/// ```
pub fn append_blocks_2x2(tl: &MatrixN, tr: &MatrixN, bl: &MatrixN, br: &MatrixN) -> MatrixN {
    append_blocks(&[vec![tl.clone(), tr.clone()], vec![bl.clone(), br.clone()]])
}

/// Transpose a matrix
pub fn transpose(m: &MatrixN) -> MatrixN {
    let mut result = zero(m.cols, m.rows);
    for i in 0..m.rows {
        for j in 0..m.cols {
            result[(j, i)] = m[(i, j)];
        }
    }
    result
}

/// Multiply two matrices: result = a * b
///
/// Applied to a column vector, b acts first, then a.
///
/// # Panics
/// Panics if the inner dimensions do not agree.
pub fn mul(a: &MatrixN, b: &MatrixN) -> MatrixN {
    assert_eq!(
        a.cols, b.rows,
        "cannot multiply {}x{} by {}x{}",
        a.rows, a.cols, b.rows, b.cols
    );
    let mut result = zero(a.rows, b.cols);
    for i in 0..a.rows {
        for k in 0..a.cols {
            let aik = a[(i, k)];
            for j in 0..b.cols {
                result[(i, j)] += aik * b[(k, j)];
            }
        }
    }
    result
}

/// Multiply a sequence of n×n matrices left to right
///
/// An empty sequence yields the identity.
pub fn product<'a, I>(n: usize, matrices: I) -> MatrixN
where
    I: IntoIterator<Item = &'a MatrixN>,
{
    matrices
        .into_iter()
        .fold(identity(n), |acc, m| mul(&acc, m))
}

/// Transform a vector by a matrix: result = M * v
pub fn transform(m: &MatrixN, v: &[f64]) -> VectorN {
    assert_eq!(
        m.cols,
        v.len(),
        "cannot apply {}x{} matrix to vector of length {}",
        m.rows,
        m.cols,
        v.len()
    );
    (0..m.rows)
        .map(|i| m.row(i).iter().zip(v).map(|(a, b)| a * b).sum())
        .collect()
}

/// Element-wise comparison within `epsilon`
pub fn approx_eq(a: &MatrixN, b: &MatrixN, epsilon: f64) -> bool {
    a.rows == b.rows
        && a.cols == b.cols
        && a.data.iter().zip(&b.data).all(|(x, y)| (x - y).abs() <= epsilon)
}

/// True if Mᵀ·M is the identity within `epsilon`
pub fn is_orthogonal(m: &MatrixN, epsilon: f64) -> bool {
    m.is_square() && approx_eq(&mul(&transpose(m), m), &identity(m.rows), epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn m(rows: &[&[f64]]) -> MatrixN {
        MatrixN::from_rows(&rows.iter().map(|r| r.to_vec()).collect::<Vec<_>>())
    }

    #[test]
    fn test_identity() {
        let i3 = identity(3);
        assert_eq!(i3, m(&[&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]]));
        let v = vec![1.0, 2.0, 3.0];
        assert_eq!(transform(&i3, &v), v);
    }

    #[test]
    fn test_identity_zero_is_empty() {
        let e = identity(0);
        assert!(e.is_empty());
        assert_eq!(e.rows(), 0);
        assert_eq!(e.cols(), 0);
    }

    #[test]
    fn test_empty_distinct_from_zero_matrix() {
        let z = zero(2, 2);
        assert!(!z.is_empty());
        assert_ne!(z, MatrixN::empty());
        assert!(z.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_from_rows_empty_row_is_empty() {
        assert!(MatrixN::from_rows(&[vec![]]).is_empty());
        assert!(MatrixN::from_rows(&[]).is_empty());
    }

    #[test]
    #[should_panic]
    fn test_from_rows_ragged_panics() {
        MatrixN::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
    }

    #[test]
    fn test_block_diag_mixed_sizes() {
        let a = m(&[&[2.0]]);
        let b = m(&[&[3.0, 4.0], &[5.0, 6.0]]);
        let result = block_diag(&[a, MatrixN::empty(), b]);
        assert_eq!(
            result,
            m(&[&[2.0, 0.0, 0.0], &[0.0, 3.0, 4.0], &[0.0, 5.0, 6.0]])
        );
    }

    #[test]
    fn test_block_diag_preserves_order() {
        let a = m(&[&[3.0, 4.0], &[5.0, 6.0]]);
        let b = m(&[&[2.0]]);
        let result = block_diag(&[a, b]);
        assert_eq!(
            result,
            m(&[&[3.0, 4.0, 0.0], &[5.0, 6.0, 0.0], &[0.0, 0.0, 2.0]])
        );
    }

    #[test]
    fn test_block_diag_of_identities_is_identity() {
        let result = block_diag(&[identity(2), identity(0), identity(3)]);
        assert_eq!(result, identity(5));
    }

    #[test]
    fn test_block_diag_all_empty() {
        assert!(block_diag(&[MatrixN::empty(), identity(0)]).is_empty());
        assert!(block_diag(&[]).is_empty());
    }

    #[test]
    fn test_append_blocks_grid() {
        let grid = vec![
            vec![m(&[&[1.0]]), m(&[&[2.0, 3.0]])],
            vec![m(&[&[4.0], &[7.0]]), m(&[&[5.0, 6.0], &[8.0, 9.0]])],
        ];
        let result = append_blocks(&grid);
        assert_eq!(
            result,
            m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]])
        );
    }

    #[test]
    fn test_append_blocks_skips_empty_blocks_and_rows() {
        let grid = vec![
            vec![m(&[&[1.0]]), zero(1, 0), m(&[&[2.0]])],
            vec![zero(0, 1), identity(0), MatrixN::empty()],
            vec![m(&[&[3.0]]), MatrixN::empty(), m(&[&[4.0]])],
        ];
        let result = append_blocks(&grid);
        assert_eq!(result, m(&[&[1.0, 2.0], &[3.0, 4.0]]));
    }

    #[test]
    #[should_panic]
    fn test_append_blocks_height_mismatch_panics() {
        append_blocks(&[vec![identity(2), identity(1)]]);
    }

    #[test]
    #[should_panic]
    fn test_append_blocks_width_mismatch_panics() {
        append_blocks(&[vec![identity(2)], vec![zero(1, 3)]]);
    }

    #[test]
    fn test_append_blocks_2x2_pads_with_identity() {
        let r = m(&[&[0.0, -1.0], &[1.0, 0.0]]);
        let result = append_blocks_2x2(&r, &zero(2, 1), &zero(1, 2), &identity(1));
        assert_eq!(
            result,
            m(&[&[0.0, -1.0, 0.0], &[1.0, 0.0, 0.0], &[0.0, 0.0, 1.0]])
        );
    }

    #[test]
    fn test_append_blocks_2x2_absorbs_empty_corner() {
        let r = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let e = MatrixN::empty();
        let result = append_blocks_2x2(&r, &e, &e, &e);
        assert_eq!(result, r);
    }

    #[test]
    fn test_transpose() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let t = transpose(&a);
        assert_eq!(t, m(&[&[1.0, 4.0], &[2.0, 5.0], &[3.0, 6.0]]));
        assert_eq!(transpose(&t), a);
    }

    #[test]
    fn test_mul_identity() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(mul(&identity(2), &a), a);
        assert_eq!(mul(&a, &identity(2)), a);
    }

    #[test]
    fn test_mul_rectangular() {
        let a = m(&[&[1.0, 2.0, 3.0]]);
        let b = m(&[&[1.0], &[1.0], &[1.0]]);
        assert_eq!(mul(&a, &b), m(&[&[6.0]]));
        assert_eq!(mul(&b, &a).rows(), 3);
    }

    #[test]
    fn test_mul_propagates_non_finite_values() {
        // 0 * NaN is NaN, so a NaN anywhere in b reaches every row of a that
        // touches its row, even through zero entries
        let a = identity(2);
        let mut b = identity(2);
        b[(1, 0)] = f64::NAN;
        let result = mul(&a, &b);
        assert!(result[(0, 0)].is_nan());
        assert!(result[(1, 0)].is_nan());

        let mut inf = identity(2);
        inf[(1, 1)] = f64::INFINITY;
        assert!(mul(&a, &inf)[(0, 1)].is_nan());
    }

    #[test]
    fn test_deserialize_round_trip() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let text = ron::to_string(&a).unwrap();
        assert_eq!(ron::from_str::<MatrixN>(&text).unwrap(), a);
    }

    #[test]
    fn test_deserialize_rejects_mismatched_data() {
        let err = ron::from_str::<MatrixN>("(rows:2,cols:2,data:[1.0,2.0,3.0])").unwrap_err();
        assert!(err.to_string().contains("2x2 matrix carries 3 elements"), "{}", err);
    }

    #[test]
    fn test_deserialize_zero_sized_is_empty() {
        let e = ron::from_str::<MatrixN>("(rows:3,cols:0,data:[])").unwrap();
        assert_eq!(e, MatrixN::empty());
    }

    #[test]
    fn test_product_empty_is_identity() {
        assert_eq!(product(4, std::iter::empty()), identity(4));
    }

    #[test]
    fn test_product_order() {
        let a = m(&[&[1.0, 1.0], &[0.0, 1.0]]);
        let b = m(&[&[1.0, 0.0], &[1.0, 1.0]]);
        assert_eq!(product(2, [&a, &b]), mul(&a, &b));
        assert_ne!(product(2, [&a, &b]), product(2, [&b, &a]));
    }

    #[test]
    fn test_orthogonality_check() {
        let (s, c) = 0.3f64.sin_cos();
        let r = m(&[&[c, -s], &[s, c]]);
        assert!(is_orthogonal(&r, EPSILON));
        assert!(!is_orthogonal(&m(&[&[2.0, 0.0], &[0.0, 1.0]]), EPSILON));
        assert!(!is_orthogonal(&zero(2, 3), EPSILON));
    }

    #[test]
    fn test_index_mut() {
        let mut a = zero(2, 2);
        a[(1, 0)] = 5.0;
        assert_eq!(a.row(1), &[5.0, 0.0]);
        assert_eq!(a.to_rows(), vec![vec![0.0, 0.0], vec![5.0, 0.0]]);
    }
}
