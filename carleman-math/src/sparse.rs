//! Coordinate-format sparse matrices.
//!
//! Transfer matrices of polynomial systems are `n × n^j` with at most a
//! handful of entries per row, so everything downstream of assembly
//! works on triplets. Entries are kept row-major sorted with no
//! duplicates and no explicit zeros; every constructor canonicalizes.

use crate::dense::DenseMatrix;
use crate::error::{MathError, MathResult};
use crate::scalar::Coefficient;
use rustc_hash::FxHashMap;

/// Sparse matrix in coordinate (triplet) format.
#[derive(Debug, Clone, PartialEq)]
pub struct CooMatrix<T> {
    rows: usize,
    cols: usize,
    row_indices: Vec<usize>,
    col_indices: Vec<usize>,
    values: Vec<T>,
}

impl<T: Coefficient> CooMatrix<T> {
    /// Matrix of the given shape with no stored entries.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            row_indices: Vec::new(),
            col_indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Identity matrix of order `n`.
    pub fn identity(n: usize) -> Self {
        Self {
            rows: n,
            cols: n,
            row_indices: (0..n).collect(),
            col_indices: (0..n).collect(),
            values: vec![T::one(); n],
        }
    }

    /// Build from `(row, col, value)` triplets.
    ///
    /// Zero values are skipped before anything else; among the
    /// survivors, a later triplet at an occupied position overwrites
    /// the earlier one.
    pub fn from_triplets(
        rows: usize,
        cols: usize,
        triplets: &[(usize, usize, T)],
    ) -> MathResult<Self> {
        let mut dok: FxHashMap<(usize, usize), T> = FxHashMap::default();
        for &(r, c, v) in triplets {
            if v.is_zero() {
                continue;
            }
            if r >= rows || c >= cols {
                return Err(MathError::InvalidArgument(format!(
                    "triplet ({r}, {c}) outside a {rows}x{cols} matrix"
                )));
            }
            dok.insert((r, c), v);
        }
        Ok(Self::from_dok_unchecked(rows, cols, dok))
    }

    /// Build from a dictionary-of-keys accumulator. Zero values are
    /// dropped.
    pub fn from_dok(
        rows: usize,
        cols: usize,
        dok: &FxHashMap<(usize, usize), T>,
    ) -> MathResult<Self> {
        for (&(r, c), _) in dok.iter() {
            if r >= rows || c >= cols {
                return Err(MathError::InvalidArgument(format!(
                    "entry ({r}, {c}) outside a {rows}x{cols} matrix"
                )));
            }
        }
        Ok(Self::from_dok_unchecked(rows, cols, dok.clone()))
    }

    fn from_dok_unchecked(rows: usize, cols: usize, dok: FxHashMap<(usize, usize), T>) -> Self {
        let mut entries: Vec<((usize, usize), T)> =
            dok.into_iter().filter(|(_, v)| !v.is_zero()).collect();
        entries.sort_unstable_by_key(|&(pos, _)| pos);
        let mut out = Self::zeros(rows, cols);
        for ((r, c), v) in entries {
            out.row_indices.push(r);
            out.col_indices.push(c);
            out.values.push(v);
        }
        out
    }

    /// Canonicalize triplets already known to have unique positions.
    fn from_unique_triplets(rows: usize, cols: usize, mut trips: Vec<(usize, usize, T)>) -> Self {
        trips.retain(|&(_, _, v)| !v.is_zero());
        trips.sort_unstable_by_key(|&(r, c, _)| (r, c));
        let mut out = Self::zeros(rows, cols);
        for (r, c, v) in trips {
            out.row_indices.push(r);
            out.col_indices.push(c);
            out.values.push(v);
        }
        out
    }

    /// Row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored (nonzero) entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Entry at `(row, col)`; zero when nothing is stored there.
    ///
    /// # Panics
    ///
    /// Panics when the position lies outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> T {
        assert!(
            row < self.rows && col < self.cols,
            "position ({row}, {col}) outside a {}x{} matrix",
            self.rows,
            self.cols
        );
        let mut lo = 0usize;
        let mut hi = self.values.len();
        while lo < hi {
            let mid = (lo + hi) / 2;
            if (self.row_indices[mid], self.col_indices[mid]) < (row, col) {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        if lo < self.values.len() && self.row_indices[lo] == row && self.col_indices[lo] == col {
            self.values[lo]
        } else {
            T::zero()
        }
    }

    /// Iterate stored entries as `(row, col, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.row_indices
            .iter()
            .zip(&self.col_indices)
            .zip(&self.values)
            .map(|((&r, &c), &v)| (r, c, v))
    }

    /// Densify.
    pub fn to_dense(&self) -> DenseMatrix<T> {
        let mut out = DenseMatrix::zeros(self.rows, self.cols);
        for (r, c, v) in self.iter() {
            out.set(r, c, v);
        }
        out
    }

    /// Matrix-vector product.
    pub fn mul_vec(&self, x: &[T]) -> MathResult<Vec<T>> {
        if x.len() != self.cols {
            return Err(MathError::ShapeMismatch {
                expected: (self.cols, 1),
                found: (x.len(), 1),
            });
        }
        let mut out = vec![T::zero(); self.rows];
        for (r, c, v) in self.iter() {
            out[r] += v * x[c];
        }
        Ok(out)
    }

    /// Entry-wise sum; exact cancellations are dropped from storage.
    pub fn add(&self, other: &Self) -> MathResult<Self> {
        if self.shape() != other.shape() {
            return Err(MathError::ShapeMismatch {
                expected: self.shape(),
                found: other.shape(),
            });
        }
        // Merge two sorted triplet streams.
        let mut trips = Vec::with_capacity(self.nnz() + other.nnz());
        let mut a = self.iter().peekable();
        let mut b = other.iter().peekable();
        loop {
            match (a.peek().copied(), b.peek().copied()) {
                (Some((ra, ca, va)), Some((rb, cb, vb))) => match (ra, ca).cmp(&(rb, cb)) {
                    std::cmp::Ordering::Less => {
                        trips.push((ra, ca, va));
                        a.next();
                    }
                    std::cmp::Ordering::Greater => {
                        trips.push((rb, cb, vb));
                        b.next();
                    }
                    std::cmp::Ordering::Equal => {
                        trips.push((ra, ca, va + vb));
                        a.next();
                        b.next();
                    }
                },
                (Some((ra, ca, va)), None) => {
                    trips.push((ra, ca, va));
                    a.next();
                }
                (None, Some((rb, cb, vb))) => {
                    trips.push((rb, cb, vb));
                    b.next();
                }
                (None, None) => break,
            }
        }
        Ok(Self::from_unique_triplets(self.rows, self.cols, trips))
    }

    /// Kronecker product `self ⊗ other`.
    ///
    /// With `other` of shape `p × q`, the entry of `self` at `(i, j)`
    /// and the entry of `other` at `(k, l)` meet at
    /// `(i·p + k, j·q + l)`.
    pub fn kron(&self, other: &Self) -> MathResult<Self> {
        let rows = self
            .rows
            .checked_mul(other.rows)
            .ok_or(MathError::SizeOverflow {
                lhs: self.rows,
                rhs: other.rows,
            })?;
        let cols = self
            .cols
            .checked_mul(other.cols)
            .ok_or(MathError::SizeOverflow {
                lhs: self.cols,
                rhs: other.cols,
            })?;
        let mut trips = Vec::with_capacity(self.nnz() * other.nnz());
        for (i, j, a) in self.iter() {
            for (k, l, b) in other.iter() {
                trips.push((i * other.rows + k, j * other.cols + l, a * b));
            }
        }
        Ok(Self::from_unique_triplets(rows, cols, trips))
    }
}
