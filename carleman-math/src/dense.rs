//! Dense matrices for small eigenvalue and norm workloads.
//!
//! The kernel keeps state matrices sparse; dense storage only appears
//! where an algorithm genuinely needs every entry, such as the Jacobi
//! eigensolver behind the spectral logarithmic norm.

use crate::error::{MathError, MathResult};
use crate::scalar::Coefficient;

/// Row-major dense matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Coefficient> DenseMatrix<T> {
    /// Zero matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Build from row-major data; `data.len()` must equal `rows · cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> MathResult<Self> {
        if data.len() != rows * cols {
            return Err(MathError::InvalidArgument(format!(
                "dense matrix of shape {rows}x{cols} needs {} entries, got {}",
                rows * cols,
                data.len()
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Build from nested rows, which must all share one length.
    pub fn from_rows(rows: &[Vec<T>]) -> MathResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(height * width);
        for row in rows {
            if row.len() != width {
                return Err(MathError::InvalidArgument(format!(
                    "ragged rows: expected width {width}, got {}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: height,
            cols: width,
            data,
        })
    }

    /// Row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the matrix is square.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Entry at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Overwrite the entry at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// Row `row` as a slice.
    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Matrix-vector product.
    pub fn mul_vec(&self, x: &[T]) -> MathResult<Vec<T>> {
        if x.len() != self.cols {
            return Err(MathError::ShapeMismatch {
                expected: (self.cols, 1),
                found: (x.len(), 1),
            });
        }
        Ok((0..self.rows)
            .map(|r| self.row(r).iter().zip(x).map(|(&a, &b)| a * b).sum())
            .collect())
    }

    /// Hermitian part `(A + Aᴴ) / 2`; for real entries, the symmetric
    /// part.
    pub fn hermitian_part(&self) -> MathResult<DenseMatrix<T>> {
        if !self.is_square() {
            return Err(MathError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let half = T::from_real(T::real_from_f64(0.5));
        let mut out = Self::zeros(self.rows, self.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                let v = (self.get(i, j) + self.get(j, i).conj()) * half;
                out.set(i, j, v);
            }
        }
        Ok(out)
    }
}
