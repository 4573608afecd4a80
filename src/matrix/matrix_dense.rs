use num_traits::Float;

use crate::error::MatrixError;
use itertools::Itertools;
use rayon::prelude::*;
use std::fmt;
use std::fmt::Display;
use std::iter::Sum;
use std::ops;

pub trait Element:  // Avoid repeating all the traits
    Float
    + Sum<Self>
    + Display
    + fmt::Debug
    + Send
    + Sync
{
}

impl<T> Element for T where
    T: Float + Sum<T> + Display + fmt::Debug + Send + Sync
{
}

/// Dense row-major matrix over real floating-point entries.
///
/// Immutable once constructed: every operation returns a freshly built
/// matrix and never touches its operands.
#[derive(Debug, Clone)]
pub struct MatrixDense<T> {
    pub(crate) cols: usize,
    pub(crate) rows: usize,
    pub(crate) cells: Vec<T>,
}

impl<T: Element> MatrixDense<T> {
    /// Validated construction from row data. Every row must have the length
    /// of the first one; an empty outer vector yields the 0x0 matrix.
    /// NaN and infinite entries are accepted and propagate through the
    /// algebra unchanged.
    pub fn from_rows(data: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let rows = data.len();
        let cols = data.first().map_or(0, |row| row.len());

        for (i, row) in data.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::RaggedRow {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
        }

        Ok(MatrixDense {
            cols,
            rows,
            cells: data.into_iter().flatten().collect(),
        })
    }

    /// Zero-filled matrix of the given shape. A zero-row request yields the
    /// 0x0 matrix whatever `cols` says.
    pub fn new(rows: usize, cols: usize) -> Self {
        let cols = if rows == 0 { 0 } else { cols };
        MatrixDense {
            cols,
            rows,
            cells: vec![T::zero(); rows * cols],
        }
    }

    pub fn identity(n: usize) -> Self {
        MatrixDense {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major accessor; indices are only checked against the backing
    /// storage. [`cofactor`](Self::cofactor) is the range-checked path.
    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col]
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.cells
            .chunks(self.cols)
            .map(|row| row.into())
            .collect()
    }

    pub fn transpose(&self) -> Self {
        // a transposed n x 0 matrix has no rows, which means no columns either
        if self.cols == 0 {
            return MatrixDense {
                cols: 0,
                rows: 0,
                cells: Vec::new(),
            };
        }
        MatrixDense {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.at(r, c)))
                .collect(),
        }
    }

    /// True iff both row counts match and, for non-empty matrices, the
    /// column counts match as well. A zero-row matrix only matches another
    /// zero-row matrix.
    pub fn same_dimensions(&self, other: &MatrixDense<T>) -> bool {
        self.rows == other.rows && (self.rows == 0 || self.cols == other.cols)
    }

    /// True iff the matrix is non-empty with as many rows as columns; the
    /// 0x0 matrix does not count as square.
    pub fn is_square(&self) -> bool {
        self.rows > 0 && self.rows == self.cols
    }

    /// Submatrix with row `i` and column `j` deleted.
    pub fn cofactor(&self, i: usize, j: usize) -> Result<Self, MatrixError> {
        if i >= self.rows || j >= self.cols {
            return Err(MatrixError::OutOfRange {
                row: i,
                col: j,
                rows: self.rows,
                cols: self.cols,
            });
        }

        let rows = self.rows - 1;
        let cols = if rows == 0 { 0 } else { self.cols - 1 };
        let cells = (0..self.rows)
            .filter(|&r| r != i)
            .flat_map(|r| {
                (0..self.cols)
                    .filter(move |&c| c != j)
                    .map(move |c| self.at(r, c))
            })
            .collect();

        Ok(MatrixDense { cols, rows, cells })
    }

    /// Determinant by Laplace expansion along the first row, recursing into
    /// cofactors down to the 2x2 base case. A 1x1 matrix yields its sole
    /// element; anything non-square (including 0x0) is an error.
    ///
    /// Runtime grows factorially with the order, which is accepted: this is
    /// the textbook expansion, not a decomposition.
    pub fn determinant(&self) -> Result<T, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }

        match self.rows {
            1 => Ok(self.at(0, 0)),
            2 => Ok(self.at(0, 0) * self.at(1, 1) - self.at(1, 0) * self.at(0, 1)),
            n => {
                let mut det = T::zero();
                for j in 0..n {
                    let sign = if j % 2 == 0 { T::one() } else { -T::one() };
                    let minor_det = self.cofactor(0, j)?.determinant()?;
                    det = det + sign * self.at(0, j) * minor_det;
                }
                Ok(det)
            }
        }
    }

    /// Inverse by the adjugate method: transpose of the signed cofactor
    /// determinants, scaled by `1/det`. The determinant test against zero is
    /// exact, so a NaN determinant is not rejected and propagates instead.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let det = self.determinant()?;
        if det == T::zero() {
            return Err(MatrixError::Singular);
        }
        let inv_det = T::one() / det;

        // the adjugate of a 1x1 matrix is [[1]], which the cofactor
        // recursion cannot produce (its minor would be 0x0)
        if self.rows == 1 {
            return Ok(MatrixDense {
                cols: 1,
                rows: 1,
                cells: vec![inv_det],
            });
        }

        let mut signed = Vec::with_capacity(self.cells.len());
        for i in 0..self.rows {
            for j in 0..self.cols {
                let sign = if (i + j) % 2 == 0 { T::one() } else { -T::one() };
                signed.push(sign * self.cofactor(i, j)?.determinant()?);
            }
        }
        let signed = MatrixDense {
            cols: self.cols,
            rows: self.rows,
            cells: signed,
        };

        let adjugate = signed.transpose();
        Ok(MatrixDense {
            cols: self.cols,
            rows: self.rows,
            cells: adjugate.cells.iter().map(|&c| c * inv_det).collect(),
        })
    }

    fn row(&self, i: usize) -> &[T] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    fn elementwise(
        &self,
        rhs: &MatrixDense<T>,
        op: impl Fn(T, T) -> T,
    ) -> Result<MatrixDense<T>, MatrixError> {
        if !self.same_dimensions(rhs) {
            return Err(MatrixError::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: rhs.rows,
                rhs_cols: rhs.cols,
            });
        }

        Ok(MatrixDense {
            cols: self.cols,
            rows: self.rows,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(&a, &b)| op(a, b))
                .collect(),
        })
    }
}

impl<T: Element> ops::Add<&MatrixDense<T>> for &MatrixDense<T> {
    type Output = Result<MatrixDense<T>, MatrixError>;

    fn add(self, rhs: &MatrixDense<T>) -> Result<MatrixDense<T>, MatrixError> {
        self.elementwise(rhs, |a, b| a + b)
    }
}

impl<T: Element> ops::Sub<&MatrixDense<T>> for &MatrixDense<T> {
    type Output = Result<MatrixDense<T>, MatrixError>;

    fn sub(self, rhs: &MatrixDense<T>) -> Result<MatrixDense<T>, MatrixError> {
        self.elementwise(rhs, |a, b| a - b)
    }
}

impl<T: Element> ops::Mul<&MatrixDense<T>> for &MatrixDense<T> {
    type Output = Result<MatrixDense<T>, MatrixError>;

    fn mul(self, rhs: &MatrixDense<T>) -> Result<MatrixDense<T>, MatrixError> {
        if self.rows == 0 || rhs.rows == 0 || self.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: rhs.rows,
                rhs_cols: rhs.cols,
            });
        }
        if rhs.cols == 0 {
            return Ok(MatrixDense {
                cols: 0,
                rows: self.rows,
                cells: Vec::new(),
            });
        }

        let mut result = MatrixDense::new(self.rows, rhs.cols);

        // parallel across output rows only; every cell keeps its sequential
        // left-to-right accumulation over k
        result
            .cells
            .par_chunks_mut(rhs.cols)
            .enumerate()
            .for_each(|(r, row)| {
                for (j, cell) in row.iter_mut().enumerate() {
                    *cell = (0..self.cols).map(|k| self.at(r, k) * rhs.at(k, j)).sum();
                }
            });

        Ok(result)
    }
}

/// Renders one bracketed row per line: `⌈…⌉` first, `⌊…⌋` last, `|…|` in
/// between, entries joined with `", "`. A single row uses the top bracket
/// form; the 0x0 matrix renders as a bare `[]`.
impl<T: Element> fmt::Display for MatrixDense<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows == 0 {
            return write!(f, "[]");
        }
        for i in 0..self.rows {
            let row = self.row(i).iter().join(", ");
            if i == 0 {
                writeln!(f, "⌈{}⌉", row)?;
            } else if i == self.rows - 1 {
                writeln!(f, "⌊{}⌋", row)?;
            } else {
                writeln!(f, "|{}|", row)?;
            }
        }
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
