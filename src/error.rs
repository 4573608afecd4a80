use thiserror::Error;

/// Errors raised by matrix construction and algebra.
///
/// Each variant is a distinct failure kind, so callers can branch on the
/// variant instead of parsing the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A row did not match the length of the first row at construction.
    #[error("inconsistent matrix structure: row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Operand shapes are incompatible for the requested operation.
    #[error("dimension mismatch: {lhs_rows}x{lhs_cols} against {rhs_rows}x{rhs_cols}")]
    DimensionMismatch {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    /// Determinant or inverse requested on a non-square matrix.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Inverse requested on a matrix whose determinant is zero.
    #[error("matrix is singular")]
    Singular,

    /// Cofactor index outside the matrix.
    #[error("index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
