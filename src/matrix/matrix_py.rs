use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyType;

use crate::error::MatrixError;
use crate::matrix::matrix_dense::MatrixDense;
use crate::matrix::matrix_random::random_matrix;

/// Python-facing wrapper over the `f64` matrix, method-compatible with the
/// pure-Python `Matrix` class it replaces.
#[derive(Debug, Clone)]
#[pyclass(frozen, name = "Matrix")]
pub struct PyMatrix {
    inner: MatrixDense<f64>,
}

fn to_py_err(error: MatrixError) -> PyErr {
    let message = error.to_string();
    match error {
        MatrixError::OutOfRange { .. } => PyIndexError::new_err(message),
        _ => PyValueError::new_err(message),
    }
}

#[pymethods]
impl PyMatrix {
    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<f64>>) -> PyResult<Self> {
        match MatrixDense::from_rows(lines) {
            Ok(inner) => Ok(PyMatrix { inner }),
            Err(error) => Err(to_py_err(error)),
        }
    }

    pub fn to_list(&self) -> Vec<Vec<f64>> {
        self.inner.to_rows()
    }

    #[classmethod]
    pub fn random_matrix(_cls: &Bound<PyType>) -> Self {
        PyMatrix {
            inner: random_matrix(),
        }
    }

    pub fn __add__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        match &self.inner + &rhs.inner {
            Ok(inner) => Ok(PyMatrix { inner }),
            Err(error) => Err(to_py_err(error)),
        }
    }

    pub fn __sub__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        match &self.inner - &rhs.inner {
            Ok(inner) => Ok(PyMatrix { inner }),
            Err(error) => Err(to_py_err(error)),
        }
    }

    pub fn __mul__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        match &self.inner * &rhs.inner {
            Ok(inner) => Ok(PyMatrix { inner }),
            Err(error) => Err(to_py_err(error)),
        }
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }

    pub fn determinant(&self) -> PyResult<f64> {
        match self.inner.determinant() {
            Ok(value) => Ok(value),
            Err(error) => Err(to_py_err(error)),
        }
    }

    pub fn inverse(&self) -> PyResult<PyMatrix> {
        match self.inner.inverse() {
            Ok(inner) => Ok(PyMatrix { inner }),
            Err(error) => Err(to_py_err(error)),
        }
    }

    pub fn get_cofactor(&self, i: usize, j: usize) -> PyResult<PyMatrix> {
        match self.inner.cofactor(i, j) {
            Ok(inner) => Ok(PyMatrix { inner }),
            Err(error) => Err(to_py_err(error)),
        }
    }

    pub fn same_dimension_with(&self, other: &PyMatrix) -> bool {
        self.inner.same_dimensions(&other.inner)
    }

    pub fn is_square(&self) -> bool {
        self.inner.is_square()
    }

    #[allow(non_snake_case)]
    #[getter]
    pub fn T(&self) -> PyMatrix {
        PyMatrix {
            inner: self.inner.transpose(),
        }
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.cols()
    }
}
