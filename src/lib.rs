#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod error;

pub mod matrix {
    pub mod matrix_dense;
    #[cfg(feature = "python")]
    pub mod matrix_py;
    pub mod matrix_random;
}

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn rust_matrix(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<matrix::matrix_py::PyMatrix>()?;
    Ok(())
}
