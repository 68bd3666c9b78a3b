use layout_float_eq::{array, float_eq::DEFAULT_EPSILON};
use numpy::{PyArrayDyn, PyReadonlyArrayDyn};
use pyo3::{exceptions::PyValueError, prelude::*};

fn shape_error(err: array::ShapeMismatchError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Element-wise approximate equality of two float32 arrays of the same shape.
#[pyfunction]
#[pyo3(signature = (a, b, epsilon = DEFAULT_EPSILON))]
pub fn float_equality_mask<'py>(
    py: Python<'py>,
    a: PyReadonlyArrayDyn<'py, f32>,
    b: PyReadonlyArrayDyn<'py, f32>,
    epsilon: f32,
) -> PyResult<Bound<'py, PyArrayDyn<bool>>> {
    let mask =
        array::float_equality_mask(a.as_array(), b.as_array(), epsilon).map_err(shape_error)?;
    Ok(PyArrayDyn::from_owned_array(py, mask))
}

/// Whether all elements of two float32 arrays are approximately equal.
#[pyfunction]
#[pyo3(signature = (a, b, epsilon = DEFAULT_EPSILON))]
pub fn all_float_equal(
    a: PyReadonlyArrayDyn<'_, f32>,
    b: PyReadonlyArrayDyn<'_, f32>,
    epsilon: f32,
) -> PyResult<bool> {
    array::all_float_equal(a.as_array(), b.as_array(), epsilon).map_err(shape_error)
}
