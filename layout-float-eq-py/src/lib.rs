use ::layout_float_eq::{float_eq, VERSION};
use pyo3::prelude::*;

mod array;

/// Whether `a` and `b` are equal up to `epsilon`.
///
/// Two NaN compare equal, NaN and a number never do.
#[pyfunction]
#[pyo3(signature = (a, b, epsilon = float_eq::DEFAULT_EPSILON))]
fn float_equality(a: f32, b: f32, epsilon: f32) -> bool {
    float_eq::float_equality(a, b, epsilon)
}

#[pymodule]
#[pyo3(name = "layout_float_eq")]
fn layout_float_eq_py(pymod: &Bound<'_, PyModule>) -> PyResult<()> {
    pymod.add("__version__", VERSION)?;
    pymod.add("DEFAULT_EPSILON", float_eq::DEFAULT_EPSILON)?;
    pymod.add_function(wrap_pyfunction!(float_equality, pymod)?)?;
    pymod.add_function(wrap_pyfunction!(array::float_equality_mask, pymod)?)?;
    pymod.add_function(wrap_pyfunction!(array::all_float_equal, pymod)?)?;
    Ok(())
}
