use ndarray::{Array, ArrayView, Dimension, Zip};
use thiserror::Error;

use crate::float_eq::float_equality;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("cannot compare arrays of shapes {left:?} and {right:?}")]
pub struct ShapeMismatchError {
    pub left: Vec<usize>,
    pub right: Vec<usize>,
}

fn check_shapes<D: Dimension>(
    a: &ArrayView<'_, f32, D>,
    b: &ArrayView<'_, f32, D>,
) -> Result<(), ShapeMismatchError> {
    if a.shape() == b.shape() {
        Ok(())
    } else {
        Err(ShapeMismatchError {
            left: a.shape().to_vec(),
            right: b.shape().to_vec(),
        })
    }
}

/// Element-wise [`float_equality`] of two arrays of the same shape.
pub fn float_equality_mask<D: Dimension>(
    a: ArrayView<'_, f32, D>,
    b: ArrayView<'_, f32, D>,
    epsilon: f32,
) -> Result<Array<bool, D>, ShapeMismatchError> {
    check_shapes(&a, &b)?;
    Ok(Zip::from(a)
        .and(b)
        .map_collect(|&x, &y| float_equality(x, y, epsilon)))
}

/// Whether all elements of `a` and `b` are approximately equal.
pub fn all_float_equal<D: Dimension>(
    a: ArrayView<'_, f32, D>,
    b: ArrayView<'_, f32, D>,
    epsilon: f32,
) -> Result<bool, ShapeMismatchError> {
    check_shapes(&a, &b)?;
    Ok(Zip::from(a)
        .and(b)
        .all(|&x, &y| float_equality(x, y, epsilon)))
}
