/// Tolerance used when callers do not provide one, in points.
pub const DEFAULT_EPSILON: f32 = 0.005;

/// Approximate equality of two layout measurements.
///
/// Two NaN are equal, NaN is never equal to a determinate value, and two
/// determinate values are equal when their absolute difference is strictly
/// smaller than `epsilon`.
///
/// A zero or negative `epsilon` makes determinate values never equal. Two
/// identical infinities are not equal either, since their difference is NaN.
#[inline]
pub fn float_equality(a: f32, b: f32, epsilon: f32) -> bool {
    (a.is_nan() && b.is_nan()) || (!a.is_nan() && !b.is_nan() && (a - b).abs() < epsilon)
}

/// [`float_equality`] with the [`DEFAULT_EPSILON`] tolerance.
#[inline]
pub fn approximately_equal(a: f32, b: f32) -> bool {
    float_equality(a, b, DEFAULT_EPSILON)
}

pub trait FloatEquality: Copy {
    fn float_eq_eps(&self, other: Self, epsilon: f32) -> bool;

    fn float_eq(&self, other: Self) -> bool {
        self.float_eq_eps(other, DEFAULT_EPSILON)
    }
}

impl FloatEquality for f32 {
    #[inline]
    fn float_eq_eps(&self, other: f32, epsilon: f32) -> bool {
        float_equality(*self, other, epsilon)
    }
}
