use num::Float;

/// Convert a subdivision index or count to the float type. Every `usize`
/// is representable (possibly rounded) by `f32` and `f64`.
#[inline]
pub fn as_float<T: Float>(i: usize) -> T {
    num::cast::<usize, T>(i).unwrap_or_else(T::nan)
}

#[inline]
pub fn half<T: Float>() -> T {
    T::one() / (T::one() + T::one())
}

/// Width of one of `n` equal sub-intervals of `[a, b]`.
#[inline]
pub fn step_size<T: Float>(a: T, b: T, n: usize) -> T {
    (b - a) / as_float(n)
}
