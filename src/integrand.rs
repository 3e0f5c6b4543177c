//! The fixed integrand `f(x) = x cos(x^2)` and its closed-form integral.

use crate::utils::half;
use num::traits::FloatConst;
use num::Float;

/// Function being integrated: `f(x) = x cos(x^2)`.
#[inline]
pub fn integrand<T: Float>(x: T) -> T {
    x * (x * x).cos()
}

/// Antiderivative of the integrand: `F(x) = sin(x^2) / 2`.
#[inline]
pub fn antiderivative<T: Float>(x: T) -> T {
    half::<T>() * (x * x).sin()
}

/// Closed-form value of the integral of `f` from `a` to `b`.
pub fn exact_integral<T: Float>(a: T, b: T) -> T {
    antiderivative(b) - antiderivative(a)
}

/// The "analytical solution" printed next to the numerical results,
/// `sin(pi) / 2`. Zero up to the rounding of `sin(pi)`.
pub fn reference_solution<T: Float + FloatConst>() -> T {
    half::<T>() * T::PI().sin()
}
