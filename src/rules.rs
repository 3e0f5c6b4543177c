//! Composite Newton-Cotes rules over `n` equal sub-intervals of `[a, b]`.
//!
//! Every rule samples the fixed integrand and shares the signature
//! `rule(a, b, n) -> T`, so the convergence driver can take any of them as
//! a plain function value. Sums are accumulated in index order.

use crate::integrand::integrand;
use crate::utils::{as_float, half, step_size};
use num::Float;

/// A quadrature rule: approximate the integral over `[a, b]` using `n`
/// sub-intervals.
pub type QuadratureRule<T> = fn(T, T, usize) -> T;

/// Sum of the integrand over the nodes `a + i h` for `i` in `range`.
fn node_sum<T: Float>(a: T, h: T, range: impl Iterator<Item = usize>) -> T {
    range.fold(T::zero(), |sum, i| sum + integrand(a + as_float::<T>(i) * h))
}

/// Composite left rectangle rule: nodes `a + i h`, `i = 0..n-1`.
pub fn left_rectangle<T: Float>(a: T, b: T, n: usize) -> T {
    let h = step_size(a, b, n);
    h * node_sum(a, h, 0..n)
}

/// Composite right rectangle rule: nodes `a + i h`, `i = 1..n`.
pub fn right_rectangle<T: Float>(a: T, b: T, n: usize) -> T {
    let h = step_size(a, b, n);
    h * node_sum(a, h, 1..=n)
}

/// Composite midpoint rule: nodes `a + (i + 1/2) h`, `i = 0..n-1`.
pub fn midpoint_rectangle<T: Float>(a: T, b: T, n: usize) -> T {
    let h = step_size(a, b, n);
    let sum = (0..n).fold(T::zero(), |sum, i| {
        sum + integrand(a + (as_float::<T>(i) + half()) * h)
    });
    h * sum
}

/// Composite trapezoidal rule. The endpoints carry weight 1/2.
pub fn trapezoidal<T: Float>(a: T, b: T, n: usize) -> T {
    let h = step_size(a, b, n);
    let ends = half::<T>() * (integrand(a) + integrand(b));
    h * (1..n).fold(ends, |sum, i| sum + integrand(a + as_float::<T>(i) * h))
}

/// Number of sub-intervals Simpson's rule actually uses for a requested
/// `n`: panels pair up sub-intervals, so odd counts are rounded up.
#[inline]
pub fn simpson_subdivisions(n: usize) -> usize {
    if n % 2 != 0 {
        n + 1
    } else {
        n
    }
}

/// Composite Simpson rule with weights 1, 4, 2, 4, ..., 2, 4, 1 scaled by
/// `h / 3`. An odd `n` is silently replaced by `n + 1`.
pub fn simpson<T: Float>(a: T, b: T, n: usize) -> T {
    let n = simpson_subdivisions(n);
    let h = step_size(a, b, n);

    let two = T::one() + T::one();
    let four = two + two;
    let three = two + T::one();

    let ends = integrand(a) + integrand(b);
    let sum = (1..n).fold(ends, |sum, i| {
        let weight = if i % 2 == 0 { two } else { four };
        sum + weight * integrand(a + as_float::<T>(i) * h)
    });

    (h / three) * sum
}

/// The five rules, in the order they are reported.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Method {
    LeftRectangle,
    RightRectangle,
    MidpointRectangle,
    Trapezoidal,
    Simpson,
}

impl Method {
    pub const ALL: [Method; 5] = [
        Method::LeftRectangle,
        Method::RightRectangle,
        Method::MidpointRectangle,
        Method::Trapezoidal,
        Method::Simpson,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Method::LeftRectangle => "Left rectangles",
            Method::RightRectangle => "Right rectangles",
            Method::MidpointRectangle => "Midpoint rectangles",
            Method::Trapezoidal => "Trapezoidal method",
            Method::Simpson => "Simpson's method",
        }
    }

    /// Subdivision count the refinement starts from. Simpson needs an
    /// even count.
    pub fn initial_subdivisions(self) -> usize {
        match self {
            Method::Simpson => 2,
            _ => 1,
        }
    }

    /// Subdivision count the rule uses when asked for `n`.
    pub fn effective_subdivisions(self, n: usize) -> usize {
        match self {
            Method::Simpson => simpson_subdivisions(n),
            _ => n,
        }
    }

    pub fn rule<T: Float>(self) -> QuadratureRule<T> {
        match self {
            Method::LeftRectangle => left_rectangle,
            Method::RightRectangle => right_rectangle,
            Method::MidpointRectangle => midpoint_rectangle,
            Method::Trapezoidal => trapezoidal,
            Method::Simpson => simpson,
        }
    }

    pub fn evaluate<T: Float>(self, a: T, b: T, n: usize) -> T {
        (self.rule())(a, b, n)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
