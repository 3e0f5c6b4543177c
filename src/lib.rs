//! Composite rectangle, trapezoidal and Simpson quadrature of
//! `f(x) = x cos(x^2)`, each refined by doubling the number of
//! sub-intervals until successive approximations agree.

pub mod driver;
pub mod error;
pub mod integrand;
pub mod prelude;
pub mod report;
pub mod result;
pub mod rules;
pub mod table;
#[cfg(test)]
pub(crate) mod test_utils;
pub(crate) mod utils;
