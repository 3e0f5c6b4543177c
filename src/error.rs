use log::warn;
use std::error::Error;
use std::fmt;

/// Ways a refinement run can fail to produce a converged value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConvergenceError<T> {
    /// The iteration cap was reached, or doubling `n` would overflow,
    /// before two successive approximations agreed.
    MaxIterationsExceeded {
        /// Most recent approximation.
        last: T,
        /// Subdivision count that produced `last`.
        n: usize,
        /// Number of rule evaluations performed.
        iters: usize,
    },
    /// Tolerance is negative or NaN.
    BadTol { tolerance: T },
    /// Empty or reversed interval, or a zero starting subdivision count.
    InvalidArg { a: T, b: T, n0: usize },
}

impl<T: fmt::Debug> ConvergenceError<T> {
    pub(crate) fn issue_warning(&self) {
        match self {
            ConvergenceError::MaxIterationsExceeded { last, n, iters } => warn!(
                "No convergence after {} iterations (n = {}, last = {:?})",
                iters, n, last
            ),
            ConvergenceError::BadTol { tolerance } => {
                warn!("Invalid tolerance: {:?}", tolerance)
            }
            ConvergenceError::InvalidArg { a, b, n0 } => {
                warn!("Invalid argument(s). a = {:?}, b = {:?}, n0 = {}", a, b, n0)
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Display for ConvergenceError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConvergenceError::MaxIterationsExceeded { last, n, iters } => write!(
                f,
                "Did not converge within {} iterations (last value {:?} at n = {})",
                iters, last, n
            ),
            ConvergenceError::BadTol { tolerance } => {
                write!(f, "Invalid tolerance {:?}: must be non-negative", tolerance)
            }
            ConvergenceError::InvalidArg { a, b, n0 } => write!(
                f,
                "Invalid arguments: need a < b and n0 > 0 (a = {:?}, b = {:?}, n0 = {})",
                a, b, n0
            ),
        }
    }
}

impl<T: fmt::Debug> Error for ConvergenceError<T> {}
