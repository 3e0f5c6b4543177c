use crate::error::ConvergenceError;

/// A refinement run whose last two approximations agreed within tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Converged<T> {
    /// Accepted approximation.
    pub value: T,
    /// Witness subdivision count: the `n` the rule actually used for `value`.
    pub n: usize,
    /// Number of rule evaluations performed.
    pub iters: usize,
    /// Value `value` was compared against when the run stopped. This is the
    /// seed when the run stopped on its first evaluation.
    pub previous: T,
}

impl<T: Copy + std::ops::Sub<Output = T>> Converged<T> {
    /// Signed difference between the last two compared values.
    pub fn last_difference(&self) -> T {
        self.value - self.previous
    }
}

/// Outcome of a refinement run.
pub type ConvergenceResult<T> = std::result::Result<Converged<T>, ConvergenceError<T>>;
