//! Refinement by interval doubling.
//!
//! A run evaluates a rule at `n0, 2 n0, 4 n0, ...` and stops as soon as two
//! successive approximations differ by at most the tolerance. Only the
//! previous and the current approximation are kept. The successive
//! difference is a stopping heuristic, not an error bound.

use crate::error::ConvergenceError;
use crate::result::{Converged, ConvergenceResult};
use crate::rules::Method;
use log::{debug, info};
use num::Float;
use std::fmt::Debug;

/// Tolerance used when the builder is not given one.
pub const DEFAULT_TOLERANCE: f64 = 1e-7;

#[derive(Clone, Debug)]
/// Drives a quadrature rule to convergence by doubling the subdivision
/// count.
pub struct ConvergenceDriver<T: Float> {
    /// Largest accepted difference between successive approximations.
    pub tolerance: T,
    /// Maximum number of rule evaluations, or `None` for no limit.
    pub max_iters: Option<usize>,
}

impl<T: Float + Debug> ConvergenceDriver<T> {
    /// Refine `rule` over `[a, b]` starting from `n0` sub-intervals, with no
    /// prior estimate: the first evaluation is never accepted on its own.
    ///
    /// `subdivisions` maps a requested count to the count `rule` actually
    /// uses; the accepted value is reported with the mapped count. Pass
    /// `simpson_subdivisions` for [`simpson`](crate::rules::simpson) and
    /// `|n| n` for the other rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyphus_quadrature::prelude::*;
    ///
    /// let driver = ConvergenceDriverBuilder::default().tolerance(1e-7).build();
    /// let res = driver
    ///     .converge(simpson, simpson_subdivisions, 0.0, std::f64::consts::FRAC_PI_2, 2)
    ///     .unwrap();
    /// assert_eq!(res.n, 256);
    /// ```
    pub fn converge<R, W>(
        &self,
        rule: R,
        subdivisions: W,
        a: T,
        b: T,
        n0: usize,
    ) -> ConvergenceResult<T>
    where
        R: Fn(T, T, usize) -> T,
        W: Fn(usize) -> usize,
    {
        self.converge_from(rule, subdivisions, a, b, n0, None)
    }

    /// Like [`converge`](Self::converge), but the first evaluation is
    /// compared against `seed` when one is given.
    pub fn converge_from<R, W>(
        &self,
        rule: R,
        subdivisions: W,
        a: T,
        b: T,
        n0: usize,
        seed: Option<T>,
    ) -> ConvergenceResult<T>
    where
        R: Fn(T, T, usize) -> T,
        W: Fn(usize) -> usize,
    {
        let result = self
            .check_args(a, b, n0)
            .and_then(|_| self.iterate(rule, subdivisions, a, b, n0, seed));
        if let Err(err) = &result {
            err.issue_warning();
        }
        result
    }

    /// Refine one of the built-in rules from its own starting count. The
    /// witness is the count the rule actually used.
    pub fn converge_method(
        &self,
        method: Method,
        a: T,
        b: T,
        seed: Option<T>,
    ) -> ConvergenceResult<T> {
        self.converge_from(
            method.rule::<T>(),
            |n| method.effective_subdivisions(n),
            a,
            b,
            method.initial_subdivisions(),
            seed,
        )
    }

    fn check_args(&self, a: T, b: T, n0: usize) -> Result<(), ConvergenceError<T>> {
        if self.tolerance.is_nan() || self.tolerance < T::zero() {
            return Err(ConvergenceError::BadTol {
                tolerance: self.tolerance,
            });
        }
        if n0 == 0 || !a.is_finite() || !b.is_finite() || !(a < b) {
            return Err(ConvergenceError::InvalidArg { a, b, n0 });
        }
        Ok(())
    }

    fn iterate<R, W>(
        &self,
        rule: R,
        witness: W,
        a: T,
        b: T,
        n0: usize,
        seed: Option<T>,
    ) -> ConvergenceResult<T>
    where
        R: Fn(T, T, usize) -> T,
        W: Fn(usize) -> usize,
    {
        let mut n = n0;
        let mut previous = seed;
        let mut iters: usize = 0;

        loop {
            let current = rule(a, b, n);
            iters += 1;

            if let Some(prev) = previous {
                let diff = (current - prev).abs();
                debug!("n = {}: {:?} (difference {:?})", witness(n), current, diff);
                if diff <= self.tolerance {
                    info!(
                        "Converged to {:?} at n = {} after {} iterations",
                        current,
                        witness(n),
                        iters
                    );
                    return Ok(Converged {
                        value: current,
                        n: witness(n),
                        iters,
                        previous: prev,
                    });
                }
            } else {
                debug!("n = {}: {:?}", witness(n), current);
            }

            let exhausted = self.max_iters.map_or(false, |max| iters >= max);
            let next = n.checked_mul(2);
            match next {
                Some(next) if !exhausted => n = next,
                _ => {
                    return Err(ConvergenceError::MaxIterationsExceeded {
                        last: current,
                        n: witness(n),
                        iters,
                    })
                }
            }
            previous = Some(current);
        }
    }
}

/// Builder struct used to construct a driver with wanted parameters.
pub struct ConvergenceDriverBuilder<T: Float> {
    /// Largest accepted difference between successive approximations.
    tolerance: Option<T>,
    /// Maximum number of rule evaluations.
    max_iters: Option<usize>,
}

impl<T: Float> Default for ConvergenceDriverBuilder<T> {
    fn default() -> Self {
        ConvergenceDriverBuilder {
            tolerance: None,
            max_iters: None,
        }
    }
}

impl<T: Float> ConvergenceDriverBuilder<T> {
    /// Set the tolerance on successive approximations.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = Some(tolerance);
        self
    }
    /// Stop with an error after `max_iters` rule evaluations (at least one).
    pub fn max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = Some(max_iters.max(1));
        self
    }
    /// Keep doubling until convergence, however long it takes.
    pub fn unbounded(mut self) -> Self {
        self.max_iters = None;
        self
    }
    /// Build the driver.
    pub fn build(self) -> ConvergenceDriver<T> {
        ConvergenceDriver {
            tolerance: self
                .tolerance
                .unwrap_or_else(|| num::cast(DEFAULT_TOLERANCE).unwrap_or_else(T::nan)),
            max_iters: self.max_iters,
        }
    }
}
