//! Runs all five rules over one interval and formats the results.

use crate::driver::{ConvergenceDriver, ConvergenceDriverBuilder, DEFAULT_TOLERANCE};
use crate::error::ConvergenceError;
use crate::integrand::reference_solution;
use crate::rules::Method;
use std::f64::consts::FRAC_PI_2;
use std::fmt;

/// What the first comparison of each rule's refinement is made against.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SeedPolicy {
    /// A single zero-initialised previous value shared by all rules: the
    /// first rule compares against zero, every later rule against the value
    /// the rule before it converged to.
    Carried,
    /// Every rule starts without a prior estimate.
    Fresh,
}

/// Parameters of a session.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Lower bound of integration.
    pub a: f64,
    /// Upper bound of integration.
    pub b: f64,
    pub tolerance: f64,
    /// Maximum rule evaluations per method, `None` for no limit.
    pub max_iters: Option<usize>,
    pub seed: SeedPolicy,
}

impl SessionConfig {
    /// `[0, pi/2]`, tolerance `1e-7`, no iteration limit, carried seed.
    pub fn reference() -> SessionConfig {
        SessionConfig {
            a: 0.0,
            b: FRAC_PI_2,
            tolerance: DEFAULT_TOLERANCE,
            max_iters: None,
            seed: SeedPolicy::Carried,
        }
    }

    fn driver(&self) -> ConvergenceDriver<f64> {
        let builder = ConvergenceDriverBuilder::default().tolerance(self.tolerance);
        let builder = match self.max_iters {
            Some(max_iters) => builder.max_iters(max_iters),
            None => builder.unbounded(),
        };
        builder.build()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig::reference()
    }
}

/// Converged value of one method.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReportLine {
    pub method: Method,
    pub value: f64,
    /// Witness subdivision count.
    pub n: usize,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {:.10} (n = {})", self.method.label(), self.value, self.n)
    }
}

/// Results of a session, one line per method in [`Method::ALL`] order.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    /// Reference value printed as the analytical solution.
    pub analytic: f64,
    pub lines: Vec<ReportLine>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Analytical solution: {:.10}", self.analytic)?;
        for line in self.lines.iter() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Refine every method in turn. Stops at the first method that fails.
pub fn run_session(config: &SessionConfig) -> Result<Report, ConvergenceError<f64>> {
    let driver = config.driver();
    let mut previous = 0.0;
    let mut lines = Vec::with_capacity(Method::ALL.len());

    for &method in Method::ALL.iter() {
        let seed = match config.seed {
            SeedPolicy::Carried => Some(previous),
            SeedPolicy::Fresh => None,
        };
        let res = driver.converge_method(method, config.a, config.b, seed)?;
        previous = res.value;
        lines.push(ReportLine {
            method,
            value: res.value,
            n: res.n,
        });
    }

    Ok(Report {
        analytic: reference_solution(),
        lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrand::exact_integral;
    use crate::test_utils::*;

    #[test]
    fn test_reference_session() {
        let report = run_session(&SessionConfig::reference()).unwrap();
        let exact = exact_integral(0.0, FRAC_PI_2);

        let methods: Vec<Method> = report.lines.iter().map(|l| l.method).collect();
        assert_eq!(methods, Method::ALL.to_vec());

        // the first estimate of the left rule is f(0) h = 0, equal to the seed
        assert_eq!(report.lines[0].value, 0.0);
        assert_eq!(report.lines[0].n, 1);

        let expected = [
            (3.121329189e-01, 16777216),
            (3.121330061e-01, 4096),
            (3.121329614e-01, 8192),
            (3.121329769e-01, 256),
        ];
        for (line, &(exp_result, exp_n)) in report.lines[1..].iter().zip(expected.iter()) {
            test_abs(line.value, exp_result, 1e-9);
            test_abs(line.value, exact, 1e-6);
            assert_eq!(line.n, exp_n, "{}", line.method);
        }
        for line in report.lines.iter() {
            assert!(line.n.is_power_of_two());
        }
    }

    #[test]
    fn test_render() {
        let report = run_session(&SessionConfig::reference()).unwrap();
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Analytical solution: 0.0000000000",
                "Left rectangles: 0.0000000000 (n = 1)",
                "Right rectangles: 0.3121329189 (n = 16777216)",
                "Midpoint rectangles: 0.3121330061 (n = 4096)",
                "Trapezoidal method: 0.3121329614 (n = 8192)",
                "Simpson's method: 0.3121329769 (n = 256)",
            ]
        );
    }

    #[test]
    fn test_fresh_session() {
        let config = SessionConfig {
            tolerance: 1e-4,
            seed: SeedPolicy::Fresh,
            ..SessionConfig::reference()
        };
        let report = run_session(&config).unwrap();
        let exact = exact_integral(0.0, FRAC_PI_2);

        // without a zero seed the left rule has to actually refine
        assert_eq!(report.lines[0].n, 16384);
        test_abs(report.lines[0].value, 3.121917972e-01, 1e-9);
        for line in report.lines.iter() {
            test_abs(line.value, exact, 1e-4);
        }
        assert_eq!(report.lines[4].n, 32);
    }

    #[test]
    fn test_session_limit() {
        let config = SessionConfig {
            max_iters: Some(10),
            ..SessionConfig::reference()
        };
        match run_session(&config) {
            Err(ConvergenceError::MaxIterationsExceeded { n, iters, .. }) => {
                // left converges at once, right rectangles runs out first
                assert_eq!(iters, 10);
                assert_eq!(n, 512);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_invalid_interval() {
        let config = SessionConfig {
            a: 1.0,
            b: 0.0,
            ..SessionConfig::reference()
        };
        assert!(run_session(&config).is_err());
    }
}
