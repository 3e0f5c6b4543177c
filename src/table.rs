//! Refinement tables: a rule evaluated over successive doublings of `n`,
//! next to its error against the closed-form integral.

use crate::integrand::exact_integral;
use crate::rules::Method;
use crate::utils::as_float;
use ndarray::Array2;
use num::Float;

/// Column holding the subdivision count actually used.
pub const COL_N: usize = 0;
/// Column holding the approximation.
pub const COL_VALUE: usize = 1;
/// Column holding the absolute error against the closed form.
pub const COL_ERROR: usize = 2;
/// Column holding the previous row's error divided by this row's error.
pub const COL_RATIO: usize = 3;

/// Evaluate `method` over `[a, b]` at `rows` successive doublings of its
/// initial subdivision count. The ratio of the first row is NaN.
pub fn refinement_table<T: Float>(method: Method, a: T, b: T, rows: usize) -> Array2<T> {
    let exact = exact_integral(a, b);
    let mut table = Array2::from_elem((rows, 4), T::nan());

    let mut n = method.initial_subdivisions();
    for k in 0..rows {
        let value = method.evaluate(a, b, n);
        let error = (value - exact).abs();

        table[[k, COL_N]] = as_float(method.effective_subdivisions(n));
        table[[k, COL_VALUE]] = value;
        table[[k, COL_ERROR]] = error;
        if k > 0 {
            table[[k, COL_RATIO]] = table[[k - 1, COL_ERROR]] / error;
        }
        n = n.saturating_mul(2);
    }
    table
}

/// Order of accuracy implied by the last error ratio of a refinement table,
/// `log2(e(n/2) / e(n))`.
pub fn observed_order<T: Float>(table: &Array2<T>) -> Option<T> {
    let (rows, _) = table.dim();
    if rows < 2 {
        return None;
    }
    let ratio = table[[rows - 1, COL_RATIO]];
    if ratio.is_finite() && ratio > T::zero() {
        Some(ratio.log2())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_table_layout() {
        let table = refinement_table(Method::Simpson, 0.0, FRAC_PI_2, 4);
        assert_eq!(table.dim(), (4, 4));

        let ns: Vec<f64> = table.column(COL_N).to_vec();
        assert_eq!(ns, vec![2.0, 4.0, 8.0, 16.0]);

        test_rel(table[[1, COL_VALUE]], 3.224526761725583e-01, 1e-12);
        assert!(table[[0, COL_RATIO]].is_nan());
        test_rel(
            table[[2, COL_RATIO]],
            table[[1, COL_ERROR]] / table[[2, COL_ERROR]],
            1e-15,
        );
    }

    #[test]
    fn test_observed_order() {
        let order = |method, rows| {
            let table = refinement_table(method, 0.0, FRAC_PI_2, rows);
            observed_order(&table).unwrap()
        };

        let p = order(Method::LeftRectangle, 10);
        assert!(p > 0.8 && p < 1.2, "left rectangle order {}", p);
        let p = order(Method::MidpointRectangle, 8);
        assert!(p > 1.8 && p < 2.2, "midpoint order {}", p);
        let p = order(Method::Trapezoidal, 8);
        assert!(p > 1.8 && p < 2.2, "trapezoidal order {}", p);
        let p = order(Method::Simpson, 6);
        assert!(p > 3.8 && p < 4.2, "simpson order {}", p);
    }

    #[test]
    fn test_short_tables() {
        let table = refinement_table(Method::Trapezoidal, 0.0, FRAC_PI_2, 1);
        assert_eq!(observed_order(&table), None);

        let table = refinement_table::<f64>(Method::Trapezoidal, 0.0, FRAC_PI_2, 0);
        assert_eq!(table.dim(), (0, 4));
        assert_eq!(observed_order(&table), None);
    }
}
