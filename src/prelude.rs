pub use crate::driver::{ConvergenceDriver, ConvergenceDriverBuilder};
pub use crate::error::ConvergenceError;
pub use crate::integrand::{exact_integral, integrand, reference_solution};
pub use crate::report::{run_session, Report, SeedPolicy, SessionConfig};
pub use crate::result::{Converged, ConvergenceResult};
pub use crate::rules::{
    left_rectangle, midpoint_rectangle, right_rectangle, simpson, simpson_subdivisions, trapezoidal,
    Method, QuadratureRule,
};
pub use crate::table::{observed_order, refinement_table};
