//! Linear model for univariate regression.
//!
//! This module provides:
//! - `GradientDescent`: batch gradient descent on the halved mean squared error
//! - `ParameterPair`: the fitted intercept and slope
//! - `fit`: one-call form with an explicit learning rate and iteration cap
//!
//! # Examples
//!
//! ## Builder
//! ```rust
//! use gradfit::{Convergence, Dataset, GradientDescent, Sample, StopReason};
//!
//! let data = Dataset::from_samples(&[
//!     Sample::new(0.0, 1.0),
//!     Sample::new(1.0, 3.0),
//!     Sample::new(2.0, 5.0),
//! ]);
//!
//! let report = GradientDescent::new()
//!     .learning_rate(0.1)
//!     .max_iterations(5000)
//!     .convergence(Convergence::Tolerance(1e-9))
//!     .fit_report(&data)
//!     .unwrap();
//!
//! assert_eq!(report.stop, StopReason::Converged);
//! assert_eq!(report.params.theta0, 1.0);
//! assert_eq!(report.params.theta1, 2.0);
//! ```
//!
//! ## One call
//! ```rust
//! use gradfit::{Dataset, Sample, linear_model::fit};
//!
//! let data = Dataset::from_samples(&[Sample::new(0.0, 0.0), Sample::new(2.0, 4.0)]);
//! let params = fit(&data, 0.1, 1000).unwrap();
//! assert_eq!(params.theta1, 2.0);
//! ```

mod gradient_descent;
mod parameters;

pub use gradient_descent::{Convergence, FitReport, GradientDescent, StopReason, fit};
pub use parameters::ParameterPair;
