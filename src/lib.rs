//! Univariate linear regression fitted by batch gradient descent.
//!
//! ```rust
//! use gradfit::{Dataset, GradientDescent, Sample};
//!
//! let data = Dataset::from_samples(&[
//!     Sample::new(0.0, 0.0),
//!     Sample::new(1.0, 1.0),
//!     Sample::new(2.0, 2.0),
//!     Sample::new(3.0, 3.0),
//! ]);
//!
//! let params = GradientDescent::new().fit(&data).unwrap();
//! assert_eq!(params.theta0, 0.0);
//! assert_eq!(params.theta1, 1.0);
//! ```

pub use ndarray::Array1;

pub mod config;
pub mod dataset;
pub mod error;
pub mod linear_model;
pub mod metrics;

pub use config::FitConfig;
pub use dataset::{Dataset, Sample};
pub use error::{ConfigError, DatasetError, FitError};
pub use linear_model::{Convergence, FitReport, GradientDescent, ParameterPair, StopReason, fit};

pub type Vector = Array1<f64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_reexports_fit_end_to_end() {
        let x = Vector::from(vec![0.0, 1.0, 2.0]);
        let y = Vector::from(vec![1.0, 2.0, 3.0]);
        let data = Dataset::new(x, y).unwrap();
        let params: ParameterPair = fit(&data, 0.1, 2000).unwrap();
        assert_eq!(params, ParameterPair::new(1.0, 1.0));

        let report: FitReport = GradientDescent::from_config(&FitConfig::default())
            .fit_report(&data)
            .unwrap();
        assert_eq!(report.params, params);
        assert!(matches!(report.stop, StopReason::Converged | StopReason::IterationLimit));
        assert_eq!(Convergence::default(), Convergence::Exact);
    }
}
