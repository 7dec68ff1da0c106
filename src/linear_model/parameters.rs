use crate::error::FitError;
use crate::{Dataset, Vector};
use std::fmt;

/// Intercept and slope of the hypothesis `h(x) = theta0 + theta1 * x`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParameterPair {
    pub theta0: f64,
    pub theta1: f64,
}

impl ParameterPair {
    pub fn new(theta0: f64, theta1: f64) -> Self {
        Self { theta0, theta1 }
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.theta0 + self.theta1 * x
    }

    pub fn predict_all(&self, x: &Vector) -> Vector {
        x.mapv(|xi| self.predict(xi))
    }

    /// R² of the line against `dataset`.
    pub fn score(&self, dataset: &Dataset) -> Result<f64, FitError> {
        let y_pred = self.predict_all(dataset.x());
        crate::metrics::r2_score(dataset.y(), &y_pred)
    }

    pub(crate) fn rounded(&self) -> Result<Self, FitError> {
        Ok(Self {
            theta0: round_2(self.theta0)?,
            theta1: round_2(self.theta1)?,
        })
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.theta0.is_finite() && self.theta1.is_finite()
    }
}

impl fmt::Display for ParameterPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "theta0: {:.2}, theta1: {:.2}", self.theta0, self.theta1)
    }
}

// The formatter rounds the exact binary value, ties to even.
fn round_2(value: f64) -> Result<f64, FitError> {
    format!("{:.2}", value)
        .parse::<f64>()
        .map_err(|e| FitError::invalid(format!("cannot round {}: {}", value, e)))
}
