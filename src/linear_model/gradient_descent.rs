use super::ParameterPair;
use crate::config::FitConfig;
use crate::error::FitError;
use crate::{Dataset, metrics};
use log::{debug, trace, warn};

/// Stopping rule applied to each candidate update.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Convergence {
    /// Stop only when the candidate pair is bit-identical to the current one.
    #[default]
    Exact,
    /// Stop when both parameters move by at most the given amount.
    Tolerance(f64),
}

impl Convergence {
    fn is_met(&self, old: ParameterPair, new: ParameterPair) -> bool {
        match *self {
            Convergence::Exact => new.theta0 == old.theta0 && new.theta1 == old.theta1,
            Convergence::Tolerance(eps) => {
                (new.theta0 - old.theta0).abs() <= eps && (new.theta1 - old.theta1).abs() <= eps
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    Converged,
    IterationLimit,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FitReport {
    /// Fitted pair, rounded to two decimals.
    pub params: ParameterPair,
    /// Number of updates adopted.
    pub iterations: usize,
    pub stop: StopReason,
    /// Cost of the starting pair and after every adopted update.
    /// Empty unless cost tracking is on.
    pub cost_history: Vec<f64>,
}

#[derive(Clone, Debug)]
pub struct GradientDescent {
    learning_rate: f64,
    max_iterations: usize,
    convergence: Convergence,
    track_cost: bool,
}

impl GradientDescent {
    pub fn new() -> Self {
        Self {
            learning_rate: 0.1,
            max_iterations: 1000,
            convergence: Convergence::Exact,
            track_cost: false,
        }
    }

    pub fn from_config(config: &FitConfig) -> Self {
        let convergence = match config.tolerance {
            Some(eps) => Convergence::Tolerance(eps),
            None => Convergence::Exact,
        };

        Self::new()
            .learning_rate(config.learning_rate)
            .max_iterations(config.max_iterations)
            .convergence(convergence)
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn convergence(mut self, convergence: Convergence) -> Self {
        self.convergence = convergence;
        self
    }

    pub fn track_cost(mut self, track_cost: bool) -> Self {
        self.track_cost = track_cost;
        self
    }

    pub fn fit(&self, dataset: &Dataset) -> Result<ParameterPair, FitError> {
        self.fit_report(dataset).map(|report| report.params)
    }

    pub fn fit_report(&self, dataset: &Dataset) -> Result<FitReport, FitError> {
        self.validate(dataset)?;

        let m = dataset.n_samples() as f64;
        let step = self.learning_rate * (1.0 / m);

        debug!(
            "gradient descent: {} samples, learning_rate={}, max_iterations={}, convergence={:?}",
            dataset.n_samples(),
            self.learning_rate,
            self.max_iterations,
            self.convergence
        );

        let mut params = ParameterPair::default();
        let mut cost_history = Vec::new();
        let mut iterations = 0;
        let mut stop = StopReason::IterationLimit;

        while iterations < self.max_iterations {
            let diff = dataset.residuals(params.theta0, params.theta1);
            if self.track_cost {
                cost_history.push(metrics::half_mean_square(&diff));
            }

            let candidate = ParameterPair {
                theta0: params.theta0 - step * diff.sum(),
                theta1: params.theta1 - step * diff.dot(dataset.x()),
            };

            if self.convergence.is_met(params, candidate) {
                stop = StopReason::Converged;
                break;
            }

            params = candidate;
            iterations += 1;
            trace!("iteration {}: {}", iterations, params);
        }

        if self.track_cost && stop == StopReason::IterationLimit {
            let diff = dataset.residuals(params.theta0, params.theta1);
            cost_history.push(metrics::half_mean_square(&diff));
        }

        if !params.is_finite() {
            warn!(
                "gradient descent diverged after {} iterations (learning_rate={})",
                iterations, self.learning_rate
            );
        }

        debug!("stopped ({:?}) after {} iterations at {}", stop, iterations, params);

        Ok(FitReport {
            params: params.rounded()?,
            iterations,
            stop,
            cost_history,
        })
    }

    fn validate(&self, dataset: &Dataset) -> Result<(), FitError> {
        if dataset.is_empty() {
            return Err(FitError::invalid("dataset must contain at least one sample"));
        }

        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(FitError::invalid(format!(
                "learning_rate must be positive, got {}",
                self.learning_rate
            )));
        }

        if self.max_iterations == 0 {
            return Err(FitError::invalid("max_iterations must be positive"));
        }

        if let Convergence::Tolerance(eps) = self.convergence {
            if !(eps.is_finite() && eps >= 0.0) {
                return Err(FitError::invalid(format!(
                    "tolerance must be finite and non-negative, got {}",
                    eps
                )));
            }
        }

        Ok(())
    }
}

impl Default for GradientDescent {
    fn default() -> Self {
        Self::new()
    }
}

/// Fits `dataset` with exact convergence checking.
pub fn fit(
    dataset: &Dataset,
    learning_rate: f64,
    max_iterations: usize,
) -> Result<ParameterPair, FitError> {
    GradientDescent::new()
        .learning_rate(learning_rate)
        .max_iterations(max_iterations)
        .fit(dataset)
}
