use crate::Vector;
use crate::error::FitError;

fn check_lengths(y_true: &Vector, y_pred: &Vector) -> Result<(), FitError> {
    if y_true.len() != y_pred.len() {
        return Err(FitError::invalid("y_true and y_pred must have the same length"));
    }
    if y_true.is_empty() {
        return Err(FitError::invalid("metrics need at least one sample"));
    }
    Ok(())
}

pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64, FitError> {
    check_lengths(y_true, y_pred)?;

    let diff = y_pred - y_true;
    Ok(diff.mapv(|d| d * d).sum() / y_true.len() as f64)
}

/// Halved mean squared error, the quantity gradient descent minimises.
pub fn cost(y_true: &Vector, y_pred: &Vector) -> Result<f64, FitError> {
    check_lengths(y_true, y_pred)?;
    Ok(half_mean_square(&(y_pred - y_true)))
}

/// `Σ d² / 2m` over residuals `d`; caller guarantees `d` is non-empty.
pub(crate) fn half_mean_square(diff: &Vector) -> f64 {
    diff.mapv(|d| d * d).sum() / (2.0 * diff.len() as f64)
}

pub fn r2_score(y_true: &Vector, y_pred: &Vector) -> Result<f64, FitError> {
    check_lengths(y_true, y_pred)?;

    let y_mean = y_true.sum() / y_true.len() as f64;
    let ss_res = (y_true - y_pred).mapv(|x| x * x).sum();
    let ss_tot = y_true.mapv(|x| (x - y_mean) * (x - y_mean)).sum();

    if ss_tot == 0.0 {
        return Ok(1.0); // constant target
    }

    Ok(1.0 - ss_res / ss_tot)
}
