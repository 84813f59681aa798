//! Ordinary least squares on dense matrices.

use crate::error::{LolStatsError, Result};
use nalgebra::{DMatrix, DVector};

/// Fit `beta` for `y ~ X beta` via the normal equations, solved by LU
/// decomposition. `X` must already include the intercept column.
pub fn fit(x: &DMatrix<f64>, y: &DVector<f64>) -> Result<DVector<f64>> {
    if x.nrows() != y.len() {
        return Err(LolStatsError::misaligned(format!(
            "design matrix has {} rows but target has {} values",
            x.nrows(),
            y.len()
        )));
    }
    if x.nrows() < x.ncols() {
        return Err(LolStatsError::Degenerate {
            message: format!(
                "{} observations cannot identify {} parameters",
                x.nrows(),
                x.ncols()
            ),
        });
    }

    let xtx = x.transpose() * x;
    let xty = x.transpose() * y;
    xtx.lu().solve(&xty).ok_or(LolStatsError::Degenerate {
        message: "normal equations are singular (collinear features)".to_string(),
    })
}

/// Predicted values for a fitted coefficient vector.
pub fn predict(x: &DMatrix<f64>, beta: &DVector<f64>) -> DVector<f64> {
    x * beta
}

/// Coefficient of determination from actuals and predictions.
pub fn r_squared(actual: &DVector<f64>, predicted: &DVector<f64>) -> Result<f64> {
    if actual.len() != predicted.len() {
        return Err(LolStatsError::misaligned(format!(
            "{} actuals but {} predictions",
            actual.len(),
            predicted.len()
        )));
    }

    let mean = actual.mean();
    let ss_total: f64 = actual.iter().map(|y| (y - mean).powi(2)).sum();
    if ss_total == 0.0 {
        return Err(LolStatsError::Degenerate {
            message: "target is constant; R^2 is undefined".to_string(),
        });
    }
    let ss_residual: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(y, y_hat)| (y - y_hat).powi(2))
        .sum();

    Ok(1.0 - ss_residual / ss_total)
}

/// Adjusted R^2 from residuals: `1 - (1 - r^2)(n - 1) / (n - p - 1)`,
/// where `p` counts the features excluding the intercept.
pub fn adjusted_r_squared(
    actual: &DVector<f64>,
    predicted: &DVector<f64>,
    num_features: usize,
) -> Result<f64> {
    let n = actual.len();
    if n <= num_features + 1 {
        return Err(LolStatsError::Degenerate {
            message: format!(
                "adjusted R^2 needs more than {} observations for {} features, got {}",
                num_features + 1,
                num_features,
                n
            ),
        });
    }

    let r2 = r_squared(actual, predicted)?;
    let n = n as f64;
    let p = num_features as f64;
    Ok(1.0 - (1.0 - r2) * (n - 1.0) / (n - p - 1.0))
}
