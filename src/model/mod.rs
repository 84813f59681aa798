//! Pick-rate modeling harness
//!
//! Consumes the assembled tidy table and answers the project's question:
//! which static and dynamic features predict pick rate? Two ordinary
//! least squares models are fit on a day-granular train/test split and
//! compared by adjusted R^2 on the held-out days:
//! - *full*: champion age, patches since change, skin count, win rate,
//!   ban rate
//! - *static-only*: champion age, patches since change, skin count

pub mod ols;

#[cfg(test)]
mod tests;

use crate::error::{LolStatsError, Result};
use crate::pipeline::tables::{TidyRow, TidyTable};
use nalgebra::{DMatrix, DVector};
use serde::Serialize;

/// A predictor column of the tidy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    ChampionAge,
    PatchesSinceChange,
    NumSkins,
    WinRate,
    BanRate,
}

impl Feature {
    pub fn name(&self) -> &'static str {
        match self {
            Feature::ChampionAge => "champion_age",
            Feature::PatchesSinceChange => "patches_since_change",
            Feature::NumSkins => "num_skins",
            Feature::WinRate => "winrate",
            Feature::BanRate => "banrate",
        }
    }

    fn extract(&self, row: &TidyRow) -> f64 {
        match self {
            Feature::ChampionAge => row.champion_age as f64,
            Feature::PatchesSinceChange => row.patches_since_change as f64,
            Feature::NumSkins => row.num_skins as f64,
            Feature::WinRate => row.winrate,
            Feature::BanRate => row.banrate,
        }
    }
}

/// Every available predictor.
pub const FULL_MODEL: &[Feature] = &[
    Feature::ChampionAge,
    Feature::PatchesSinceChange,
    Feature::NumSkins,
    Feature::WinRate,
    Feature::BanRate,
];

/// Static features only.
pub const STATIC_MODEL: &[Feature] = &[
    Feature::ChampionAge,
    Feature::PatchesSinceChange,
    Feature::NumSkins,
];

/// One named coefficient of a fitted model.
#[derive(Debug, Clone, Serialize)]
pub struct Coefficient {
    pub feature: &'static str,
    pub value: f64,
}

/// A fitted model and its held-out evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct FittedModel {
    pub name: String,
    pub intercept: f64,
    pub coefficients: Vec<Coefficient>,
    pub r_squared: f64,
    pub adj_r_squared: f64,
    pub n_train: usize,
    pub n_test: usize,
}

/// Side-by-side evaluation of the full and static-only models.
#[derive(Debug, Clone, Serialize)]
pub struct ModelComparison {
    pub full: FittedModel,
    pub static_only: FittedModel,
    pub winner: String,
    pub train_days: usize,
    pub test_days: usize,
}

/// Design matrix (intercept column first) and target vector for one feature
/// set over a slice of tidy rows.
fn design_matrix(rows: &[TidyRow], features: &[Feature]) -> (DMatrix<f64>, DVector<f64>) {
    let n = rows.len();
    let x = DMatrix::from_fn(n, features.len() + 1, |i, j| {
        if j == 0 {
            1.0
        } else {
            features[j - 1].extract(&rows[i])
        }
    });
    let y = DVector::from_fn(n, |i, _| rows[i].pickrate);
    (x, y)
}

/// Split the tidy table at a day boundary: the earliest
/// `ceil(train_fraction * D)` distinct days train (capped at `D - 1` so at
/// least one day is held out), the remainder test.
///
/// Day-granular so that a champion's rows never straddle the boundary within
/// one day, and deterministic so runs are reproducible.
pub fn split_by_day(
    table: &TidyTable,
    train_fraction: f64,
) -> Result<(Vec<TidyRow>, Vec<TidyRow>, usize, usize)> {
    if !(0.0..1.0).contains(&train_fraction) || train_fraction == 0.0 {
        return Err(LolStatsError::Degenerate {
            message: format!("train fraction {train_fraction} must be in (0, 1)"),
        });
    }
    if table.num_days < 2 {
        return Err(LolStatsError::Degenerate {
            message: format!(
                "need at least 2 distinct days of rate data, got {}",
                table.num_days
            ),
        });
    }

    let train_days = ((train_fraction * table.num_days as f64).ceil() as usize)
        .clamp(1, table.num_days - 1);
    let boundary = train_days * table.num_champions;

    let train = table.rows[..boundary].to_vec();
    let test = table.rows[boundary..].to_vec();
    Ok((train, test, train_days, table.num_days - train_days))
}

/// Fit one feature set on the training rows and score it on the held-out
/// rows.
pub fn fit_model(
    name: &str,
    features: &[Feature],
    train: &[TidyRow],
    test: &[TidyRow],
) -> Result<FittedModel> {
    let (x_train, y_train) = design_matrix(train, features);
    let beta = ols::fit(&x_train, &y_train)?;

    let (x_test, y_test) = design_matrix(test, features);
    let predicted = ols::predict(&x_test, &beta);
    let r_squared = ols::r_squared(&y_test, &predicted)?;
    let adj_r_squared = ols::adjusted_r_squared(&y_test, &predicted, features.len())?;

    let coefficients = features
        .iter()
        .enumerate()
        .map(|(i, feature)| Coefficient {
            feature: feature.name(),
            value: beta[i + 1],
        })
        .collect();

    Ok(FittedModel {
        name: name.to_string(),
        intercept: beta[0],
        coefficients,
        r_squared,
        adj_r_squared,
        n_train: train.len(),
        n_test: test.len(),
    })
}

/// Run the two-model comparison over an assembled tidy table.
pub fn compare_models(table: &TidyTable, train_fraction: f64) -> Result<ModelComparison> {
    let (train, test, train_days, test_days) = split_by_day(table, train_fraction)?;

    let full = fit_model("full", FULL_MODEL, &train, &test)?;
    let static_only = fit_model("static-only", STATIC_MODEL, &train, &test)?;

    let winner = if full.adj_r_squared >= static_only.adj_r_squared {
        full.name.clone()
    } else {
        static_only.name.clone()
    };

    Ok(ModelComparison {
        full,
        static_only,
        winner,
        train_days,
        test_days,
    })
}
