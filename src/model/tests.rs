//! Unit tests for the modeling harness

use super::*;
use crate::error::LolStatsError;
use nalgebra::{DMatrix, DVector};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

mod ols_tests {
    use super::*;

    #[test]
    fn test_fit_recovers_exact_coefficients() {
        // y = 2 + 3*x1 - x2 over a non-collinear grid.
        let points = [
            (0.0, 0.0),
            (1.0, 0.0),
            (0.0, 1.0),
            (2.0, 1.0),
            (1.0, 3.0),
            (4.0, 2.0),
        ];
        let x = DMatrix::from_fn(points.len(), 3, |i, j| match j {
            0 => 1.0,
            1 => points[i].0,
            _ => points[i].1,
        });
        let y = DVector::from_fn(points.len(), |i, _| {
            2.0 + 3.0 * points[i].0 - points[i].1
        });

        let beta = ols::fit(&x, &y).unwrap();

        assert_close(beta[0], 2.0);
        assert_close(beta[1], 3.0);
        assert_close(beta[2], -1.0);
    }

    #[test]
    fn test_fit_collinear_features_is_degenerate() {
        // Second feature is exactly twice the first.
        let x = DMatrix::from_fn(4, 3, |i, j| match j {
            0 => 1.0,
            1 => i as f64,
            _ => 2.0 * i as f64,
        });
        let y = DVector::from_fn(4, |i, _| i as f64);

        let err = ols::fit(&x, &y).unwrap_err();
        assert!(matches!(err, LolStatsError::Degenerate { .. }));
    }

    #[test]
    fn test_fit_underdetermined_is_degenerate() {
        let x = DMatrix::from_fn(2, 3, |i, j| (i + j) as f64);
        let y = DVector::from_fn(2, |i, _| i as f64);

        let err = ols::fit(&x, &y).unwrap_err();
        assert!(matches!(err, LolStatsError::Degenerate { .. }));
    }

    #[test]
    fn test_r_squared_perfect_fit() {
        let actual = DVector::from_vec(vec![1.0, 2.0, 3.0]);
        let predicted = actual.clone();

        assert_close(ols::r_squared(&actual, &predicted).unwrap(), 1.0);
    }

    #[test]
    fn test_r_squared_constant_target_is_degenerate() {
        let actual = DVector::from_vec(vec![0.5, 0.5, 0.5]);
        let predicted = DVector::from_vec(vec![0.4, 0.5, 0.6]);

        let err = ols::r_squared(&actual, &predicted).unwrap_err();
        assert!(matches!(err, LolStatsError::Degenerate { .. }));
    }

    #[test]
    fn test_adjusted_r_squared_formula() {
        // ss_total = 5, ss_residual = 0.1 => r2 = 0.98;
        // adj = 1 - 0.02 * 3 / 2 = 0.97 for n = 4, p = 1.
        let actual = DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
        let predicted = DVector::from_vec(vec![1.1, 1.9, 3.2, 3.8]);

        let r2 = ols::r_squared(&actual, &predicted).unwrap();
        assert_close(r2, 0.98);

        let adj = ols::adjusted_r_squared(&actual, &predicted, 1).unwrap();
        assert_close(adj, 0.97);
    }

    #[test]
    fn test_adjusted_r_squared_needs_enough_observations() {
        let actual = DVector::from_vec(vec![1.0, 2.0]);
        let predicted = DVector::from_vec(vec![1.0, 2.0]);

        let err = ols::adjusted_r_squared(&actual, &predicted, 1).unwrap_err();
        assert!(matches!(err, LolStatsError::Degenerate { .. }));
    }
}

mod harness_tests {
    use super::*;
    use crate::pipeline::tables::{TidyRow, TidyTable};

    /// 8 champions over 3 days with pickrate an exact linear function of all
    /// five features. Modular offsets keep the design matrix full rank.
    fn synthetic_table() -> TidyTable {
        let num_champions = 8;
        let num_days = 3;
        let mut rows = Vec::new();
        for t in 0..num_days {
            for j in 0..num_champions {
                let age = (100 * j + t) as i64;
                let patches = (j * j) % 7 + 1;
                let skins = (3 * j + 1) % 10;
                let winrate = 0.4 + 0.01 * ((5 * j + t) % 11) as f64;
                let banrate = 0.05 + 0.005 * ((3 * j + 2 * t) % 13) as f64;
                let pickrate = 0.05
                    + 0.0001 * age as f64
                    + 0.002 * patches as f64
                    + 0.001 * skins as f64
                    + 0.1 * winrate
                    + 0.05 * banrate;
                rows.push(TidyRow {
                    champion_age: age,
                    patches_since_change: patches as u32,
                    num_skins: skins as u32,
                    winrate,
                    banrate,
                    pickrate,
                });
            }
        }
        TidyTable {
            rows,
            num_champions,
            num_days,
        }
    }

    #[test]
    fn test_split_by_day_boundary() {
        let table = synthetic_table();

        let (train, test, train_days, test_days) = split_by_day(&table, 0.8).unwrap();

        // ceil(0.8 * 3) = 3, capped at num_days - 1 = 2.
        assert_eq!(train_days, 2);
        assert_eq!(test_days, 1);
        assert_eq!(train.len(), 16);
        assert_eq!(test.len(), 8);
    }

    #[test]
    fn test_split_by_day_small_fraction_keeps_one_train_day() {
        let table = synthetic_table();

        let (train, _test, train_days, test_days) = split_by_day(&table, 0.1).unwrap();

        assert_eq!(train_days, 1);
        assert_eq!(test_days, 2);
        assert_eq!(train.len(), 8);
    }

    #[test]
    fn test_split_by_day_single_day_is_degenerate() {
        let mut table = synthetic_table();
        table.rows.truncate(8);
        table.num_days = 1;

        let err = split_by_day(&table, 0.8).unwrap_err();
        assert!(matches!(err, LolStatsError::Degenerate { .. }));
    }

    #[test]
    fn test_split_by_day_rejects_bad_fraction() {
        let table = synthetic_table();

        assert!(split_by_day(&table, 0.0).is_err());
        assert!(split_by_day(&table, 1.0).is_err());
        assert!(split_by_day(&table, -0.2).is_err());
    }

    #[test]
    fn test_fit_model_too_few_test_rows_is_degenerate() {
        let table = synthetic_table();
        let (train, test, _, _) = split_by_day(&table, 0.8).unwrap();

        // Full model has 5 features; 5 test rows cannot support adjusted R^2.
        let err = fit_model("full", FULL_MODEL, &train, &test[..5]).unwrap_err();
        assert!(matches!(err, LolStatsError::Degenerate { .. }));
    }

    #[test]
    fn test_compare_models_full_explains_exact_data() {
        let table = synthetic_table();

        let comparison = compare_models(&table, 0.8).unwrap();

        assert_eq!(comparison.winner, "full");
        assert!(comparison.full.adj_r_squared > 0.999);
        assert!(comparison.full.adj_r_squared >= comparison.static_only.adj_r_squared);
        assert_eq!(comparison.full.coefficients.len(), 5);
        assert_eq!(comparison.static_only.coefficients.len(), 3);
        assert_eq!(comparison.train_days, 2);
        assert_eq!(comparison.test_days, 1);

        // The generating coefficients should be recovered on exact data.
        let by_name = |name: &str| {
            comparison
                .full
                .coefficients
                .iter()
                .find(|c| c.feature == name)
                .map(|c| c.value)
                .unwrap()
        };
        assert!((by_name("winrate") - 0.1).abs() < 1e-6);
        assert!((by_name("banrate") - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_comparison_serializes_to_json() {
        let table = synthetic_table();
        let comparison = compare_models(&table, 0.8).unwrap();

        let json = serde_json::to_value(&comparison).unwrap();
        assert_eq!(json["winner"], "full");
        assert!(json["full"]["adj_r_squared"].is_number());
        assert!(json["static_only"]["coefficients"].is_array());
    }
}
