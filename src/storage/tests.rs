//! Unit tests for the flat-file snapshot store

use super::*;
use crate::cli::types::{Champion, Patch, RateMetric, ScrapeDate};
use crate::error::LolStatsError;
use crate::sources::SnapshotSource;
use chrono::NaiveDate;
use tempfile::TempDir;

fn create_test_store() -> (TempDir, DataStore) {
    let dir = TempDir::new().unwrap();
    let store = DataStore::open(dir.path()).unwrap();
    (dir, store)
}

fn test_roster() -> Vec<Champion> {
    vec![Champion::new("Aatrox"), Champion::new("Ahri")]
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_open_creates_layout() {
    let (_dir, store) = create_test_store();

    for metric in RateMetric::ALL {
        assert!(store.rate_dir(metric).is_dir());
    }
}

#[test]
fn test_champion_names_round_trip() {
    let (_dir, store) = create_test_store();
    let roster = test_roster();

    store.save_champion_names(&roster).unwrap();
    assert_eq!(store.load_champion_names().unwrap(), roster);
}

#[test]
fn test_release_dates_round_trip() {
    let (_dir, store) = create_test_store();
    let dates = vec![date(2013, 6, 13), date(2011, 12, 14)];

    store.save_release_dates(&dates).unwrap();
    assert_eq!(store.load_release_dates().unwrap(), dates);
}

#[test]
fn test_skin_counts_round_trip() {
    let (_dir, store) = create_test_store();
    let counts = vec![9, 12];

    store.save_skin_counts(&counts).unwrap();
    assert_eq!(store.load_skin_counts().unwrap(), counts);
}

#[test]
fn test_last_patch_round_trip_normalizes() {
    let (_dir, store) = create_test_store();
    let patches = vec![Patch::new("9.18"), Patch::new("8.24b")];

    store.save_last_patch_changes(&patches).unwrap();
    assert_eq!(store.load_last_patch_changes().unwrap(), patches);
}

#[test]
fn test_load_missing_names_is_missing_source() {
    let (_dir, store) = create_test_store();

    let err = store.load_champion_names().unwrap_err();
    match err {
        LolStatsError::MissingSource { path } => {
            assert_eq!(path, store.names_path());
        }
        _ => panic!("Expected MissingSource error variant"),
    }
}

#[test]
fn test_load_malformed_skin_count_reports_line() {
    let (_dir, store) = create_test_store();
    std::fs::write(store.skins_path(), "9\nlots\n3\n").unwrap();

    let err = store.load_skin_counts().unwrap_err();
    match err {
        LolStatsError::Malformed { line, .. } => assert_eq!(line, 2),
        _ => panic!("Expected Malformed error variant"),
    }
}

#[test]
fn test_save_and_load_daily_rates() {
    let (_dir, store) = create_test_store();
    let day = ScrapeDate::new(date(2019, 9, 28));

    let path = store
        .save_daily_rates(RateMetric::Win, day, &[0.5233, 0.5108])
        .unwrap();
    assert!(path.ends_with("win/win_rates_20190928.csv"));

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "0.5233,2019-09-28\n0.5108,2019-09-28\n");

    let table = store
        .load_rate_table(RateMetric::Win, &test_roster())
        .unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[0].champion.as_str(), "Aatrox");
    assert_eq!(table.rows[0].rate, 0.5233);
    assert_eq!(table.rows[1].champion.as_str(), "Ahri");
    assert_eq!(table.rows[1].date, date(2019, 9, 28));
}

#[test]
fn test_save_daily_rates_rejects_out_of_range() {
    let (_dir, store) = create_test_store();
    let day = ScrapeDate::new(date(2019, 9, 28));

    let err = store
        .save_daily_rates(RateMetric::Ban, day, &[0.1, 1.2])
        .unwrap_err();
    assert!(matches!(err, LolStatsError::InvalidRate { .. }));
}

#[test]
fn test_snapshot_dates_sorted_ascending() {
    let (_dir, store) = create_test_store();

    for day in [date(2019, 9, 30), date(2019, 9, 28), date(2019, 9, 29)] {
        store
            .save_daily_rates(RateMetric::Pick, ScrapeDate::new(day), &[0.3, 0.4])
            .unwrap();
    }

    let dates = store.snapshot_dates(RateMetric::Pick).unwrap();
    assert_eq!(
        dates,
        vec![
            ScrapeDate::new(date(2019, 9, 28)),
            ScrapeDate::new(date(2019, 9, 29)),
            ScrapeDate::new(date(2019, 9, 30)),
        ]
    );
}

#[test]
fn test_snapshot_dates_ignores_unrelated_files() {
    let (_dir, store) = create_test_store();
    std::fs::write(store.rate_dir(RateMetric::Win).join(".gitkeep"), "").unwrap();

    assert!(store.snapshot_dates(RateMetric::Win).unwrap().is_empty());
}

#[test]
fn test_load_rate_table_day_major_over_multiple_days() {
    let (_dir, store) = create_test_store();
    let day1 = ScrapeDate::new(date(2019, 9, 28));
    let day2 = ScrapeDate::new(date(2019, 9, 29));

    store
        .save_daily_rates(RateMetric::Win, day2, &[0.51, 0.61])
        .unwrap();
    store
        .save_daily_rates(RateMetric::Win, day1, &[0.5, 0.6])
        .unwrap();

    let table = store
        .load_rate_table(RateMetric::Win, &test_roster())
        .unwrap();

    // Day-major: both champions for the earlier day come first.
    assert_eq!(table.len(), 4);
    assert_eq!(table.rows[0].date, day1.as_date());
    assert_eq!(table.rows[1].date, day1.as_date());
    assert_eq!(table.rows[2].date, day2.as_date());
    assert_eq!(table.rows[2].rate, 0.51);
}

#[test]
fn test_load_rate_table_roster_size_mismatch() {
    let (_dir, store) = create_test_store();
    let day = ScrapeDate::new(date(2019, 9, 28));
    store
        .save_daily_rates(RateMetric::Win, day, &[0.5, 0.6, 0.7])
        .unwrap();

    let err = store
        .load_rate_table(RateMetric::Win, &test_roster())
        .unwrap_err();
    assert!(matches!(err, LolStatsError::Alignment { .. }));
}

#[test]
fn test_load_rate_table_missing_snapshots() {
    let (_dir, store) = create_test_store();

    let err = store
        .load_rate_table(RateMetric::Ban, &test_roster())
        .unwrap_err();
    assert!(matches!(err, LolStatsError::MissingSource { .. }));
}

#[test]
fn test_load_rate_table_stamp_disagreement() {
    let (_dir, store) = create_test_store();
    let path = store.rate_file_path(RateMetric::Win, ScrapeDate::new(date(2019, 9, 28)));
    std::fs::write(&path, "0.5,2019-09-28\n0.6,2019-09-29\n").unwrap();

    let err = store
        .load_rate_table(RateMetric::Win, &test_roster())
        .unwrap_err();
    match err {
        LolStatsError::Malformed { line, message, .. } => {
            assert_eq!(line, 2);
            assert!(message.contains("disagrees"));
        }
        _ => panic!("Expected Malformed error variant"),
    }
}

#[test]
fn test_load_rate_table_malformed_rate() {
    let (_dir, store) = create_test_store();
    let path = store.rate_file_path(RateMetric::Win, ScrapeDate::new(date(2019, 9, 28)));
    std::fs::write(&path, "0.5,2019-09-28\nhigh,2019-09-28\n").unwrap();

    let err = store
        .load_rate_table(RateMetric::Win, &test_roster())
        .unwrap_err();
    assert!(matches!(err, LolStatsError::Malformed { line: 2, .. }));
}

#[test]
fn test_snapshot_source_impl_reads_files() {
    let (_dir, store) = create_test_store();
    store.save_champion_names(&test_roster()).unwrap();
    store
        .save_daily_rates(
            RateMetric::Win,
            ScrapeDate::new(date(2019, 9, 28)),
            &[0.5, 0.6],
        )
        .unwrap();

    let source: &dyn SnapshotSource = &store;
    assert_eq!(source.champion_names().unwrap(), test_roster());

    let table = source.rate_table(RateMetric::Win).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[1].champion.as_str(), "Ahri");
}

#[test]
fn test_write_tidy_format() {
    use crate::pipeline::tables::{TidyRow, TidyTable};

    let (_dir, store) = create_test_store();
    let table = TidyTable {
        rows: vec![TidyRow {
            champion_age: 2298,
            patches_since_change: 3,
            num_skins: 9,
            winrate: 0.5233,
            banrate: 0.0712,
            pickrate: 0.1035,
        }],
        num_champions: 1,
        num_days: 1,
    };

    let path = store.write_tidy(&table, None).unwrap();
    let contents = std::fs::read_to_string(path).unwrap();
    assert_eq!(contents, "2298,3,9,0.5233,0.0712,0.1035\n");
}
