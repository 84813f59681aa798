//! Integration tests for the public domain types

use lol_stats::{
    Champion, LolStatsError, Patch, PatchVocabulary, RateMetric, ScrapeDate, DATA_DIR_ENV_VAR,
};

#[test]
fn test_patch_parse_and_normalization() {
    let patch: Patch = "v9.18".parse().unwrap();
    assert_eq!(patch, Patch::new("9.18"));
    assert_eq!(patch.to_string(), "9.18");

    let suffixed: Patch = " 8.24b ".parse().unwrap();
    assert_eq!(suffixed.as_str(), "8.24b");
}

#[test]
fn test_scrape_date_parse_display_round_trip() {
    let date: ScrapeDate = "2019-09-28".parse().unwrap();
    assert_eq!(date.to_string(), "2019-09-28");
    assert_eq!(date.compact(), "20190928");
}

#[test]
fn test_scrape_date_rejects_invalid() {
    let err = "28/09/2019".parse::<ScrapeDate>().unwrap_err();
    assert!(matches!(err, LolStatsError::InvalidDate { .. }));
}

#[test]
fn test_rate_metric_parse_and_columns() {
    for (token, metric, column) in [
        ("win", RateMetric::Win, "winrate"),
        ("ban", RateMetric::Ban, "banrate"),
        ("pick", RateMetric::Pick, "pickrate"),
    ] {
        let parsed: RateMetric = token.parse().unwrap();
        assert_eq!(parsed, metric);
        assert_eq!(parsed.column_name(), column);
    }
}

#[test]
fn test_champion_sort_order_matches_file_contract() {
    let mut names = vec![
        Champion::new("Ziggs"),
        Champion::new("Aatrox"),
        Champion::new("Miss Fortune"),
    ];
    names.sort();
    let rendered: Vec<&str> = names.iter().map(|c| c.as_str()).collect();
    assert_eq!(rendered, vec!["Aatrox", "Miss Fortune", "Ziggs"]);
}

#[test]
fn test_current_vocabulary_spans_the_collection_window() {
    let vocab = PatchVocabulary::current();

    assert_eq!(vocab.newest(), &Patch::new("9.18"));
    assert_eq!(vocab.position(&Patch::new("9.18")), Some(0));
    assert_eq!(vocab.position(&Patch::new("7.22")), Some(vocab.len() - 1));
    assert_eq!(vocab.position(&Patch::new("8.24b")), Some(18));
    assert_eq!(vocab.position(&Patch::new("10.1")), None);
}

#[test]
fn test_data_dir_env_var_name() {
    assert_eq!(DATA_DIR_ENV_VAR, "LOL_STATS_DATA_DIR");
}
