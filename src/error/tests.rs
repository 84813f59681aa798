//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod lol_stats_error_tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = LolStatsError::from(io_error);

        match error {
            LolStatsError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = LolStatsError::from(json_error);

        match error {
            LolStatsError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_missing_source_display() {
        let error = LolStatsError::MissingSource {
            path: PathBuf::from("data/champion_names.csv"),
        };

        assert_eq!(
            error.to_string(),
            "expected data file not found: data/champion_names.csv"
        );
    }

    #[test]
    fn test_malformed_display_includes_path_and_line() {
        let error = LolStatsError::Malformed {
            path: PathBuf::from("data/num_skins.csv"),
            line: 12,
            message: "invalid digit found in string".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "data/num_skins.csv:12: invalid digit found in string"
        );
    }

    #[test]
    fn test_unknown_patch_display_names_champion() {
        let error = LolStatsError::UnknownPatch {
            champion: "Aatrox".to_string(),
            patch: "10.1".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "unknown patch \"10.1\" for champion Aatrox"
        );
    }

    #[test]
    fn test_invalid_rate_display() {
        let error = LolStatsError::InvalidRate {
            value: "1.7".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "invalid rate \"1.7\": expected a number in [0, 1]"
        );
    }

    #[test]
    fn test_misaligned_constructor() {
        let error = LolStatsError::misaligned("win has 2 rows, ban has 3 rows");

        match &error {
            LolStatsError::Alignment { message } => {
                assert_eq!(message, "win has 2 rows, ban has 3 rows");
            }
            _ => panic!("Expected Alignment error variant"),
        }
        assert_eq!(
            error.to_string(),
            "alignment error: win has 2 rows, ban has 3 rows"
        );
    }

    #[test]
    fn test_degenerate_display() {
        let error = LolStatsError::Degenerate {
            message: "need at least 2 distinct days".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "model is degenerate: need at least 2 distinct days"
        );
    }
}
