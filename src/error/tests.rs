//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod scout_error_tests {
    use super::*;

    #[test]
    fn test_csv_error_conversion() {
        // A row with more fields than the header is a csv error under default settings
        let mut reader = csv::Reader::from_reader("a,b\n1,2,3\n".as_bytes());
        let csv_error = reader
            .records()
            .find_map(|r| r.err())
            .expect("uneven row should fail");
        let scout_error = ScoutError::from(csv_error);

        match scout_error {
            ScoutError::Csv(_) => (),
            _ => panic!("Expected Csv error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let scout_error = ScoutError::from(json_error);

        match scout_error {
            ScoutError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let scout_error = ScoutError::from(io_error);

        match scout_error {
            ScoutError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_dataset_not_found_error() {
        let error = ScoutError::DatasetNotFound {
            env_var: "FIFA_SCOUT_DATA".to_string(),
            searched: "./fifa_players.csv".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Player dataset not found"));
        assert!(error_string.contains("FIFA_SCOUT_DATA"));
        assert!(error_string.contains("./fifa_players.csv"));
    }

    #[test]
    fn test_missing_column_error() {
        let error = ScoutError::MissingColumn {
            column: "passing".to_string(),
        };
        assert_eq!(error.to_string(), "Column 'passing' not found in dataset");
    }

    #[test]
    fn test_invalid_position_error() {
        let error = ScoutError::InvalidPosition {
            position: "QB".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Invalid position"));
        assert!(error_string.contains("QB"));
    }

    #[test]
    fn test_invalid_range_error() {
        let error = ScoutError::InvalidRange {
            field: "age".to_string(),
            lo: 10,
            hi: 30,
            min: 15,
            max: 60,
        };
        assert_eq!(
            error.to_string(),
            "Invalid age range 10-30: make sure 15 <= minimum <= maximum <= 60"
        );
    }

    #[test]
    fn test_invalid_range_spec_error() {
        let error = ScoutError::InvalidRangeSpec {
            spec: "abc".to_string(),
        };
        assert!(error.to_string().contains("'abc'"));
    }

    #[test]
    fn test_empty_dataset_error() {
        let error = ScoutError::EmptyDataset;
        assert_eq!(error.to_string(), "Dataset contains no players");
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let scout_error = ScoutError::from(io_error);

        let error_trait: &dyn std::error::Error = &scout_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_error_debug_formatting() {
        let error = ScoutError::EmptyDataset;
        let debug_string = format!("{:?}", error);
        assert_eq!(debug_string, "EmptyDataset");
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(ScoutError::EmptyDataset)
        }

        let result = test_function();
        assert!(result.is_err());
        match result.unwrap_err() {
            ScoutError::EmptyDataset => (),
            _ => panic!("Expected EmptyDataset error"),
        }
    }
}
