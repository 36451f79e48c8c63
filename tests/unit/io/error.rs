//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use bilateral_search::SearchError;
    use bilateral_search::io::error::{ensure_same_dimensions, invalid_parameter};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = SearchError::FileSystem {
            path: "/tmp/input.tif".into(),
            operation: "read image",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("read image"));
        assert!(error.to_string().contains("/tmp/input.tif"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("mutation_rate", &1.5, &"must lie in [0, 1]");

        let message = error.to_string();
        assert!(message.contains("mutation_rate"));
        assert!(message.contains("1.5"));
        assert!(message.contains("must lie in [0, 1]"));
        assert!(error.source().is_none());
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let error = SearchError::DimensionMismatch {
            expected: (640, 480),
            found: (320, 240),
        };

        assert_eq!(
            error.to_string(),
            "Image dimensions differ: 640x480 vs 320x240"
        );
    }

    // Tests ImageLoad error with decoder source
    // Verified by excluding source error from message
    #[test]
    fn test_image_load_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "bad header",
        ));
        let error = SearchError::ImageLoad {
            path: PathBuf::from("reference.tif"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("reference.tif"));
        assert!(message.contains("bad header"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_dimension_check() {
        assert!(ensure_same_dimensions((3, 4), (3, 4)).is_ok());
        assert!(matches!(
            ensure_same_dimensions((3, 4), (4, 3)),
            Err(SearchError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_setup_errors_have_no_source() {
        let logging = SearchError::Logging {
            reason: "already installed".to_string(),
        };
        let pool = SearchError::WorkerPool {
            reason: "no threads".to_string(),
        };

        assert!(logging.source().is_none());
        assert!(logging.to_string().contains("already installed"));
        assert!(pool.to_string().contains("no threads"));
    }
}
