//! Tests for log mirroring and logger installation

#[cfg(test)]
mod tests {
    use bilateral_search::SearchError;
    use bilateral_search::io::logging::{TeeWriter, init_logging};
    use std::io::Write;
    use tempfile::TempDir;

    // Tests every write reaches both sinks
    // Verified by writing only to the primary sink
    #[test]
    fn test_tee_writes_both_sinks() {
        let mut tee = TeeWriter::new(Vec::new(), Vec::new());

        write!(tee, "generation {}", 3).expect("write");
        tee.write_all(b" done\n").expect("write");
        tee.flush().expect("flush");

        let (primary, mirror) = tee.into_inner();
        assert_eq!(primary, b"generation 3 done\n");
        assert_eq!(primary, mirror);
    }

    #[test]
    fn test_unopenable_log_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("missing-dir").join("search.log");

        let result = init_logging(Some(&path));

        assert!(matches!(
            result,
            Err(SearchError::FileSystem {
                operation: "open log file",
                ..
            })
        ));
    }

    // Tests a second logger installation is reported instead of ignored
    // Verified by discarding the installation error
    #[test]
    fn test_second_installation_fails() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("search.log");

        let _ = init_logging(Some(&path));

        assert!(path.exists());
        assert!(matches!(
            init_logging(None),
            Err(SearchError::Logging { .. })
        ));
    }
}
