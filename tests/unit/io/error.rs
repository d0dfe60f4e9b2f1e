//! Tests for error display, sources and path context

#[cfg(test)]
mod tests {
    use nominofill::NominoError;
    use nominofill::io::error::{WithPath, invalid_parameter, invalid_shape};
    use std::error::Error;
    use std::io;
    use std::path::{Path, PathBuf};

    // Tests user-facing messages name the offending values
    // Verified by dropping fields from the format strings
    #[test]
    fn test_error_display() {
        assert_eq!(
            NominoError::InvalidDimensions {
                rows: 0,
                columns: 4
            }
            .to_string(),
            "Invalid grid dimensions 0x4: rows and columns must be positive"
        );
        assert_eq!(
            NominoError::SearchBudgetExceeded { limit: 10 }.to_string(),
            "Search budget of 10 boards exceeded"
        );
        assert_eq!(
            NominoError::NoTilings {
                rows: 1,
                columns: 5
            }
            .to_string(),
            "No tilings exist for a 1x5 grid"
        );
        assert_eq!(
            NominoError::Coverage {
                row: 2,
                column: 3,
                reason: "cell left uncovered"
            }
            .to_string(),
            "Coverage error at (2, 3): cell left uncovered"
        );
    }

    // Tests the helper constructors fill every field
    // Verified by swapping value and reason
    #[test]
    fn test_error_helpers() {
        let err = invalid_parameter("seed", &"abc", &"not a number");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'seed' = 'abc': not a number"
        );

        let err = invalid_shape("TetrominoT", &"anchor mismatch");
        assert_eq!(err.to_string(), "Invalid shape 'TetrominoT': anchor mismatch");
    }

    // Tests I/O failures keep their path, operation and source
    // Verified by discarding the source error
    #[test]
    fn test_with_path_wraps_io_error() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let Err(err) = result.with_path(Path::new("out/levels.txt"), "write output") else {
            unreachable!("input was an error");
        };

        assert!(err.source().is_some());
        assert!(err.to_string().contains("write output"));
        assert!(err.to_string().contains("out/levels.txt"));
        assert!(matches!(
            err,
            NominoError::FileSystem { ref path, .. } if path == &PathBuf::from("out/levels.txt")
        ));
    }

    // Tests plain I/O conversion still yields a file system error
    // Verified by mapping to an invalid parameter
    #[test]
    fn test_from_io_error() {
        let err = NominoError::from(io::Error::other("boom"));

        assert!(matches!(err, NominoError::FileSystem { .. }));
        assert!(err.source().is_some());
    }

    // Tests errors without an underlying cause report no source
    // Verified by returning self as the source
    #[test]
    fn test_source_absent_for_domain_errors() {
        assert!(
            NominoError::SearchBudgetExceeded { limit: 1 }
                .source()
                .is_none()
        );
    }
}
