use super::{ErrorCode, PocketError};
use std::path::Path;

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    /// Convert to PocketError with context
    fn to_pocket(self, context: impl Into<String>) -> Result<T, PocketError>;

    /// Convert to an input error that refers to `path`
    fn to_input_error(self, path: impl AsRef<Path>) -> Result<T, PocketError>;
}

impl<T> ErrorExt<T> for Result<T, std::io::Error> {
    fn to_pocket(self, context: impl Into<String>) -> Result<T, PocketError> {
        self.map_err(|e| PocketError::other(context).with_source(e))
    }

    fn to_input_error(self, path: impl AsRef<Path>) -> Result<T, PocketError> {
        self.map_err(|e| PocketError::from(e).with_path(path.as_ref()))
    }
}

/// Helper functions for common error scenarios
pub mod common {
    use super::*;

    /// The input file does not exist
    pub fn file_not_found(path: impl AsRef<Path>) -> PocketError {
        PocketError::input_with_code(
            ErrorCode::INPUT_NOT_FOUND,
            format!("The file {} does not exist.", path.as_ref().display()),
            Some(path.as_ref().to_path_buf()),
        )
    }

    /// The input file parsed, but nothing in it was usable
    pub fn no_valid_entries(path: impl AsRef<Path>) -> PocketError {
        PocketError::input_with_code(
            ErrorCode::INPUT_NO_VALID_ENTRIES,
            "No valid log entries found. Please check the log file format.",
            Some(path.as_ref().to_path_buf()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_extension_trait() {
        let io_result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "test"));

        let err = io_result.to_input_error("/tmp/app.log").unwrap_err();
        assert_eq!(err.code(), ErrorCode::INPUT_NOT_FOUND);
        assert!(err.user_message().contains("/tmp/app.log"));
    }

    #[test]
    fn test_common_error_helpers() {
        let err = common::file_not_found("missing.log");
        assert_eq!(err.code(), ErrorCode::INPUT_NOT_FOUND);
        assert_eq!(err.user_message(), "The file missing.log does not exist.");

        let err = common::no_valid_entries("empty.log");
        assert_eq!(err.code(), ErrorCode::INPUT_NO_VALID_ENTRIES);
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().starts_with("[E3013]"));
    }
}
