use std::path::PathBuf;
use thiserror::Error;

pub mod codes;
pub mod helpers;


pub use codes::ErrorCode;
pub use helpers::{common, ErrorExt};

/// The crate-level error type for conditions a utility cannot recover from
#[derive(Error, Debug)]
pub enum PocketError {
    #[error("[E{code:04}] Input error: {message}")]
    Input {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Validation error: {message}")]
    Validation {
        code: u16,
        message: String,
        field: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] {message}")]
    Other {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PocketError {
    /// Create an input error with specific code and path
    pub fn input_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Input {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a validation error with specific code and field
    pub fn validation_with_code(
        code: u16,
        message: impl Into<String>,
        field: Option<String>,
    ) -> Self {
        Self::Validation {
            code,
            message: message.into(),
            field,
            source: None,
        }
    }

    /// Create a generic other error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            code: ErrorCode::OTHER_GENERIC,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error to this error
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Input { source: src, .. }
            | Self::Validation { source: src, .. }
            | Self::Other { source: src, .. } => {
                *src = Some(source.into());
            }
        }
        self
    }

    /// Attach the path of the file the error refers to
    pub fn with_path(mut self, new_path: impl Into<PathBuf>) -> Self {
        if let Self::Input { path, .. } = &mut self {
            *path = Some(new_path.into());
        }
        self
    }

    /// Get the process exit code for this error
    ///
    /// Every fatal condition of the utilities terminates with status 1.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Input { code, .. }
            | Self::Validation { code, .. }
            | Self::Other { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Input { message, path, .. } => match path {
                Some(p) if !message.contains(&p.display().to_string()) => {
                    format!("{} ({})", message, p.display())
                }
                _ => message.clone(),
            },
            Self::Validation { message, field, .. } => match field {
                Some(f) => format!("Invalid value for '{}': {}", f, message),
                None => format!("Invalid value: {}", message),
            },
            Self::Other { message, .. } => message.clone(),
        }
    }

    /// Get the description of the underlying cause, if any
    pub fn details(&self) -> Option<String> {
        std::error::Error::source(self).map(|source| source.to_string())
    }
}

/// Type alias for Results using PocketError
pub type Result<T> = std::result::Result<T, PocketError>;

impl From<std::io::Error> for PocketError {
    fn from(err: std::io::Error) -> Self {
        use std::io::ErrorKind;

        let (code, message) = match err.kind() {
            ErrorKind::NotFound => (ErrorCode::INPUT_NOT_FOUND, "File does not exist"),
            ErrorKind::PermissionDenied => {
                (ErrorCode::INPUT_PERMISSION_DENIED, "Permission denied")
            }
            ErrorKind::InvalidData => (
                ErrorCode::INPUT_INVALID_ENCODING,
                "File is not valid UTF-8 text",
            ),
            _ => (
                ErrorCode::INPUT_IO_ERROR,
                "An error occurred while reading the file",
            ),
        };

        PocketError::input_with_code(code, message, None).with_source(err)
    }
}

impl From<serde_json::Error> for PocketError {
    fn from(err: serde_json::Error) -> Self {
        PocketError::other("Failed to serialize report").with_source(err)
    }
}
