use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("IO error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' is not valid UTF-8: {source}")]
    DecodingError {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Decoding,
    Serialization,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a failure of this severity. Never zero.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl EtlError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        EtlError::IoError {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::IoError { .. } => ErrorCategory::Io,
            EtlError::DecodingError { .. } => ErrorCategory::Decoding,
            EtlError::SerializationError(_) => ErrorCategory::Serialization,
            EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 權限或磁碟問題通常可由使用者排除
            EtlError::IoError { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
                    ErrorSeverity::High
                }
                _ => ErrorSeverity::Medium,
            },
            EtlError::DecodingError { .. } => ErrorSeverity::High,
            EtlError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            EtlError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::IoError { path, source } => match source.kind() {
                std::io::ErrorKind::NotFound => format!("Cannot find '{}'", path),
                std::io::ErrorKind::PermissionDenied => {
                    format!("Permission denied for '{}'", path)
                }
                _ => format!("Could not access '{}': {}", path, source),
            },
            EtlError::DecodingError { path, source } => format!(
                "'{}' contains invalid UTF-8 at byte {}",
                path,
                source.utf8_error().valid_up_to()
            ),
            EtlError::SerializationError(e) => format!("Could not encode the entry list: {}", e),
            EtlError::InvalidConfigValueError { field, reason, .. } => {
                format!("Bad setting for {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => {
                "Run from the directory that holds list.txt and make sure list.json is writable"
            }
            ErrorCategory::Decoding => "Re-save list.txt as UTF-8 text",
            ErrorCategory::Serialization => "Report this as a bug",
            ErrorCategory::Configuration => "Check the file names passed to the converter",
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_missing_file_is_high_severity_io() {
        let err = EtlError::io("list.txt", Error::new(ErrorKind::NotFound, "gone"));
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.user_friendly_message(), "Cannot find 'list.txt'");
        assert!(err.to_string().contains("list.txt"));
    }

    #[test]
    fn test_other_io_failures_are_medium() {
        let err = EtlError::io("list.json", Error::new(ErrorKind::Other, "disk full"));
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.severity().exit_code(), 2);
    }

    #[test]
    fn test_decoding_error_reports_offset() {
        let source = String::from_utf8(vec![b'a', b'b', 0xff]).unwrap_err();
        let err = EtlError::DecodingError {
            path: "list.txt".to_string(),
            source,
        };
        assert_eq!(err.category(), ErrorCategory::Decoding);
        assert!(err.user_friendly_message().contains("byte 2"));
    }

    #[test]
    fn test_exit_codes_are_never_zero() {
        for severity in [ErrorSeverity::Medium, ErrorSeverity::High, ErrorSeverity::Critical] {
            assert_ne!(severity.exit_code(), 0);
        }
    }
}
