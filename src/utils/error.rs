use thiserror::Error;

#[derive(Error, Debug)]
pub enum GestureError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Index {index} out of range (stroke has {len} points)")]
    OutOfRange { index: usize, len: usize },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },
}

pub type Result<T> = std::result::Result<T, GestureError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// CLI 退出碼；4 保留給「沒有對應手勢」
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl GestureError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        GestureError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            GestureError::InvalidInput { .. } | GestureError::OutOfRange { .. } => {
                ErrorCategory::Input
            }
            GestureError::ConfigError { .. }
            | GestureError::InvalidConfigValueError { .. }
            | GestureError::MissingConfigError { .. }
            | GestureError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            GestureError::IoError(_)
            | GestureError::CsvError(_)
            | GestureError::SerializationError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 單一取樣點錯誤：丟掉該點即可繼續
            GestureError::InvalidInput { .. } | GestureError::OutOfRange { .. } => {
                ErrorSeverity::Medium
            }
            GestureError::CsvError(_) | GestureError::SerializationError(_) => ErrorSeverity::High,
            GestureError::ConfigError { .. }
            | GestureError::InvalidConfigValueError { .. }
            | GestureError::MissingConfigError { .. }
            | GestureError::ConfigValidationError { .. } => ErrorSeverity::High,
            GestureError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GestureError::InvalidInput { .. } => {
                "Make sure every coordinate is a finite number and templates have at least one point"
            }
            GestureError::OutOfRange { .. } => "Check the live stroke size before indexing into it",
            GestureError::CsvError(_) => "Stroke files need an 'x,y' header followed by one numeric sample per row",
            GestureError::SerializationError(_) => "Report this output problem together with the input files",
            GestureError::IoError(_) => "Check that the file exists and is readable",
            GestureError::ConfigError { .. }
            | GestureError::InvalidConfigValueError { .. }
            | GestureError::MissingConfigError { .. }
            | GestureError::ConfigValidationError { .. } => {
                "Fix the gesture configuration file and try again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GestureError::InvalidInput { message } => format!("Bad stroke data: {}", message),
            GestureError::OutOfRange { index, len } => {
                format!("Point #{} does not exist, the stroke only has {} points", index, len)
            }
            GestureError::IoError(e) => format!("Could not read file: {}", e),
            GestureError::CsvError(e) => format!("Could not parse stroke file: {}", e),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let err = GestureError::invalid_input("x is NaN");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("x is NaN"));

        let err = GestureError::MissingConfigError {
            field: "gestures".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);

        let err = GestureError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.severity().exit_code(), 3);
    }

    #[test]
    fn test_every_error_exits_non_zero() {
        for severity in [ErrorSeverity::Medium, ErrorSeverity::High, ErrorSeverity::Critical] {
            let code = severity.exit_code();
            assert!(code != 0 && code != 4, "{:?} exits with {}", severity, code);
        }
    }

    #[test]
    fn test_out_of_range_message() {
        let err = GestureError::OutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "Index 7 out of range (stroke has 3 points)");
    }
}
