use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrixError {
    #[error("Invalid target concentration: {reason} (initial {initial_brix} °Brix, target {target_brix} °Brix)")]
    InvalidTargetConcentration {
        initial_brix: f64,
        target_brix: f64,
        reason: String,
    },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Process values entered by the user.
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl BrixError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BrixError::InvalidTargetConcentration { .. } => ErrorCategory::Input,
            BrixError::InvalidConfigValueError { .. } => ErrorCategory::Input,
            BrixError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            BrixError::IoError(_) | BrixError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code used by the binary.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BrixError::InvalidTargetConcentration { reason, .. } => {
                format!("The desired °Brix cannot be reached by adding sugar: {}", reason)
            }
            BrixError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' has an invalid value '{}': {}", field, value, reason)
            }
            BrixError::ConfigValidationError { field, message } => {
                format!("The configuration is invalid ({}): {}", field, message)
            }
            BrixError::IoError(e) => format!("Could not read or write a file: {}", e),
            BrixError::SerializationError(e) => format!("Could not serialize the result: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BrixError::InvalidTargetConcentration { .. } => {
                "Enter a target °Brix strictly greater than the initial °Brix and below 100"
            }
            BrixError::InvalidConfigValueError { .. } => {
                "Re-enter the value within its allowed range"
            }
            BrixError::ConfigValidationError { .. } => {
                "Check the TOML syntax and the allowed values of the configuration file"
            }
            BrixError::IoError(_) => "Check that the path exists and is readable",
            BrixError::SerializationError(_) => "Try the text output format instead",
        }
    }
}

pub type Result<T> = std::result::Result<T, BrixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_concentration_is_input_error() {
        let err = BrixError::InvalidTargetConcentration {
            initial_brix: 7.0,
            target_brix: 7.0,
            reason: "target must exceed initial".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.exit_code(), 2);
        assert!(err.user_friendly_message().contains("target must exceed initial"));
    }

    #[test]
    fn test_config_and_system_errors() {
        let config = BrixError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: "bad".to_string(),
        };
        assert_eq!(config.exit_code(), 1);

        let io = BrixError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        assert_eq!(io.category(), ErrorCategory::System);
        assert_eq!(io.exit_code(), 3);
    }
}
