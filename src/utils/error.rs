use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Base64 decode error: {0}")]
    DecodeError(#[from] base64::DecodeError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Encoding,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LogError::IoError(_) => ErrorCategory::Io,
            LogError::SerializationError(_) | LogError::DecodeError(_) => ErrorCategory::Encoding,
            LogError::ConfigError { .. }
            | LogError::ConfigValidationError { .. }
            | LogError::InvalidConfigValueError { .. }
            | LogError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 輸入資料有誤，使用者可以修正後重試
            LogError::DecodeError(_) => ErrorSeverity::Medium,
            LogError::SerializationError(_) => ErrorSeverity::Medium,
            LogError::ConfigError { .. }
            | LogError::ConfigValidationError { .. }
            | LogError::InvalidConfigValueError { .. }
            | LogError::MissingConfigError { .. } => ErrorSeverity::High,
            LogError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            LogError::IoError(_) => {
                "Check that the log file path is writable and the disk is not full".to_string()
            }
            LogError::SerializationError(_) => {
                "Make sure the value can be represented as JSON".to_string()
            }
            LogError::DecodeError(_) => {
                "Pass a standard base64 string (A-Z, a-z, 0-9, '+', '/', '=' padding)".to_string()
            }
            LogError::ConfigError { .. } | LogError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax".to_string()
            }
            LogError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration", field)
            }
            LogError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration or pass it on the command line", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LogError::IoError(e) => format!("Could not write the log output: {}", e),
            LogError::SerializationError(e) => format!("Could not render the value as JSON: {}", e),
            LogError::DecodeError(e) => format!("The message is not valid base64: {}", e),
            LogError::ConfigError { message } => format!("Configuration problem: {}", message),
            LogError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            LogError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}' ({})", value, field, reason)
            }
            LogError::MissingConfigError { field } => {
                format!("'{}' is required but was not provided", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, LogError>;
