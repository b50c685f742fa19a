use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Output,
    Configuration,
    Input,
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::IoError(_) => ErrorCategory::Io,
            CalcError::CsvError(_) => ErrorCategory::Output,
            CalcError::ConfigValidationError { .. }
            | CalcError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CalcError::ValidationError { .. } => ErrorCategory::Input,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::IoError(e) => format!("File access failed: {}", e),
            CalcError::CsvError(e) => format!("Could not write the payment schedule: {}", e),
            CalcError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            CalcError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' = '{}' is not allowed: {}", field, value, reason)
            }
            CalcError::ValidationError { message } => format!("Invalid input: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the path exists and is writable",
            ErrorCategory::Output => "Check the output path and free disk space",
            ErrorCategory::Configuration => "Fix the configuration file and run again",
            ErrorCategory::Input => "Check the loan parameters passed on the command line",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
