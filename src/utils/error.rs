use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("The total is incorrect. Expected {expected}, but got {actual}!")]
    IncorrectTotal { expected: u32, actual: u32 },

    #[error("Credit value {value} at {checkpoint} is outside the allowed range")]
    CreditOutOfRange { checkpoint: String, value: u32 },

    #[error("FATAL: Invalid mark range ({pass}, {defer}, {fail})")]
    UnclassifiableCredits { pass: u32, defer: u32, fail: u32 },

    #[error("Input interrupted by the user")]
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Classification,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    High,
    Critical,
}

impl TallyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TallyError::IncorrectTotal { .. }
            | TallyError::CreditOutOfRange { .. }
            | TallyError::Interrupted => ErrorCategory::Input,
            TallyError::ConfigValidationError { .. }
            | TallyError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            TallyError::UnclassifiableCredits { .. } => ErrorCategory::Classification,
            TallyError::IoError(_)
            | TallyError::CsvError(_)
            | TallyError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    /// 使用者可自行修正的錯誤為 Low，內部不變式被破壞為 Critical
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TallyError::Interrupted
            | TallyError::IncorrectTotal { .. }
            | TallyError::CreditOutOfRange { .. } => ErrorSeverity::Low,
            TallyError::ConfigValidationError { .. }
            | TallyError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            TallyError::IoError(_)
            | TallyError::CsvError(_)
            | TallyError::SerializationError(_)
            | TallyError::UnclassifiableCredits { .. } => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for an error that ends the program.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TallyError::IncorrectTotal { .. } => "Enter pass, defer and fail credits adding up to 120",
            TallyError::CreditOutOfRange { .. } => "Use one of 0, 20, 40, 60, 80, 100, 120",
            TallyError::Interrupted => "Run the tool again to start a new session",
            TallyError::ConfigValidationError { .. } | TallyError::InvalidConfigValueError { .. } => {
                "Check the configuration file and command line flags"
            }
            TallyError::UnclassifiableCredits { .. } => "Report this as a bug together with the entered credits",
            TallyError::IoError(_) | TallyError::CsvError(_) | TallyError::SerializationError(_) => {
                "Check that the output path exists and is writable"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TallyError::IoError(e) => format!("Could not read or write a file: {}", e),
            TallyError::CsvError(e) => format!("Could not write the CSV export: {}", e),
            TallyError::SerializationError(e) => format!("Could not write the JSON export: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TallyError>;
