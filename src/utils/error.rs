use std::fmt;
use thiserror::Error;

/// 數值輸入無法接受的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberIssue {
    NotANumber,
    Negative,
    OutOfRange,
}

impl fmt::Display for NumberIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberIssue::NotANumber => write!(f, "not a valid number"),
            NumberIssue::Negative => write!(f, "must not be negative"),
            NumberIssue::OutOfRange => write!(f, "out of range"),
        }
    }
}

/// 使用者輸入錯誤，在進入核心計算之前就被攔截
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid passenger count '{raw}': {issue}")]
    InvalidCount { raw: String, issue: NumberIssue },

    #[error("invalid age '{raw}': {issue}")]
    InvalidAge { raw: String, issue: NumberIssue },

    #[error("invalid distance '{raw}': {issue}")]
    InvalidDistance { raw: String, issue: NumberIssue },

    #[error("name cannot be empty or whitespace-only")]
    EmptyName,
}

impl InputError {
    /// 重新提示時顯示給使用者的訊息
    pub fn retry_hint(&self) -> &'static str {
        match self {
            InputError::InvalidCount { issue, .. } | InputError::InvalidAge { issue, .. } => {
                match issue {
                    NumberIssue::Negative => "Enter a non-negative whole number.",
                    _ => "Invalid input. Enter a valid whole number.",
                }
            }
            InputError::InvalidDistance { issue, .. } => match issue {
                NumberIssue::Negative => "Enter a non-negative numeric value.",
                _ => "Invalid input. Enter a valid number (e.g. 12.5).",
            },
            InputError::EmptyName => "The value cannot be empty. Try again.",
        }
    }
}

#[derive(Error, Debug)]
pub enum FareError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("Invalid passenger record at line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    #[error(
        "Fare for passenger '{name}' overflows: {distance_km} km at {base_rate_per_km} per km"
    )]
    FareOverflow {
        name: String,
        distance_km: f64,
        base_rate_per_km: f64,
    },

    #[error("Gave up reading {field} after {attempts} invalid attempts")]
    PromptAttemptsExhausted { field: String, attempts: u32 },

    #[error("Input ended while reading {field}")]
    InputClosed { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Io,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FareError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FareError::ConfigError { .. }
            | FareError::ConfigValidationError { .. }
            | FareError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            FareError::InvalidInput(_)
            | FareError::InvalidRecord { .. }
            | FareError::FareOverflow { .. }
            | FareError::PromptAttemptsExhausted { .. }
            | FareError::InputClosed { .. }
            | FareError::CsvError(_) => ErrorCategory::Input,
            FareError::IoError(_) => ErrorCategory::Io,
            FareError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 使用者主動結束輸入，不視為失敗
            FareError::InputClosed { .. } => ErrorSeverity::Low,
            FareError::PromptAttemptsExhausted { .. } => ErrorSeverity::Medium,
            FareError::IoError(_) | FareError::SerializationError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FareError::IoError(_) => "Check that the file paths exist and are readable/writable",
            FareError::CsvError(_) | FareError::InvalidRecord { .. } => {
                "Make sure the CSV has a 'name,age,distance_km' header and valid rows"
            }
            FareError::SerializationError(_) => "Try a different report format",
            FareError::ConfigError { .. }
            | FareError::ConfigValidationError { .. }
            | FareError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command-line overrides"
            }
            FareError::InvalidInput(_) => "Enter a non-empty name and non-negative numbers",
            FareError::FareOverflow { .. } => "Check the distance and base rate for typos",
            FareError::PromptAttemptsExhausted { .. } => {
                "Run again, or raise --max-attempts if more retries are needed"
            }
            FareError::InputClosed { .. } => "Provide all passenger data before ending the input",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FareError::IoError(e) => format!("Could not access a file: {}", e),
            FareError::CsvError(e) => format!("Could not read the passenger file: {}", e),
            FareError::InvalidRecord { line, reason } => {
                format!("Passenger file has a bad row on line {}: {}", line, reason)
            }
            FareError::PromptAttemptsExhausted { field, attempts } => format!(
                "Too many invalid answers for {} ({} attempts)",
                field, attempts
            ),
            FareError::InputClosed { field } => {
                format!("Input ended before {} was provided", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FareError>;
