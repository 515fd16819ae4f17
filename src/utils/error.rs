use thiserror::Error;

#[derive(Error, Debug)]
pub enum DebtError {
    #[error("Invalid input for {field}: '{value}' ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Precondition violated: {0}")]
    PreconditionViolation(#[from] PreconditionViolation),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PreconditionViolation {
    #[error("{series} must contain at least one value")]
    EmptySeries { series: String },

    #[error("total population is zero for year {year}")]
    ZeroTotalPopulation { year: i32 },

    #[error("subgroup population {subgroup} exceeds total {total} for year {year}")]
    SubgroupExceedsTotal { year: i32, subgroup: i64, total: i64 },

    #[error("subgroup population {subgroup} is negative for year {year}")]
    NegativeSubgroup { year: i32, subgroup: i64 },

    #[error("day count must not be negative, got {days}")]
    NegativeDayCount { days: f64 },

    #[error("{quantity} must be a finite number, got {value}")]
    NonFiniteValue { quantity: String, value: f64 },

    #[error("day count {days} is too large to express in whole years")]
    DayCountOutOfRange { days: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Precondition,
    Configuration,
    Io,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DebtError {
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DebtError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            DebtError::InvalidInput { .. } => ErrorCategory::Input,
            DebtError::PreconditionViolation(_) => ErrorCategory::Precondition,
            DebtError::IoError(_) => ErrorCategory::Io,
            DebtError::CsvError(_) | DebtError::SerializationError(_) => ErrorCategory::Data,
            DebtError::ConfigError { .. }
            | DebtError::ConfigValidationError { .. }
            | DebtError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Precondition | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, DebtError::InvalidInput { .. })
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DebtError::InvalidInput { field, .. } => {
                format!("Provide {} as a non-negative number, e.g. 30", field)
            }
            DebtError::PreconditionViolation(PreconditionViolation::EmptySeries { series }) => {
                format!("Make sure the {} dataset has at least one row", series)
            }
            DebtError::PreconditionViolation(_) => {
                "Check the dataset values: totals must be positive and subgroups within totals"
                    .to_string()
            }
            DebtError::IoError(_) => {
                "Check that the file exists and that the directory is writable".to_string()
            }
            DebtError::CsvError(_) => {
                "Check the CSV header and that every row has numeric values".to_string()
            }
            DebtError::SerializationError(_) => "Report this as a bug".to_string(),
            DebtError::ConfigError { .. } | DebtError::ConfigValidationError { .. } => {
                "Check the configuration file syntax".to_string()
            }
            DebtError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DebtError::InvalidInput { value, reason, .. } if value.is_empty() => {
                format!("No age given: {}", reason)
            }
            DebtError::InvalidInput { value, reason, .. } => {
                format!("'{}' is not a valid age: {}", value, reason)
            }
            DebtError::PreconditionViolation(v) => format!("Cannot compute the debt: {}", v),
            DebtError::IoError(e) => format!("File access failed: {}", e),
            DebtError::CsvError(e) => format!("Could not read dataset: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DebtError>;
