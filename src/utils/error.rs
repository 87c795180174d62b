use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanningError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrlError { url: String, reason: String },

    #[error("Validation error on {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("Unknown label domain: {domain}")]
    UnknownDomainError { domain: String },
}

impl PlanningError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PlanningError::IoError(_) => "Check that the file exists and is readable",
            PlanningError::SerializationError(_) => "Check that the input is valid JSON",
            PlanningError::CsvError(_) => "Check the output destination",
            PlanningError::ConfigValidationError { .. }
            | PlanningError::InvalidConfigValueError { .. } => "Fix the configuration file and retry",
            PlanningError::InvalidUrlError { .. } => "Use an absolute http:// or https:// URL",
            PlanningError::ValidationError { .. } => "Correct the highlighted field",
            PlanningError::UnknownDomainError { .. } => {
                "Use one of: package_status, package_type, horse_kind, rider_kind, lesson_status, participation_status, lesson_type, recurrence_frequency, week_day"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PlanningError>;
