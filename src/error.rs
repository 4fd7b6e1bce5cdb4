use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Invalid value for {field}: {value}")]
    InvalidInput { field: &'static str, value: f64 },

    #[error("Monthly payment {payment} does not cover the first month's interest {interest}; the balance would never be paid off")]
    NonTerminatingSchedule { payment: f64, interest: f64 },

    #[error("Repayment schedule exceeds the limit of {max_months} months")]
    ScheduleTooLong { max_months: u32 },

    #[error("CSV error: {0}")]
    CsvError(String),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Date parsing error: {0}")]
    DateError(String),

    #[error("Advice generation failed: {0}")]
    AdviceFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[cfg(feature = "gemini")]
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl From<csv::Error> for PlannerError {
    fn from(err: csv::Error) -> Self {
        PlannerError::CsvError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
