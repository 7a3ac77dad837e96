use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Record processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Malformed record on line {line}: expected at least 3 fields, found {fields}")]
    MalformedRecord { line: u64, fields: usize },

    #[error("Score '{value}' for domain '{domain}' is not a number")]
    NonNumericScore { domain: String, value: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    Config,
}

impl ClassifyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InputNotFound { .. } | Self::IoError(_) => ErrorCategory::Input,
            Self::CsvError(_) | Self::MalformedRecord { .. } | Self::NonNumericScore { .. } => {
                ErrorCategory::Data
            }
            Self::ValidationError { .. } => ErrorCategory::Config,
        }
    }

    /// Process exit status for this failure. Data errors follow sysexits `EX_DATAERR`.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Config => 2,
            ErrorCategory::Data => 65,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InputNotFound { path } => {
                format!("Cannot find input file '{}'", path.display())
            }
            Self::MalformedRecord { line, .. } => {
                format!("Line {} does not have the form '<id> <domain> <score>'", line)
            }
            Self::NonNumericScore { domain, value } => {
                format!("Domain '{}' has a non-numeric score '{}'", domain, value)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InputNotFound { .. } => "Check the input path and try again",
            Self::IoError(_) => "Check that the input file is readable UTF-8 text",
            Self::CsvError(_) => "The report could not be written; check the domain labels",
            Self::MalformedRecord { .. } => {
                "Every line needs an id, a domain and a score separated by single spaces"
            }
            Self::NonNumericScore { .. } => "Scores must be decimal numbers such as 12 or 3.5",
            Self::ValidationError { .. } => "Run with --help to see the expected arguments",
        }
    }
}

pub type Result<T> = std::result::Result<T, ClassifyError>;
