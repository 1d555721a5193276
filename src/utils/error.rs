use crate::domain::model::{Field, Notice};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RiskError {
    #[error("Missing value for {field}")]
    MissingField { field: Field },

    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber { field: Field, value: String },

    #[error("Cannot {action} while in {state} state")]
    InvalidTransition {
        state: &'static str,
        action: &'static str,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl RiskError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RiskError::MissingField { .. } | RiskError::InvalidNumber { .. }
        )
    }

    /// The form field a validation error refers to.
    pub fn field(&self) -> Option<Field> {
        match self {
            RiskError::MissingField { field } | RiskError::InvalidNumber { field, .. } => {
                Some(*field)
            }
            _ => None,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RiskError::MissingField { .. } | RiskError::InvalidNumber { .. } => {
                ErrorSeverity::Medium
            }
            RiskError::InvalidTransition { .. } => ErrorSeverity::Critical,
            RiskError::ConfigValidationError { .. }
            | RiskError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            RiskError::IoError(_) | RiskError::SerializationError(_) => ErrorSeverity::High,
        }
    }

    /// The notice the form shows for a rejected submission.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            RiskError::MissingField { .. } => Some(Notice {
                title: "Missing Information".to_string(),
                description: "Please fill in all required fields.".to_string(),
            }),
            RiskError::InvalidNumber { field, .. } => Some(Notice {
                title: "Invalid Input".to_string(),
                description: format!("Please enter a valid positive number for {}.", field),
            }),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.notice() {
            Some(notice) => format!("{}: {}", notice.title, notice.description),
            None => match self {
                RiskError::ConfigValidationError { .. }
                | RiskError::InvalidConfigValueError { .. } => {
                    format!("Configuration problem. {}", self)
                }
                RiskError::IoError(e) => format!("Could not read file: {}", e),
                _ => self.to_string(),
            },
        }
    }
}

impl RiskError {
    pub fn recovery_suggestion(&self) -> String {
        match self.field() {
            Some(field) => format!(
                "{}: {} ({})",
                field.label(),
                field.description(),
                field.placeholder()
            ),
            None => match self {
                RiskError::InvalidTransition { .. } => {
                    "Start a new assessment from the landing screen".to_string()
                }
                RiskError::IoError(_) => "Check that the file exists and is readable".to_string(),
                _ => "Check the configuration file and command-line flags".to_string(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, RiskError>;
