use serde::Serialize;
use thiserror::Error;

/// One violated field of an input shape, e.g. `education[0].degree`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<FieldViolation>),

    #[error("Profile already exists. Use PATCH to update.")]
    ProfileAlreadyExists,

    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Invalid skill level: {0}")]
    InvalidSkillLevel(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Unexpected response status: {0}")]
    UnexpectedStatus(u16),

    #[error("Invalid base url: {0}")]
    InvalidBaseUrl(String),
}

impl AppError {
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            AppError::Validation(violations) => violations,
            _ => &[],
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
