use thiserror::Error;

/// Reasons a form is rejected before anything reaches the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields ({0} is empty)")]
    EmptyField(&'static str),

    #[error("Please enter a valid email")]
    InvalidEmail,

    #[error("Please enter a valid avatar URL")]
    InvalidUrl,
}

#[derive(Error, Debug)]
pub enum UserdeckError {
    #[error("A user with email {0} already exists")]
    DuplicateEmail(String),

    #[error("A user with id {0} already exists")]
    DuplicateId(String),

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Failed to save data, please try again ({0})")]
    Persistence(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, UserdeckError>;
