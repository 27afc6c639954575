use thiserror::Error;

/// Rejections raised by form controllers before any state changes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Terms of service and privacy policy were not accepted")]
    TermsNotAccepted,
}

#[derive(Error, Debug)]
pub enum DigestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Issue #{0} not found")]
    IssueNotFound(u32),

    #[error("Unknown page: {0}")]
    UnknownRoute(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, DigestError>;
