use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid qtype '{token}' for domain '{domain}'")]
    InvalidQueryType { token: String, domain: String },

    #[error("File '{0}' not found")]
    InputNotFound(String),

    #[error("Cannot open '{path}': {reason}")]
    InputUnreadable { path: String, reason: String },

    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::IoError(e.to_string())
    }
}
