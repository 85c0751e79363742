use crate::domain::response::ErrorKind;

#[derive(Debug, thiserror::Error)]
pub enum UserServiceError {
    #[error("user {0} not found")]
    NotFound(u64),
    #[error("email already registered: {0}")]
    EmailTaken(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl UserServiceError {
    /// Failure category reported to the API consumer
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::EmailTaken(_) => ErrorKind::Processing,
            Self::Invalid(_) => ErrorKind::Validation,
            Self::Other(_) => ErrorKind::Unknown,
        }
    }
}
