use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Translation group holding the default error messages
pub const ERROR_CATALOGUE: &str = "error_catalogue";

/// Failure categories surfaced to API consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    #[serde(rename = "VALIDATION_ERROR")]
    Validation,
    #[serde(rename = "DATABASE_ERROR")]
    Database,
    #[serde(rename = "UNKNOWN_ERROR")]
    Unknown,
    #[serde(rename = "AUTHENTICATION_ERROR")]
    Authentication,
    #[serde(rename = "AUTHORIZATION_ERROR")]
    Authorization,
    #[serde(rename = "OBJECT_NOT_FOUND_ERROR")]
    NotFound,
    #[serde(rename = "PROCESSING_ERROR")]
    Processing,
    #[serde(rename = "TOO_MANY_REQUESTS_ERROR")]
    TooManyRequests,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 8] = [
        Self::Validation,
        Self::Database,
        Self::Unknown,
        Self::Authentication,
        Self::Authorization,
        Self::NotFound,
        Self::Processing,
        Self::TooManyRequests,
    ];

    /// Machine-readable name written to `errors[].name`
    pub fn name(&self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION_ERROR",
            Self::Database => "DATABASE_ERROR",
            Self::Unknown => "UNKNOWN_ERROR",
            Self::Authentication => "AUTHENTICATION_ERROR",
            Self::Authorization => "AUTHORIZATION_ERROR",
            Self::NotFound => "OBJECT_NOT_FOUND_ERROR",
            Self::Processing => "PROCESSING_ERROR",
            Self::TooManyRequests => "TOO_MANY_REQUESTS_ERROR",
        }
    }

    /// Get the default HTTP status code for this kind
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation | Self::Processing => StatusCode::BAD_REQUEST,
            Self::Authentication => StatusCode::UNAUTHORIZED,
            Self::Authorization => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            Self::Database | Self::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message_suffix(&self) -> &'static str {
        match self {
            Self::Validation => "validation_error",
            Self::Database => "database_error",
            Self::Unknown => "unknown_error",
            Self::Authentication => "authentication_error",
            Self::Authorization => "authorization_error",
            Self::NotFound => "record_not_found",
            Self::Processing => "processing_error",
            Self::TooManyRequests => "too_many_requests_error",
        }
    }

    /// Translation key of the default top-level message
    pub fn message_key(&self) -> String {
        format!("{ERROR_CATALOGUE}.{}", self.message_suffix())
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
