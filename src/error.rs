/// Errors raised at the fallible edges of the crate: loading configuration,
/// reading translation catalogues and serializing response payloads.
///
/// Building envelopes never fails; these only surface while wiring the helper
/// up or when a caller hands over a result that cannot become JSON.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Catalogue I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalogue {path}: {reason}")]
    Catalogue { path: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Custom result type for the crate
pub type ApiResult<T> = Result<T, ApiError>;
