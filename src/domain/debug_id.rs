use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub const DEFAULT_NAMESPACE: &str = "error";
const SEPARATOR: char = '-';
const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Source of the random part of a debug id.
///
/// Used for log correlation only, never for anything security sensitive.
pub trait TokenSource: Send + Sync {
    fn token(&self) -> String;
}

/// Random v4 UUID rendered as 32 lowercase hex characters
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidTokenSource;

impl TokenSource for UuidTokenSource {
    fn token(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Generates `<namespace>-<token>` identifiers, or
/// `<namespace>-<timestamp>-<token>` when timestamps are enabled.
#[derive(Clone)]
pub struct DebugIdGenerator {
    tokens: Arc<dyn TokenSource>,
    timestamped: bool,
}

impl DebugIdGenerator {
    pub fn new(tokens: Arc<dyn TokenSource>) -> Self {
        Self {
            tokens,
            timestamped: false,
        }
    }

    pub fn with_timestamp(mut self, timestamped: bool) -> Self {
        self.timestamped = timestamped;
        self
    }

    pub fn generate(&self, namespace: &str) -> String {
        let namespace = match namespace.trim() {
            "" => DEFAULT_NAMESPACE,
            ns => ns,
        };

        let token = self.tokens.token();
        if self.timestamped {
            let stamp = Utc::now().format(TIMESTAMP_FORMAT);
            format!("{namespace}{SEPARATOR}{stamp}{SEPARATOR}{token}")
        } else {
            format!("{namespace}{SEPARATOR}{token}")
        }
    }
}

impl Default for DebugIdGenerator {
    fn default() -> Self {
        Self::new(Arc::new(UuidTokenSource))
    }
}

impl std::fmt::Debug for DebugIdGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebugIdGenerator")
            .field("timestamped", &self.timestamped)
            .finish_non_exhaustive()
    }
}
