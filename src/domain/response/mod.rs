pub mod error_kind;
pub mod wire;

pub use error_kind::{ErrorKind, ERROR_CATALOGUE};
pub use wire::normalize_envelope;

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::link::Link;

/// One field-level or item-level problem.
///
/// Every key is always serialized, absent parts as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorDetail {
    pub field: Option<String>,
    pub value: Option<Value>,
    pub issues: Option<Vec<String>>,
    pub links: Option<Vec<Link>>,
}

impl ErrorDetail {
    /// Detail with every part set to `null`
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a detail from its four optional parts
    pub fn construct(
        issues: Option<Vec<String>>,
        field: Option<&str>,
        value: Option<Value>,
        links: Option<Vec<Link>>,
    ) -> Self {
        Self {
            field: field.map(str::to_string),
            value: value.filter(|v| !v.is_null()),
            issues,
            links,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value).filter(|v| !v.is_null());
        self
    }

    pub fn with_issues<I, S>(mut self, issues: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.issues = Some(issues.into_iter().map(Into::into).collect());
        self
    }

    /// Append a single issue
    pub fn with_issue(mut self, issue: impl Into<String>) -> Self {
        self.issues.get_or_insert_with(Vec::new).push(issue.into());
        self
    }

    pub fn with_links(mut self, links: Vec<Link>) -> Self {
        self.links = Some(links);
        self
    }
}

/// All details of one failure category within a response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedError {
    pub name: String,
    pub message: String,
    pub debug_id: String,
    pub details: Vec<ErrorDetail>,
}

impl NamedError {
    pub fn new(
        kind: ErrorKind,
        message: impl Into<String>,
        debug_id: impl Into<String>,
        details: Vec<ErrorDetail>,
    ) -> Self {
        Self {
            name: kind.name().to_string(),
            message: message.into(),
            debug_id: debug_id.into(),
            details,
        }
    }
}

/// Response envelope returned by every endpoint, success or failure.
///
/// `status_code` is applied by the transport as the HTTP status and is not
/// written into the body. Missing keys deserialize to `false` / `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiResponse {
    pub success: bool,
    pub result: Option<Value>,
    pub errors: Option<Vec<NamedError>>,
    #[serde(skip)]
    pub status_code: StatusCode,
    pub links: Option<Vec<Link>>,
    pub message: Option<String>,
    pub extra: Option<Value>,
}

impl ApiResponse {
    /// Success branch carrying `result`
    pub fn success(result: Value) -> Self {
        Self {
            success: true,
            result: Some(result).filter(|v| !v.is_null()),
            status_code: StatusCode::OK,
            ..Self::default()
        }
    }

    /// Failure branch carrying `errors`
    pub fn failure(errors: Vec<NamedError>, message: String, status_code: StatusCode) -> Self {
        Self {
            success: false,
            result: None,
            errors: Some(errors),
            status_code,
            links: None,
            message: Some(message),
            extra: None,
        }
    }

    pub fn with_links(mut self, links: Vec<Link>) -> Self {
        self.links = Some(links);
        self
    }

    pub fn with_extra(mut self, extra: Value) -> Self {
        self.extra = Some(extra).filter(|v| !v.is_null());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_status(mut self, status_code: StatusCode) -> Self {
        self.status_code = status_code;
        self
    }

    /// Debug ids of every error in the envelope
    pub fn debug_ids(&self) -> Vec<&str> {
        self.errors
            .iter()
            .flatten()
            .map(|e| e.debug_id.as_str())
            .collect()
    }
}
