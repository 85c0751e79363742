use axum::http::StatusCode;
use serde::Serialize;
use std::sync::Arc;

use crate::domain::debug_id::DebugIdGenerator;
use crate::domain::response::{ApiResponse, ErrorDetail, ErrorKind, NamedError};
use crate::error::ApiResult;
use crate::infrastructure::i18n::{MessageParams, Translator};

/// Overrides for the defaults an error constructor would otherwise apply
#[derive(Debug, Clone, Default)]
pub struct ErrorOptions {
    pub message_key: Option<String>,
    pub message_params: MessageParams,
    pub status_code: Option<StatusCode>,
}

impl ErrorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_message_key(mut self, key: impl Into<String>) -> Self {
        self.message_key = Some(key.into());
        self
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_params.insert(name.into(), value.into());
        self
    }

    pub fn with_status(mut self, status_code: StatusCode) -> Self {
        self.status_code = Some(status_code);
        self
    }
}

/// Builds response envelopes.
///
/// Holds the translator and debug id generator; every builder is a pure
/// function of its arguments plus those two collaborators, so one instance is
/// shared across requests behind an `Arc`.
pub struct ApiHelper {
    translator: Arc<dyn Translator>,
    debug_ids: DebugIdGenerator,
}

impl ApiHelper {
    pub fn new(translator: Arc<dyn Translator>, debug_ids: DebugIdGenerator) -> Self {
        Self {
            translator,
            debug_ids,
        }
    }

    pub fn translator(&self) -> &dyn Translator {
        self.translator.as_ref()
    }

    /// Correlation id for one error occurrence, grouped by `namespace`
    pub fn generate_debug_id(&self, namespace: &str) -> String {
        self.debug_ids.generate(namespace)
    }

    /// Failure envelope around already built errors.
    ///
    /// Defaults: the generic processing message and `400 Bad Request`.
    pub fn build_error_response(&self, errors: Vec<NamedError>, options: ErrorOptions) -> ApiResponse {
        let key = options
            .message_key
            .unwrap_or_else(|| ErrorKind::Processing.message_key());
        let message = self.translator.translate(&key, &options.message_params);
        let status = options.status_code.unwrap_or(StatusCode::BAD_REQUEST);

        ApiResponse::failure(errors, message, status)
    }

    /// Failure envelope holding one error of `kind`
    pub fn api_error_response(
        &self,
        kind: ErrorKind,
        namespace: &str,
        details: Vec<ErrorDetail>,
        options: ErrorOptions,
    ) -> ApiResponse {
        let key = options
            .message_key
            .unwrap_or_else(|| kind.message_key());
        let message = self.translator.translate(&key, &options.message_params);
        let status = options.status_code.unwrap_or_else(|| kind.status_code());
        let debug_id = self.generate_debug_id(namespace);

        tracing::debug!(
            debug_id = %debug_id,
            error = kind.name(),
            status = status.as_u16(),
            "Built error response"
        );

        let error = NamedError::new(kind, message.clone(), debug_id, details);
        ApiResponse::failure(vec![error], message, status)
    }

    pub fn api_validation_error_response(
        &self,
        details: Vec<ErrorDetail>,
        namespace: &str,
        options: ErrorOptions,
    ) -> ApiResponse {
        self.api_error_response(ErrorKind::Validation, namespace, details, options)
    }

    pub fn api_database_error_response(
        &self,
        namespace: &str,
        detail: Option<ErrorDetail>,
        options: ErrorOptions,
    ) -> ApiResponse {
        self.single_detail(ErrorKind::Database, namespace, detail, options)
    }

    pub fn api_unknown_error_response(
        &self,
        namespace: &str,
        detail: Option<ErrorDetail>,
        options: ErrorOptions,
    ) -> ApiResponse {
        self.single_detail(ErrorKind::Unknown, namespace, detail, options)
    }

    pub fn api_authentication_error_response(
        &self,
        namespace: &str,
        detail: Option<ErrorDetail>,
        options: ErrorOptions,
    ) -> ApiResponse {
        self.single_detail(ErrorKind::Authentication, namespace, detail, options)
    }

    pub fn api_authorization_error_response(
        &self,
        namespace: &str,
        detail: Option<ErrorDetail>,
        options: ErrorOptions,
    ) -> ApiResponse {
        self.single_detail(ErrorKind::Authorization, namespace, detail, options)
    }

    pub fn api_not_found_error_response(
        &self,
        namespace: &str,
        detail: Option<ErrorDetail>,
        options: ErrorOptions,
    ) -> ApiResponse {
        self.single_detail(ErrorKind::NotFound, namespace, detail, options)
    }

    pub fn api_processing_error_response(
        &self,
        namespace: &str,
        detail: Option<ErrorDetail>,
        options: ErrorOptions,
    ) -> ApiResponse {
        self.single_detail(ErrorKind::Processing, namespace, detail, options)
    }

    pub fn api_too_many_requests_error_response(
        &self,
        namespace: &str,
        detail: Option<ErrorDetail>,
        options: ErrorOptions,
    ) -> ApiResponse {
        self.single_detail(ErrorKind::TooManyRequests, namespace, detail, options)
    }

    /// Envelope for `kind` with the raw error logged server-side.
    ///
    /// The error text only goes to the log, keyed by the envelope's debug id.
    pub fn report_error(
        &self,
        kind: ErrorKind,
        namespace: &str,
        source: &dyn std::error::Error,
    ) -> ApiResponse {
        self.report_error_with_detail(kind, namespace, ErrorDetail::new(), source)
    }

    /// [`report_error`](Self::report_error) with a caller-facing detail
    /// in place of the empty one.
    pub fn report_error_with_detail(
        &self,
        kind: ErrorKind,
        namespace: &str,
        detail: ErrorDetail,
        source: &dyn std::error::Error,
    ) -> ApiResponse {
        let response = self.single_detail(kind, namespace, Some(detail), ErrorOptions::default());
        let debug_id = response.debug_ids().first().copied().unwrap_or_default();

        if response.status_code.is_client_error() {
            tracing::warn!(debug_id, error = %source, kind = kind.name(), namespace, "Request rejected");
        } else {
            tracing::error!(debug_id, error = %source, kind = kind.name(), namespace, "Request failed");
        }

        response
    }

    /// Success envelope with an optional localized message
    pub fn api_success_response<T: Serialize>(
        &self,
        result: &T,
        message_key: Option<&str>,
    ) -> ApiResult<ApiResponse> {
        let mut response = ApiResponse::success(serde_json::to_value(result)?);
        if let Some(key) = message_key {
            response = response.with_message(self.translator.translate(key, &MessageParams::new()));
        }
        Ok(response)
    }

    fn single_detail(
        &self,
        kind: ErrorKind,
        namespace: &str,
        detail: Option<ErrorDetail>,
        options: ErrorOptions,
    ) -> ApiResponse {
        let details = vec![detail.unwrap_or_default()];
        self.api_error_response(kind, namespace, details, options)
    }
}

impl std::fmt::Debug for ApiHelper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiHelper")
            .field("debug_ids", &self.debug_ids)
            .finish_non_exhaustive()
    }
}
