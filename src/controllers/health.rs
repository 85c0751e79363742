use axum::{
    extract::{Request, State},
    http::{header::ALLOW, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::sync::Arc;

use crate::domain::helper::{ApiHelper, ErrorOptions};
use crate::domain::response::{ApiResponse, ErrorDetail, ErrorKind};

pub async fn health(State(helper): State<Arc<ApiHelper>>) -> ApiResponse {
    helper
        .api_success_response(&json!({"status": "ok"}), None)
        .unwrap_or_else(|err| helper.report_error(ErrorKind::Unknown, "health", &err))
}

/// Any unmatched route
pub async fn not_found(State(helper): State<Arc<ApiHelper>>, uri: Uri) -> ApiResponse {
    helper.api_not_found_error_response(
        "route",
        Some(
            ErrorDetail::new()
                .with_field("path")
                .with_value(json!(uri.path())),
        ),
        ErrorOptions::new(),
    )
}

/// Replaces axum's empty 405 with a processing envelope, keeping `Allow`
pub async fn method_not_allowed(
    State(helper): State<Arc<ApiHelper>>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let response = next.run(request).await;
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(ALLOW).cloned();
    let mut envelope = helper
        .api_processing_error_response(
            "route",
            Some(
                ErrorDetail::new()
                    .with_field("method")
                    .with_value(json!(method.as_str())),
            ),
            ErrorOptions::new()
                .with_message_key("error_catalogue.method_not_allowed")
                .with_param("method", method)
                .with_status(StatusCode::METHOD_NOT_ALLOWED),
        )
        .into_response();

    if let Some(allow) = allow {
        envelope.headers_mut().insert(ALLOW, allow);
    }
    envelope
}
