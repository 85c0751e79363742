use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::domain::helper::{ApiHelper, ErrorOptions};
use crate::domain::response::{ApiResponse, ErrorDetail};
use crate::infrastructure::config::Config;

const NAMESPACE: &str = "auth";

/// Guards admin-only routes with a static bearer token.
///
/// A missing or malformed header is an authentication failure; a well-formed
/// but wrong token is an authorization failure.
pub async fn admin_middleware(
    State((helper, config)): State<(Arc<ApiHelper>, Arc<Config>)>,
    request: Request,
    next: Next,
) -> Result<Response, ApiResponse> {
    let unauthenticated = |issue: &str| {
        helper.api_authentication_error_response(
            NAMESPACE,
            Some(
                ErrorDetail::new()
                    .with_field("authorization")
                    .with_issue(issue),
            ),
            ErrorOptions::new(),
        )
    };

    // Extract Authorization header
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| unauthenticated("Missing authorization header"))?;

    // Check Bearer token format
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthenticated("Invalid authorization format"))?;

    if token != config.admin_token {
        return Err(helper.api_authorization_error_response(
            NAMESPACE,
            Some(ErrorDetail::new().with_issue("Admin privileges required")),
            ErrorOptions::new(),
        ));
    }

    Ok(next.run(request).await)
}
