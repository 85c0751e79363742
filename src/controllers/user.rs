use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::domain::helper::{ApiHelper, ErrorOptions, FieldLabels, ValidationMessages};
use crate::domain::link::{make_link, HypermediaRelation, Link};
use crate::domain::response::{ApiResponse, ErrorDetail, ErrorKind};
use crate::domain::user::{CreateUserRequest, UserDirectoryApi, UserServiceError};
use crate::infrastructure::i18n::MessageParams;

const NAMESPACE: &str = "user";
const COLLECTION: &str = "/v1/users";

pub struct UserController {
    helper: Arc<ApiHelper>,
    directory: Arc<dyn UserDirectoryApi>,
}

impl UserController {
    pub fn new(helper: Arc<ApiHelper>, directory: Arc<dyn UserDirectoryApi>) -> Self {
        Self { helper, directory }
    }

    /// GET /v1/users - List users
    pub async fn list_users(State(controller): State<Arc<UserController>>) -> ApiResponse {
        let users = controller.directory.list_users().await;
        let links = vec![
            make_link(COLLECTION, "GET", HypermediaRelation::REL_SELF, None),
            make_link(COLLECTION, "POST", HypermediaRelation::REL_CREATE, Some("Create user")),
        ];
        controller.respond(&users, StatusCode::OK, links)
    }

    /// POST /v1/users - Create new user
    pub async fn create_user(
        State(controller): State<Arc<UserController>>,
        payload: Result<Json<CreateUserRequest>, JsonRejection>,
    ) -> ApiResponse {
        let helper = &controller.helper;

        let Json(request) = match payload {
            Ok(payload) => payload,
            Err(rejection) => {
                let issue = helper
                    .translator()
                    .translate("validation.json_body", &MessageParams::new());
                return helper.report_error_with_detail(
                    ErrorKind::Processing,
                    NAMESPACE,
                    ErrorDetail::new().with_issue(issue),
                    &rejection,
                );
            }
        };

        let labels: FieldLabels = [("email".to_string(), "email address".to_string())].into();
        if let Some(details) =
            helper.validate_request_fields(&request, &ValidationMessages::new(), &labels)
        {
            return helper.api_validation_error_response(details, NAMESPACE, ErrorOptions::new());
        }

        match controller.directory.create_user(request).await {
            Ok(user) => {
                let links = user_links(user.id);
                controller.respond(&user, StatusCode::CREATED, links)
            }
            Err(err) => controller.failure(err),
        }
    }

    /// GET /v1/users/{id} - Get one user
    pub async fn get_user(
        State(controller): State<Arc<UserController>>,
        Path(raw_id): Path<String>,
    ) -> ApiResponse {
        let user_id = match controller.parse_id(&raw_id) {
            Ok(id) => id,
            Err(response) => return response,
        };

        match controller.directory.get_user(user_id).await {
            Ok(user) => controller.respond(&user, StatusCode::OK, user_links(user_id)),
            Err(err) => controller.failure(err),
        }
    }

    /// DELETE /v1/users/{id} - Delete user (admin only)
    pub async fn delete_user(
        State(controller): State<Arc<UserController>>,
        Path(raw_id): Path<String>,
    ) -> ApiResponse {
        let user_id = match controller.parse_id(&raw_id) {
            Ok(id) => id,
            Err(response) => return response,
        };

        match controller.directory.delete_user(user_id).await {
            Ok(()) => {
                let links = vec![make_link(COLLECTION, "GET", HypermediaRelation::REL_COLLECTION, None)];
                controller.respond(&Value::Null, StatusCode::OK, links)
            }
            Err(err) => controller.failure(err),
        }
    }

    fn parse_id(&self, raw_id: &str) -> Result<u64, ApiResponse> {
        raw_id.parse().map_err(|_| {
            let params: MessageParams = [("attribute".to_string(), "id".to_string())].into_iter().collect();
            let issue = self.helper.translator().translate("validation.integer", &params);
            let detail = ErrorDetail::new()
                .with_field("id")
                .with_value(json!(raw_id))
                .with_issue(issue);
            self.helper
                .api_validation_error_response(vec![detail], NAMESPACE, ErrorOptions::new())
        })
    }

    fn respond<T: Serialize>(&self, result: &T, status: StatusCode, links: Vec<Link>) -> ApiResponse {
        match self.helper.api_success_response(result, None) {
            Ok(response) => response.with_status(status).with_links(links),
            Err(err) => self.helper.report_error(ErrorKind::Unknown, NAMESPACE, &err),
        }
    }

    fn failure(&self, err: UserServiceError) -> ApiResponse {
        let helper = &self.helper;
        match &err {
            UserServiceError::NotFound(id) => helper.api_not_found_error_response(
                NAMESPACE,
                Some(ErrorDetail::new().with_field("id").with_value(json!(id))),
                ErrorOptions::new(),
            ),
            UserServiceError::EmailTaken(email) => helper.api_processing_error_response(
                NAMESPACE,
                Some(
                    ErrorDetail::new()
                        .with_field("email")
                        .with_value(json!(email))
                        .with_issue("The email address has already been taken."),
                ),
                ErrorOptions::new(),
            ),
            UserServiceError::Invalid(_) | UserServiceError::Other(_) => {
                helper.report_error(err.kind(), NAMESPACE, &err)
            }
        }
    }
}

fn user_links(user_id: u64) -> Vec<Link> {
    let href = format!("{COLLECTION}/{user_id}");
    vec![
        make_link(&href, "GET", HypermediaRelation::REL_SELF, Some("User")),
        make_link(&href, "DELETE", HypermediaRelation::REL_DELETE, None),
        make_link(COLLECTION, "GET", HypermediaRelation::REL_COLLECTION, None),
    ]
}
