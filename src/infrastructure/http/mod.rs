use axum::{
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{health, user::UserController};
use crate::domain::helper::ApiHelper;
use crate::domain::response::ApiResponse;
use crate::infrastructure::auth::admin_middleware;
use crate::infrastructure::config::Config;

/// The envelope's `status_code` becomes the HTTP status; the body carries the
/// remaining wire keys.
impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status = self.status_code;
        (status, Json(self)).into_response()
    }
}

/// Build the application router with all routes configured
pub fn create_router(
    config: Arc<Config>,
    helper: Arc<ApiHelper>,
    user_controller: Arc<UserController>,
) -> Router {
    // User routes, delete requires the admin token
    let user_routes = Router::new()
        .route(
            "/v1/users",
            get(UserController::list_users).post(UserController::create_user),
        )
        .route(
            "/v1/users/:id",
            get(UserController::get_user).merge(
                axum::routing::delete(UserController::delete_user).route_layer(
                    middleware::from_fn_with_state(
                        (helper.clone(), config.clone()),
                        admin_middleware,
                    ),
                ),
            ),
        )
        .with_state(user_controller);

    let app = Router::new()
        .route("/health", get(health::health))
        .fallback(health::not_found)
        .with_state(helper.clone())
        .merge(user_routes)
        .layer(middleware::from_fn_with_state(helper, health::method_not_allowed))
        .layer(TraceLayer::new_for_http());

    if config.is_development() {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

/// Start the HTTP server
pub async fn start_http_server(config: Arc<Config>, app: Router) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
