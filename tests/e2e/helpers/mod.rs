use std::path::PathBuf;
use std::sync::Arc;
use simple_api::controllers::user::UserController;
use simple_api::domain::user::UserDirectory;
use simple_api::infrastructure::config::{Config, Environment, LogFormat};
use simple_api::infrastructure::http::create_router;
use simple_api::register_api_helper;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

pub mod api_client;
pub mod assertions;

use api_client::TestClient;

pub const ADMIN_TOKEN: &str = "test-admin-token";

pub struct TestContext {
    pub client: TestClient,
    #[allow(dead_code)]
    pub config: Config,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            // Create test configuration
            let config = Config {
                host: "127.0.0.1".to_string(),
                port: 0, // Will be assigned by the OS
                environment: Environment::Development,
                log_format: LogFormat::Pretty,
                locale: "en".to_string(),
                fallback_locale: "en".to_string(),
                lang_path: None::<PathBuf>,
                debug_id_timestamp: false,
                admin_token: ADMIN_TOKEN.to_string(),
            };

            let helper = register_api_helper(&config).expect("Failed to register helper");
            let directory = Arc::new(UserDirectory::new());
            let user_controller = Arc::new(UserController::new(helper.clone(), directory));
            let app = create_router(Arc::new(config.clone()), helper, user_controller);

            // Start server
            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            let addr = listener.local_addr().expect("Failed to get local addr");
            let base_url = format!("http://{}", addr);

            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            Self {
                client: TestClient::new(&base_url),
                config,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // The server task ends with the test runtime
        }
    }
}
