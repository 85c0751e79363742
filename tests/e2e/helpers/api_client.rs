use anyhow::Result;
use http_body_util::{BodyExt, Full};
use hyper::{body::Bytes, Method, Request, Response, StatusCode};
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Clone)]
pub struct TestClient {
    base_url: String,
    client: Client<hyper_util::client::legacy::connect::HttpConnector, Full<Bytes>>,
}

impl TestClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder(TokioExecutor::new()).build_http();
        Self {
            base_url: base_url.to_string(),
            client,
        }
    }

    pub async fn get(&self, path: &str) -> Result<TestResponse> {
        self.request(Method::GET, path, None, None).await
    }

    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<TestResponse> {
        let bytes = Bytes::from(serde_json::to_vec(body)?);
        self.request(Method::POST, path, Some(bytes), None).await
    }

    /// POST an arbitrary body labelled as JSON
    pub async fn post_raw(&self, path: &str, body: &str) -> Result<TestResponse> {
        let bytes = Bytes::from(body.to_string());
        self.request(Method::POST, path, Some(bytes), None).await
    }

    pub async fn put<T: Serialize>(&self, path: &str, body: &T) -> Result<TestResponse> {
        let bytes = Bytes::from(serde_json::to_vec(body)?);
        self.request(Method::PUT, path, Some(bytes), None).await
    }

    pub async fn delete(&self, path: &str) -> Result<TestResponse> {
        self.request(Method::DELETE, path, None, None).await
    }

    pub async fn delete_with_auth(&self, path: &str, authorization: &str) -> Result<TestResponse> {
        self.request(Method::DELETE, path, None, Some(authorization))
            .await
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Bytes>,
        authorization: Option<&str>,
    ) -> Result<TestResponse> {
        let url = format!("{}{}", self.base_url, path);
        let mut req_builder = Request::builder().method(method).uri(&url);

        if let Some(value) = authorization {
            req_builder = req_builder.header("Authorization", value);
        }

        let body_bytes = if let Some(body) = body {
            req_builder = req_builder.header("Content-Type", "application/json");
            Full::new(body)
        } else {
            Full::new(Bytes::new())
        };

        let request = req_builder.body(body_bytes)?;
        let response = self.client.request(request).await?;

        TestResponse::from_response(response).await
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Option<Value>,
    #[allow(dead_code)]
    pub headers: HashMap<String, String>,
}

impl TestResponse {
    async fn from_response(response: Response<hyper::body::Incoming>) -> Result<Self> {
        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.to_string(), v.to_string())))
            .collect();

        let body_bytes = response.into_body().collect().await?.to_bytes().to_vec();

        let body = if !body_bytes.is_empty() {
            serde_json::from_slice(&body_bytes).ok()
        } else {
            None
        };

        Ok(Self {
            status,
            body,
            headers,
        })
    }

    pub fn assert_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(
            self.status, expected,
            "Expected status {} but got {}. Body: {:?}",
            expected, self.status, self.body
        );
        self
    }

    /// Parsed JSON body, panicking when the response had none
    pub fn json(&self) -> &Value {
        self.body.as_ref().expect("Response has no JSON body")
    }

    #[allow(dead_code)]
    pub fn header(&self, name: &str) -> Option<&String> {
        self.headers.get(name)
    }
}
