//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use brighthealth_api::AppState;
use brighthealth_core::config::{AppConfig, PasswordHashConfig};
use brighthealth_database::{MemoryUserDirectory, UserDirectory};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Directory backing the app, for direct manipulation
    pub directory: Arc<MemoryUserDirectory>,
}

impl TestApp {
    /// Create a new test application over an empty in-memory directory
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.secret_key = "integration-test-secret".to_string();
        config.auth.password_hash = PasswordHashConfig {
            memory_kib: 256,
            iterations: 1,
            parallelism: 1,
        };

        let directory = Arc::new(MemoryUserDirectory::new());
        let state = AppState::new(config, directory.clone() as Arc<dyn UserDirectory>)
            .expect("Failed to build app state");

        Self {
            router: brighthealth_api::build_app(state),
            directory,
        }
    }

    /// Register a user through the API and return its id
    pub async fn register(&self, username: &str, password: &str, role: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/auth/register",
                Some(serde_json::json!({
                    "email": format!("{username}@test.com"),
                    "username": username,
                    "full_name": format!("{username} tester"),
                    "role": role,
                    "password": password,
                })),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Register failed: {:?}",
            response.body
        );
        response.body["id"].as_i64().expect("No id in register response")
    }

    /// Login and return JWT access token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self.login_response(username, password).await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );
        response
            .body
            .get("access_token")
            .and_then(|v| v.as_str())
            .expect("No access_token in login response")
            .to_string()
    }

    /// Post login credentials as a form
    pub async fn login_response(&self, username: &str, password: &str) -> TestResponse {
        let body = format!("username={username}&password={password}");
        let req = Request::builder()
            .method("POST")
            .uri("/auth/token")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("Failed to build request");
        self.send(req).await
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");
        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let www_authenticate = response
            .headers()
            .get("www-authenticate")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            www_authenticate,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
    /// `WWW-Authenticate` header, if any
    pub www_authenticate: Option<String>,
}

impl TestResponse {
    /// The `detail` field of an error body
    pub fn detail(&self) -> &str {
        self.body["detail"].as_str().unwrap_or_default()
    }
}
