#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use hackform::config::Config;
use hackform::db::{KeySchema, MemorySubmissionStore, StoreError, SubmissionStore};
use hackform::models::SubmissionRecord;

pub const DOMAIN: &str = "2024.lincolnhack.org";

/// A running test server backed by an in-memory storage table.
pub struct TestApp {
    pub addr: SocketAddr,
    pub store: Arc<dyn SubmissionStore>,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a JSON body to the contact endpoint, return (body, status).
    pub async fn submit_json(&self, path: &str, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST form-urlencoded data to the contact endpoint, return (body, status).
    pub async fn submit_form(&self, data: &[(&str, &str)]) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/contact"))
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

pub fn test_config(key_schema: KeySchema, strict_status: bool) -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        domain_name: DOMAIN.to_string(),
        database_url: None,
        key_schema,
        strict_status,
        extra_cors_origins: vec!["http://localhost:4321".to_string()],
        max_body_size: 16 * 1024,
        api_url: format!("https://api.{DOMAIN}/contact"),
        event_start: None,
        event_end: None,
        static_dir: "static".to_string(),
        log_level: "warn".to_string(),
    }
}

/// Spawn a test app keyed by email only, with the observed always-200 behavior.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(KeySchema::Email, false).await
}

pub async fn spawn_app_with(key_schema: KeySchema, strict_status: bool) -> TestApp {
    let store: Arc<dyn SubmissionStore> = Arc::new(MemorySubmissionStore::new(key_schema));
    spawn_with_store(store, test_config(key_schema, strict_status)).await
}

pub async fn spawn_with_store(store: Arc<dyn SubmissionStore>, config: Config) -> TestApp {
    let app = hackform::build_app(store.clone(), config);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        store,
        client: Client::new(),
    }
}

/// A storage table whose writes always fail.
pub struct FailingStore;

#[async_trait]
impl SubmissionStore for FailingStore {
    async fn put(&self, _record: &SubmissionRecord) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("table offline".to_string()))
    }

    async fn get(
        &self,
        _email: &str,
        _created: Option<i64>,
    ) -> Result<Option<SubmissionRecord>, StoreError> {
        Ok(None)
    }

    async fn list_by_email(&self, _email: &str) -> Result<Vec<SubmissionRecord>, StoreError> {
        Ok(Vec::new())
    }
}
