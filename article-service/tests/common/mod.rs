#![allow(dead_code)]

use article_service::config::{ArticleConfig, MongoConfig};
use article_service::dtos::ResponseData;
use article_service::services::{ArticleStore, MockArticleStore};
use article_service::Application;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use service_core::config::Config as CoreConfig;
use service_core::response::Envelope;
use std::sync::Arc;

pub fn test_config(database: &str) -> ArticleConfig {
    ArticleConfig {
        common: CoreConfig {
            port: 0, // Random port for testing
            log_level: "error".to_string(),
        },
        mongodb: MongoConfig {
            uri: std::env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database: database.to_string(),
            collection: "articles".to_string(),
        },
        otlp_endpoint: None,
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: Arc<MockArticleStore>,
    pub client: Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_store(MockArticleStore::new()).await
    }

    pub async fn spawn_with_store(store: MockArticleStore) -> Self {
        let store = Arc::new(store);
        let app = Application::build_with_store(
            test_config("unused"),
            store.clone() as Arc<dyn ArticleStore>,
        )
        .await
        .expect("Failed to build test application");

        let port = app.port();
        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            port,
            store,
            client: Client::new(),
        }
    }

    pub async fn post_article(&self, body: Value) -> (StatusCode, Value) {
        self.post_raw(body.to_string()).await
    }

    pub async fn post_raw(&self, body: String) -> (StatusCode, Value) {
        let response = self
            .client
            .post(format!("{}/articles", self.address))
            .body(body)
            .send()
            .await
            .expect("Failed to execute request");
        read(response).await
    }

    pub async fn get_article(&self, id: &str) -> (StatusCode, Value) {
        let response = self
            .client
            .get(format!("{}/articles/{}", self.address, id))
            .send()
            .await
            .expect("Failed to execute request");
        read(response).await
    }

    pub async fn list_articles(&self) -> (StatusCode, Value) {
        let response = self
            .client
            .get(format!("{}/articles", self.address))
            .send()
            .await
            .expect("Failed to execute request");
        read(response).await
    }

    /// Create an article and return its assigned id.
    pub async fn create(&self, title: &str, content: &str, author: &str) -> String {
        let (status, body) = self
            .post_article(serde_json::json!({
                "title": title,
                "content": content,
                "author": author,
            }))
            .await;
        assert_eq!(status, StatusCode::OK, "create failed: {}", body);
        body["data"]["id"]
            .as_str()
            .expect("create response without id")
            .to_string()
    }
}

async fn read(response: reqwest::Response) -> (StatusCode, Value) {
    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content type: {}",
        content_type
    );
    let body = response.json().await.expect("Failed to parse JSON");
    (status, body)
}

pub fn typed(body: &Value) -> Envelope<ResponseData> {
    serde_json::from_value(body.clone()).expect("body is not an envelope")
}
