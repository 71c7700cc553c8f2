//! Test utilities for integration tests
#![allow(dead_code)]

use axum::{Router, body::Body};
use serde_json::{Value, json};

use routine_advisor::api::app;
use routine_advisor::app::Controller;
use routine_advisor::catalog::Catalog;
use routine_advisor::core::AppConfig;
use routine_advisor::core::db::async_db;

const TEST_PRODUCTS: &str = r#"{"products": [
    {"id": 1, "name": "Foaming Facial Cleanser", "brand": "CeraVe", "category": "cleanser",
     "description": "Gentle foaming cleanser.", "image": "https://example.com/1.png"},
    {"id": 2, "name": "Hydrating Facial Cleanser", "brand": "CeraVe", "category": "cleanser",
     "description": "Non-foaming cleanser.", "image": "https://example.com/2.png"},
    {"id": 3, "name": "Revitalift Moisturizer", "brand": "L'Oréal Paris", "category": "moisturizer",
     "description": "Anti-aging moisturizer.", "image": "https://example.com/3.png"},
    {"id": 4, "name": "Anthelios Sunscreen SPF 60", "brand": "La Roche-Posay", "category": "suncare",
     "description": "Broad spectrum protection.", "image": "https://example.com/4.png"}
]}"#;

/// Creates a test application router backed by an in-memory db and a
/// small catalog. Calls to the remote advisor go to `advisor_url`.
pub async fn test_app(advisor_url: &str) -> Router {
    let config = AppConfig {
        storage_path: String::from("./"),
        db_path: String::from(":memory:"),
        catalog_path: String::from("./data/products.json"),
        advisor_url: advisor_url.to_string(),
        advisor_model: String::from("gpt-4o-mini"),
        temperature: 0.7,
        max_tokens: 1000,
        context_window: 10,
    };
    let db = async_db(&config.db_path)
        .await
        .expect("Failed to connect to async db");
    let catalog = Catalog::from_json(TEST_PRODUCTS).expect("Invalid test catalog");
    let controller = Controller::new(&config, catalog, db)
        .await
        .expect("Failed to build controller");
    app(controller, "./web-ui/static")
}

/// An advisor url that refuses connections
pub fn unreachable_advisor() -> String {
    String::from("http://127.0.0.1:1/")
}

/// A chat completion response body with `content` as the first choice
pub fn completion_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1694268190,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not utf8")
}

pub async fn body_to_json(body: Body) -> Value {
    serde_json::from_str(&body_to_string(body).await).expect("Body is not json")
}
