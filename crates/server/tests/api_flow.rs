use std::path::PathBuf;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use service::storage::IdPolicy;
use tower::Service;
use uuid::Uuid;

use server::{routes, state::ServerState};

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

struct TestApp {
    app: Router,
    dir: PathBuf,
}

impl TestApp {
    async fn new(policy: IdPolicy) -> Self {
        let dir = std::env::temp_dir().join(format!("shop_api_flow_{}", Uuid::new_v4()));
        let products = dir.join("products.json");
        let carts = dir.join("carts.json");
        let state = ServerState::from_files(&products.to_string_lossy(), &carts.to_string_lossy(), policy).await;
        Self { app: routes::build_router(state, cors()), dir }
    }

    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Vec<u8>)> {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(v) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&v)?))?,
            None => builder.body(Body::empty())?,
        };
        let resp = self.app.clone().call(req).await?;
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
        Ok((status, bytes.to_vec()))
    }

    async fn json(&self, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
        let (status, bytes) = self.send(method, uri, body).await?;
        Ok((status, serde_json::from_slice(&bytes)?))
    }

    async fn cleanup(self) {
        let _ = tokio::fs::remove_dir_all(&self.dir).await;
    }
}

#[tokio::test]
async fn health_ok() -> anyhow::Result<()> {
    let app = TestApp::new(IdPolicy::default()).await;
    let (status, body) = app.json("GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
    app.cleanup().await;
    Ok(())
}

#[tokio::test]
async fn create_product_then_duplicate_code_returns_empty_body() -> anyhow::Result<()> {
    let app = TestApp::new(IdPolicy::default()).await;

    let (status, body) = app
        .json("POST", "/api/products", Some(json!({"code": "A1", "name": "Widget"})))
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "code": "A1", "name": "Widget"}));

    let (status, bytes) = app
        .send("POST", "/api/products", Some(json!({"code": "A1", "name": "Gadget"})))
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert!(bytes.is_empty());

    let (_, list) = app.json("GET", "/api/products", None).await?;
    assert_eq!(list, json!([{"id": 1, "code": "A1", "name": "Widget"}]));

    app.cleanup().await;
    Ok(())
}

#[tokio::test]
async fn get_missing_product_is_404_with_error_body() -> anyhow::Result<()> {
    let app = TestApp::new(IdPolicy::default()).await;
    let (status, body) = app.json("GET", "/api/products/42", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Product not found"}));
    app.cleanup().await;
    Ok(())
}

#[tokio::test]
async fn non_numeric_id_is_rejected() -> anyhow::Result<()> {
    let app = TestApp::new(IdPolicy::default()).await;
    let (status, _) = app.send("GET", "/api/products/abc", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    app.cleanup().await;
    Ok(())
}

#[tokio::test]
async fn update_and_delete_answer_message_even_when_missing() -> anyhow::Result<()> {
    let app = TestApp::new(IdPolicy::default()).await;
    app.json("POST", "/api/products", Some(json!({"code": "A1", "name": "Widget"}))).await?;

    let (status, body) = app
        .json("PUT", "/api/products/1", Some(json!({"code": "A1", "name": "Renamed", "price": 3})))
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Product updated successfully"}));
    let (_, stored) = app.json("GET", "/api/products/1", None).await?;
    assert_eq!(stored, json!({"id": 1, "code": "A1", "name": "Renamed", "price": 3}));

    let (status, body) = app.json("PUT", "/api/products/9", Some(json!({"code": "Z"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Product updated successfully"}));

    let (status, body) = app.json("DELETE", "/api/products/9", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Product deleted successfully"}));
    let (_, list) = app.json("GET", "/api/products", None).await?;
    assert_eq!(list.as_array().map(Vec::len), Some(1));

    let (_, body) = app.json("DELETE", "/api/products/1", None).await?;
    assert_eq!(body, json!({"message": "Product deleted successfully"}));
    let (status, _) = app.send("GET", "/api/products/1", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    app.cleanup().await;
    Ok(())
}

#[tokio::test]
async fn put_without_code_still_replaces_and_answers_message() -> anyhow::Result<()> {
    let app = TestApp::new(IdPolicy::default()).await;
    app.json("POST", "/api/products", Some(json!({"code": "A1"}))).await?;

    let (status, body) = app.json("PUT", "/api/products/1", Some(json!({"name": "Renamed"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Product updated successfully"}));

    let (_, stored) = app.json("GET", "/api/products/1", None).await?;
    assert_eq!(stored, json!({"id": 1, "code": "", "name": "Renamed"}));

    app.cleanup().await;
    Ok(())
}

#[tokio::test]
async fn post_without_code_is_created() -> anyhow::Result<()> {
    let app = TestApp::new(IdPolicy::default()).await;
    let (status, body) = app.json("POST", "/api/products", Some(json!({"name": "Nameless"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "code": "", "name": "Nameless"}));
    app.cleanup().await;
    Ok(())
}

#[tokio::test]
async fn id_after_delete_follows_configured_policy() -> anyhow::Result<()> {
    for (policy, expected) in [(IdPolicy::CountPlusOne, 2), (IdPolicy::MaxPlusOne, 3)] {
        let app = TestApp::new(policy).await;
        app.json("POST", "/api/products", Some(json!({"code": "A"}))).await?;
        app.json("POST", "/api/products", Some(json!({"code": "B"}))).await?;
        app.send("DELETE", "/api/products/1", None).await?;

        let (_, created) = app.json("POST", "/api/products", Some(json!({"code": "C"}))).await?;
        assert_eq!(created["id"], json!(expected), "policy {policy:?}");
        app.cleanup().await;
    }
    Ok(())
}

#[tokio::test]
async fn cart_flow_accumulates_quantities() -> anyhow::Result<()> {
    let app = TestApp::new(IdPolicy::default()).await;

    let (status, cart) = app.json("POST", "/api/carts", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart, json!({"id": 1, "items": []}));

    let (status, body) = app
        .json("POST", "/api/carts/1/product/5", Some(json!({"quantity": 3})))
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Product added to cart successfully"}));

    let (_, items) = app.json("GET", "/api/carts/1", None).await?;
    assert_eq!(items, json!([{"productId": 5, "quantity": 3}]));

    // no body at all: quantity 1
    app.send("POST", "/api/carts/1/product/5", None).await?;
    app.send("POST", "/api/carts/1/product/7", Some(json!({"quantity": 0}))).await?;
    let (_, items) = app.json("GET", "/api/carts/1", None).await?;
    assert_eq!(items, json!([{"productId": 5, "quantity": 4}, {"productId": 7, "quantity": 1}]));

    app.cleanup().await;
    Ok(())
}

#[tokio::test]
async fn missing_cart_lookups_and_additions() -> anyhow::Result<()> {
    let app = TestApp::new(IdPolicy::default()).await;

    let (status, body) = app.json("GET", "/api/carts/99", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Cart not found"}));

    let (status, body) = app.json("POST", "/api/carts/99/product/1", Some(json!({"quantity": 2}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Product added to cart successfully"}));
    let (status, _) = app.send("GET", "/api/carts/99", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    app.cleanup().await;
    Ok(())
}
