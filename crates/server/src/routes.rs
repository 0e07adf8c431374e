use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use common::types::Health;

use crate::state::ServerState;

pub mod carts;
pub mod products;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, products and carts.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let products = Router::new()
        .route("/api/products", get(products::list_products).post(products::create_product))
        .route(
            "/api/products/:pid",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        );

    let carts = Router::new()
        .route("/api/carts", post(carts::create_cart))
        .route("/api/carts/:cid", get(carts::get_cart_items))
        .route("/api/carts/:cid/product/:pid", post(carts::add_product_to_cart));

    Router::new()
        .route("/health", get(health))
        .merge(products)
        .merge(carts)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one span per request (method + path) at INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
