use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::types::MessageBody;
use service::domain::{Product, ProductInput};
use tracing::debug;

use crate::errors::ApiError;
use crate::state::ServerState;

pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const PRODUCT_UPDATED: &str = "Product updated successfully";
pub const PRODUCT_DELETED: &str = "Product deleted successfully";

/// List all products
pub async fn list_products(State(state): State<ServerState>) -> Json<Vec<Product>> {
    Json(state.products.list().await)
}

/// Get one product; 404 `{error}` when missing
pub async fn get_product(
    State(state): State<ServerState>,
    Path(pid): Path<u64>,
) -> Result<Json<Product>, ApiError> {
    state
        .products
        .get_by_id(pid)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(PRODUCT_NOT_FOUND))
}

/// Create a product. A duplicate code still answers 200, with an empty body.
pub async fn create_product(
    State(state): State<ServerState>,
    Json(input): Json<ProductInput>,
) -> Response {
    match state.products.add(input).await {
        Ok(product) => Json(product).into_response(),
        Err(e) => {
            debug!(error = %e, "product not created");
            StatusCode::OK.into_response()
        }
    }
}

/// Replace a product. Answers the same message whether or not it existed.
pub async fn update_product(
    State(state): State<ServerState>,
    Path(pid): Path<u64>,
    Json(input): Json<ProductInput>,
) -> Json<MessageBody> {
    if let Err(e) = state.products.update(pid, input).await {
        debug!(error = %e, "product not updated");
    }
    Json(MessageBody::new(PRODUCT_UPDATED))
}

pub async fn delete_product(
    State(state): State<ServerState>,
    Path(pid): Path<u64>,
) -> Json<MessageBody> {
    if let Err(e) = state.products.delete(pid).await {
        debug!(error = %e, "product not deleted");
    }
    Json(MessageBody::new(PRODUCT_DELETED))
}
