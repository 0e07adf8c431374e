use axum::{
    extract::{Path, State},
    Json,
};
use common::types::MessageBody;
use serde::Deserialize;
use serde_json::Value;
use service::domain::{Cart, CartItem, DEFAULT_QUANTITY};
use tracing::debug;

use crate::errors::ApiError;
use crate::state::ServerState;

pub const CART_NOT_FOUND: &str = "Cart not found";
pub const PRODUCT_ADDED: &str = "Product added to cart successfully";

#[derive(Debug, Default, Deserialize)]
pub struct AddItemBody {
    #[serde(default)]
    pub quantity: Option<Value>,
}

impl AddItemBody {
    /// Missing, null, zero or non-numeric quantities fall back to 1.
    pub fn quantity(&self) -> i64 {
        self.quantity
            .as_ref()
            .and_then(Value::as_i64)
            .filter(|q| *q != 0)
            .unwrap_or(DEFAULT_QUANTITY)
    }
}

pub async fn create_cart(State(state): State<ServerState>) -> Json<Cart> {
    Json(state.carts.create().await)
}

/// Items of one cart; 404 `{error}` when missing
pub async fn get_cart_items(
    State(state): State<ServerState>,
    Path(cid): Path<u64>,
) -> Result<Json<Vec<CartItem>>, ApiError> {
    state
        .carts
        .get_by_id(cid)
        .await
        .map(|cart| Json(cart.items))
        .ok_or_else(|| ApiError::not_found(CART_NOT_FOUND))
}

/// Body is optional; a missing or unparsable body means quantity 1.
pub async fn add_product_to_cart(
    State(state): State<ServerState>,
    Path((cid, pid)): Path<(u64, u64)>,
    body: Option<Json<AddItemBody>>,
) -> Json<MessageBody> {
    let quantity = body.map(|Json(b)| b.quantity()).unwrap_or(DEFAULT_QUANTITY);
    if let Err(e) = state.carts.add_item(cid, pid, quantity).await {
        debug!(error = %e, "product not added to cart");
    }
    Json(MessageBody::new(PRODUCT_ADDED))
}
