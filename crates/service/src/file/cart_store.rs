use std::{path::PathBuf, sync::Arc};

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::domain::Cart;
use crate::errors::ServiceError;
use crate::storage::{IdPolicy, JsonListStore, Snapshot};

/// Carts persisted as a JSON array. Same reload/write-through rules as
/// [`ProductCatalog`](super::ProductCatalog).
pub struct CartStore {
    store: JsonListStore<Cart>,
    state: Mutex<Snapshot<Cart>>,
    policy: IdPolicy,
}

impl CartStore {
    pub async fn initialize<P: Into<PathBuf>>(path: P) -> Arc<Self> {
        Self::with_policy(path, IdPolicy::default()).await
    }

    pub async fn with_policy<P: Into<PathBuf>>(path: P, policy: IdPolicy) -> Arc<Self> {
        let store = JsonListStore::new(path).await;
        let mut snapshot = Snapshot::default();
        snapshot.reload(&store, policy).await;
        Arc::new(Self { store, state: Mutex::new(snapshot), policy })
    }

    /// Append an empty cart under the next id.
    pub async fn create(&self) -> Cart {
        let mut state = self.state.lock().await;
        state.reload(&self.store, self.policy).await;

        let cart = Cart::new(state.take_id());
        state.records.push(cart.clone());
        state.flush(&self.store).await;
        info!(cart_id = cart.id, "cart created");
        cart
    }

    pub async fn get_by_id(&self, id: u64) -> Option<Cart> {
        let mut state = self.state.lock().await;
        state.reload(&self.store, self.policy).await;
        let found = state.find(id).cloned();
        if found.is_none() {
            warn!(cart_id = id, "cart not found");
        }
        found
    }

    /// Add `quantity` of `product_id` to the cart. The product id is taken as
    /// is; nothing checks it against the catalog.
    pub async fn add_item(&self, cart_id: u64, product_id: u64, quantity: i64) -> Result<Cart, ServiceError> {
        let mut state = self.state.lock().await;
        state.reload(&self.store, self.policy).await;

        let Some(idx) = state.position(cart_id) else {
            warn!(cart_id, product_id, "cart not found");
            return Err(ServiceError::not_found("cart", cart_id));
        };

        state.records[idx].add_item(product_id, quantity);
        let cart = state.records[idx].clone();
        state.flush(&self.store).await;
        info!(cart_id, product_id, quantity, "product added to cart");
        Ok(cart)
    }

    pub async fn persist(&self) -> Result<(), ServiceError> {
        let state = self.state.lock().await;
        self.store.save(&state.records).await
    }
}
