use std::{path::PathBuf, sync::Arc};

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::domain::{Product, ProductInput};
use crate::errors::ServiceError;
use crate::storage::{IdPolicy, JsonListStore, Snapshot};

/// Product list persisted as a JSON array.
///
/// The file is the source of truth: every operation starts by reloading it.
/// The mutex only serializes operations issued through this instance.
pub struct ProductCatalog {
    store: JsonListStore<Product>,
    state: Mutex<Snapshot<Product>>,
    policy: IdPolicy,
}

impl ProductCatalog {
    /// Open the catalog with the default (`count + 1`) id policy.
    pub async fn initialize<P: Into<PathBuf>>(path: P) -> Arc<Self> {
        Self::with_policy(path, IdPolicy::default()).await
    }

    /// Open the catalog. A missing or corrupt file is logged and leaves the
    /// catalog empty.
    pub async fn with_policy<P: Into<PathBuf>>(path: P, policy: IdPolicy) -> Arc<Self> {
        let store = JsonListStore::new(path).await;
        let mut snapshot = Snapshot::default();
        snapshot.reload(&store, policy).await;
        Arc::new(Self { store, state: Mutex::new(snapshot), policy })
    }

    /// Add a product under the next id. Rejected with `Conflict` when the code
    /// is already taken.
    pub async fn add(&self, input: ProductInput) -> Result<Product, ServiceError> {
        let mut state = self.state.lock().await;
        state.reload(&self.store, self.policy).await;

        if state.records.iter().any(|p| p.code == input.code) {
            warn!(code = %input.code, "product code already exists");
            return Err(ServiceError::Conflict(format!("product with code {} already exists", input.code)));
        }

        let product = input.into_product(state.take_id());
        state.records.push(product.clone());
        state.flush(&self.store).await;
        info!(product_id = product.id, code = %product.code, "product added");
        Ok(product)
    }

    pub async fn list(&self) -> Vec<Product> {
        let mut state = self.state.lock().await;
        state.reload(&self.store, self.policy).await;
        state.records.clone()
    }

    pub async fn get_by_id(&self, id: u64) -> Option<Product> {
        let mut state = self.state.lock().await;
        state.reload(&self.store, self.policy).await;
        let found = state.find(id).cloned();
        if found.is_none() {
            warn!(product_id = id, "product not found");
        }
        found
    }

    /// Replace every field of product `id` with `input`; the id is kept.
    /// Code uniqueness is only enforced on `add`.
    pub async fn update(&self, id: u64, input: ProductInput) -> Result<Product, ServiceError> {
        let mut state = self.state.lock().await;
        state.reload(&self.store, self.policy).await;

        let Some(idx) = state.position(id) else {
            warn!(product_id = id, "update skipped: product not found");
            return Err(ServiceError::not_found("product", id));
        };

        let product = input.into_product(id);
        state.records[idx] = product.clone();
        state.flush(&self.store).await;
        info!(product_id = id, "product updated");
        Ok(product)
    }

    /// Remove product `id`, returning the removed record.
    pub async fn delete(&self, id: u64) -> Result<Product, ServiceError> {
        let mut state = self.state.lock().await;
        state.reload(&self.store, self.policy).await;

        let Some(idx) = state.position(id) else {
            warn!(product_id = id, "delete skipped: product not found");
            return Err(ServiceError::not_found("product", id));
        };

        let removed = state.records.remove(idx);
        state.flush(&self.store).await;
        info!(product_id = id, "product deleted");
        Ok(removed)
    }

    /// Write the in-memory list to the backing file as is.
    pub async fn persist(&self) -> Result<(), ServiceError> {
        let state = self.state.lock().await;
        self.store.save(&state.records).await
    }
}
