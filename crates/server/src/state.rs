use std::sync::Arc;

use service::file::{CartStore, ProductCatalog};
use service::repo::{CartRepository, ProductRepository};
use service::storage::IdPolicy;

/// Shared handler state. Built once at startup and cloned into each request.
#[derive(Clone)]
pub struct ServerState {
    pub products: Arc<dyn ProductRepository>,
    pub carts: Arc<dyn CartRepository>,
}

impl ServerState {
    pub fn new(products: Arc<dyn ProductRepository>, carts: Arc<dyn CartRepository>) -> Self {
        Self { products, carts }
    }

    /// Open both JSON stores with the same id policy.
    pub async fn from_files(products_file: &str, carts_file: &str, policy: IdPolicy) -> Self {
        let products: Arc<dyn ProductRepository> = ProductCatalog::with_policy(products_file, policy).await;
        let carts: Arc<dyn CartRepository> = CartStore::with_policy(carts_file, policy).await;
        Self::new(products, carts)
    }
}
