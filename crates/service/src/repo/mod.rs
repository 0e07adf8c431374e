use async_trait::async_trait;

use crate::domain::{Cart, Product, ProductInput};
use crate::errors::ServiceError;
use crate::file::{CartStore, ProductCatalog};

/// Product operations the HTTP layer depends on.
/// The file-backed [`ProductCatalog`] is the only implementation today.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list(&self) -> Vec<Product>;
    async fn get_by_id(&self, id: u64) -> Option<Product>;
    async fn add(&self, input: ProductInput) -> Result<Product, ServiceError>;
    async fn update(&self, id: u64, input: ProductInput) -> Result<Product, ServiceError>;
    async fn delete(&self, id: u64) -> Result<Product, ServiceError>;
}

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn create(&self) -> Cart;
    async fn get_by_id(&self, id: u64) -> Option<Cart>;
    async fn add_item(&self, cart_id: u64, product_id: u64, quantity: i64) -> Result<Cart, ServiceError>;
}

#[async_trait]
impl ProductRepository for ProductCatalog {
    async fn list(&self) -> Vec<Product> { self.list().await }
    async fn get_by_id(&self, id: u64) -> Option<Product> { self.get_by_id(id).await }
    async fn add(&self, input: ProductInput) -> Result<Product, ServiceError> { self.add(input).await }
    async fn update(&self, id: u64, input: ProductInput) -> Result<Product, ServiceError> { self.update(id, input).await }
    async fn delete(&self, id: u64) -> Result<Product, ServiceError> { self.delete(id).await }
}

#[async_trait]
impl CartRepository for CartStore {
    async fn create(&self) -> Cart { self.create().await }
    async fn get_by_id(&self, id: u64) -> Option<Cart> { self.get_by_id(id).await }
    async fn add_item(&self, cart_id: u64, product_id: u64, quantity: i64) -> Result<Cart, ServiceError> {
        self.add_item(cart_id, product_id, quantity).await
    }
}
