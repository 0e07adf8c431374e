//! File-backed managers. Each operation reloads its JSON file, applies the
//! change and writes the whole file back.

pub mod product_catalog;
pub mod cart_store;

pub use cart_store::CartStore;
pub use product_catalog::ProductCatalog;
