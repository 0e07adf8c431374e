//! Storage abstractions for service layer
//!
//! Whole-file JSON persistence plus the reload/id bookkeeping shared by the
//! product catalog and the cart store.

pub mod json_list_store;
pub mod snapshot;
pub mod id_policy;

pub use id_policy::IdPolicy;
pub use json_list_store::JsonListStore;
pub use snapshot::{Keyed, Snapshot};
