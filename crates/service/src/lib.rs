//! Service layer for the product catalog and shopping carts.
//! - `storage` holds the whole-file JSON persistence shared by both collections.
//! - `file` holds the file-backed managers; `repo` the traits the HTTP layer depends on.

pub mod errors;
pub mod domain;
pub mod runtime;
pub mod storage;
pub mod file;
pub mod repo;
#[cfg(test)]
pub mod test_support;
