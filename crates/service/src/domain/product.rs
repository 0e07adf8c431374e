use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::storage::Keyed;

/// Catalog record: assigned `id`, unique `code`, and whatever other fields
/// the client sent, kept verbatim.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u64,
    #[serde(default)]
    pub code: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Create/replace payload. Any `id` in the body is dropped; the catalog owns ids.
/// A body without `code` is accepted and stored with an empty code.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProductInput {
    #[serde(default)]
    pub code: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ProductInput {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into(), fields: Map::new() }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn into_product(mut self, id: u64) -> Product {
        self.fields.remove("id");
        Product { id, code: self.code, fields: self.fields }
    }
}

impl Keyed for Product {
    fn key(&self) -> u64 { self.id }
}
