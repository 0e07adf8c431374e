use serde::{de::DeserializeOwned, Serialize};
use tracing::{error, warn};

use super::{IdPolicy, JsonListStore};

/// Records addressed by a numeric id.
pub trait Keyed {
    fn key(&self) -> u64;
}

/// In-memory copy of a store plus the id counter derived from it.
///
/// Treated as a cache: managers reload it at the start of every operation.
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    pub records: Vec<T>,
    pub next_id: u64,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self { records: Vec::new(), next_id: 1 }
    }
}

impl<T> Snapshot<T>
where
    T: Keyed + Serialize + DeserializeOwned,
{
    /// Replace the records with the file contents and recompute `next_id`.
    /// On failure the last successfully loaded state is kept.
    pub async fn reload(&mut self, store: &JsonListStore<T>, policy: IdPolicy) {
        match store.load().await {
            Ok(records) => {
                self.next_id = policy.next_id(records.iter().map(Keyed::key));
                self.records = records;
            }
            Err(e) => {
                warn!(path = %store.path().display(), error = %e, "load failed; keeping last loaded records");
            }
        }
    }

    /// Hand out the current id and advance the counter.
    pub fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn position(&self, id: u64) -> Option<usize> {
        self.records.iter().position(|r| r.key() == id)
    }

    pub fn find(&self, id: u64) -> Option<&T> {
        self.records.iter().find(|r| r.key() == id)
    }

    /// Write-through after a mutation. Errors are logged; the in-memory
    /// mutation stands.
    pub async fn flush(&self, store: &JsonListStore<T>) {
        if let Err(e) = store.save(&self.records).await {
            error!(path = %store.path().display(), error = %e, "save failed");
        }
    }
}
