use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// A submitted product: the caller's target deal price and the page to
/// scrape the live price from. The deal price is kept verbatim as text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub title: String,
    pub deal_price: String,
    pub source_url: String,
}

/// In-memory product store keyed by title, shared across request handlers.
///
/// Cloning is cheap; all clones see the same map. Submitting a title that
/// already exists overwrites the stored record. Nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    inner: Arc<RwLock<HashMap<String, ProductRecord>>>,
}

impl ProductStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the record stored under `record.title`.
    pub async fn insert(&self, record: ProductRecord) {
        let mut map = self.inner.write().await;
        map.insert(record.title.clone(), record);
    }

    /// Returns a clone of the record for `title`, if one was submitted.
    pub async fn get(&self, title: &str) -> Option<ProductRecord> {
        let map = self.inner.read().await;
        map.get(title).cloned()
    }
}
