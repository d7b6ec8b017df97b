use crate::ports::outbound::{CatalogFetch, CatalogSource};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingCatalogSource wraps a CatalogSource and adds in-memory caching.
///
/// Decorator over any CatalogSource, keyed by a caller-supplied label
/// (conventionally the endpoint). Only remote snapshots are cached: a call
/// that fell back to the reference dataset stays uncached, so the next call
/// retries the remote source instead of pinning the process to local data.
///
/// The engine itself never requires caching - each of its calls is an
/// independent snapshot. This adapter exists for callers that issue several
/// engine calls in one session and want to pay the fetch cost once.
pub struct CachingCatalogSource<S> {
    inner: S,
    key: String,
    cache: Arc<DashMap<String, Vec<crate::compatibility::domain::Component>>>,
}

impl<S: CatalogSource> CachingCatalogSource<S> {
    /// Wraps `inner`, caching snapshots under `key`
    pub fn new(inner: S, key: impl Into<String>) -> Self {
        Self {
            inner,
            key: key.into(),
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<S: CatalogSource> CatalogSource for CachingCatalogSource<S> {
    async fn fetch(&self) -> CatalogFetch {
        if let Some(hit) = self.cache.get(&self.key) {
            return CatalogFetch::Fetched(hit.clone());
        }

        let fetch = self.inner.fetch().await;

        if let CatalogFetch::Fetched(components) = &fetch {
            self.cache.insert(self.key.clone(), components.clone());
        }

        fetch
    }
}
