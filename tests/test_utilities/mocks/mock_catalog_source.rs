use async_trait::async_trait;
use pc_compat::prelude::*;

/// Mock CatalogSource for testing
///
/// Serves a fixed component list as a remote snapshot, or simulates a
/// failed fetch by serving the reference dataset as fallback.
pub struct MockCatalogSource {
    components: Vec<Component>,
    fail: bool,
}

impl MockCatalogSource {
    pub fn new(components: Vec<Component>) -> Self {
        Self {
            components,
            fail: false,
        }
    }

    /// Simulates an unavailable remote: every fetch falls back
    pub fn with_failure() -> Self {
        Self {
            components: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn fetch(&self) -> CatalogFetch {
        if self.fail {
            CatalogFetch::FellBack(reference_catalog())
        } else {
            CatalogFetch::Fetched(self.components.clone())
        }
    }
}
