use crate::compatibility::domain::Component;
use async_trait::async_trait;

/// Outcome of a catalog acquisition.
///
/// Both variants carry a usable snapshot. The distinction exists for
/// observability only: the engine's contract is fail-soft, so callers that
/// do not care where the data came from call `into_components()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogFetch {
    /// Snapshot fetched from the remote catalog endpoint
    Fetched(Vec<Component>),
    /// Remote unavailable or unusable; the built-in reference dataset was served
    FellBack(Vec<Component>),
}

impl CatalogFetch {
    pub fn components(&self) -> &[Component] {
        match self {
            CatalogFetch::Fetched(components) | CatalogFetch::FellBack(components) => components,
        }
    }

    pub fn into_components(self) -> Vec<Component> {
        match self {
            CatalogFetch::Fetched(components) | CatalogFetch::FellBack(components) => components,
        }
    }

    pub fn fell_back(&self) -> bool {
        matches!(self, CatalogFetch::FellBack(_))
    }
}

/// CatalogSource port for acquiring a component catalog snapshot.
///
/// `fetch` never fails. Implementations must recover from transport errors,
/// non-success statuses, timeouts and unparsable payloads by serving the
/// reference dataset. Fetch is idempotent; implementations do not retry or
/// back off - they fail over to local data exactly once per call.
///
/// Implementations must be `Send + Sync`; concurrent fetches resolve
/// independent snapshots and never interfere.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> CatalogFetch;
}

#[async_trait]
impl<S: CatalogSource + ?Sized> CatalogSource for Box<S> {
    async fn fetch(&self) -> CatalogFetch {
        (**self).fetch().await
    }
}
