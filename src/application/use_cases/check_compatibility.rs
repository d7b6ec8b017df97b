use crate::compatibility::domain::{BuildRequest, CompatibilityResult, Component};
use crate::compatibility::rules;
use crate::compatibility::services::BuildAggregator;
use crate::ports::inbound::CompatibilityPort;
use crate::ports::outbound::{CatalogFetch, CatalogSource};
use async_trait::async_trait;

/// CompatibilityEngine - the use case facade the CLI calls.
///
/// Each operation acquires its own catalog snapshot through the injected
/// source, resolves ids by linear lookup, and delegates to the pairwise
/// rules or the build aggregator. There is no state shared between calls;
/// concurrent invocations each pay their own fetch and cannot interfere.
///
/// # Type Parameters
/// * `S` - CatalogSource implementation
pub struct CompatibilityEngine<S> {
    catalog: S,
}

impl<S: CatalogSource> CompatibilityEngine<S> {
    /// Creates a new engine with an injected catalog source
    pub fn new(catalog: S) -> Self {
        Self { catalog }
    }

    async fn snapshot(&self) -> Vec<Component> {
        self.catalog.fetch().await.into_components()
    }
}

fn find<'a>(components: &'a [Component], id: &str) -> Option<&'a Component> {
    components.iter().find(|c| c.id == id)
}

#[async_trait]
impl<S: CatalogSource> CompatibilityPort for CompatibilityEngine<S> {
    async fn components(&self) -> CatalogFetch {
        self.catalog.fetch().await
    }

    async fn check_cpu_motherboard(
        &self,
        cpu_id: &str,
        motherboard_id: &str,
    ) -> CompatibilityResult {
        let components = self.snapshot().await;
        match (find(&components, cpu_id), find(&components, motherboard_id)) {
            (Some(cpu), Some(board)) => rules::cpu_motherboard(cpu, board),
            _ => rules::components_not_found(),
        }
    }

    async fn check_ram_motherboard(
        &self,
        ram_id: &str,
        motherboard_id: &str,
    ) -> CompatibilityResult {
        let components = self.snapshot().await;
        match (find(&components, ram_id), find(&components, motherboard_id)) {
            (Some(ram), Some(board)) => rules::ram_motherboard(ram, board),
            _ => rules::components_not_found(),
        }
    }

    async fn check_full_build(&self, build: &BuildRequest) -> CompatibilityResult {
        let components = self.snapshot().await;
        BuildAggregator::aggregate(build, |id| find(&components, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::network::StaticCatalogSource;

    fn engine() -> CompatibilityEngine<StaticCatalogSource> {
        CompatibilityEngine::new(StaticCatalogSource::new())
    }

    #[tokio::test]
    async fn test_components_exposes_snapshot() {
        let fetch = engine().components().await;
        assert_eq!(fetch.components().len(), 7);
    }

    #[tokio::test]
    async fn test_check_cpu_motherboard_compatible() {
        let result = engine().check_cpu_motherboard("1", "3").await;
        assert!(result.is_compatible);
        assert!(result.message.contains("LGA1700"));
    }

    #[tokio::test]
    async fn test_check_cpu_motherboard_incompatible() {
        let result = engine().check_cpu_motherboard("1", "4").await;
        assert!(!result.is_compatible);
        assert_eq!(result.issues.len(), 1);
        assert!(result.issues[0].contains("LGA1700"));
        assert!(result.issues[0].contains("AM4"));
    }

    #[tokio::test]
    async fn test_check_cpu_motherboard_lookup_miss() {
        let result = engine().check_cpu_motherboard("999", "3").await;
        assert!(!result.is_compatible);
        assert_eq!(result.message, "Components not found");
        assert!(!result.issues.is_empty());
    }

    #[tokio::test]
    async fn test_check_ram_motherboard_incompatible() {
        let result = engine().check_ram_motherboard("6", "3").await;
        assert!(!result.is_compatible);
    }

    #[tokio::test]
    async fn test_check_full_build_uses_one_snapshot() {
        let build = BuildRequest::new()
            .with_cpu("1")
            .with_motherboard("3")
            .with_ram("5");
        let result = engine().check_full_build(&build).await;
        assert!(result.is_compatible);
        assert_eq!(result.message.lines().count(), 2);
    }
}
