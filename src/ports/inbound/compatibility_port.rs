use crate::compatibility::domain::{BuildRequest, CompatibilityResult};
use crate::ports::outbound::CatalogFetch;
use async_trait::async_trait;

/// CompatibilityPort - Inbound port for the compatibility engine.
///
/// This is the sole surface the CLI (or any future presentation layer)
/// calls. None of the operations can fail: lookup misses and catalog
/// unavailability surface as verdicts, never as errors.
#[async_trait]
pub trait CompatibilityPort {
    /// The flat catalog list, exposed as fetched, for display purposes.
    async fn components(&self) -> CatalogFetch;

    /// Checks one CPU against one motherboard by id.
    async fn check_cpu_motherboard(&self, cpu_id: &str, motherboard_id: &str)
        -> CompatibilityResult;

    /// Checks one RAM module against one motherboard by id.
    async fn check_ram_motherboard(&self, ram_id: &str, motherboard_id: &str)
        -> CompatibilityResult;

    /// Evaluates every filled pair of a build request and composes one
    /// verdict with itemized issues.
    async fn check_full_build(&self, build: &BuildRequest) -> CompatibilityResult;
}
