use crate::compatibility::domain::{reference_catalog, Component};
use crate::ports::outbound::{CatalogFetch, CatalogSource};
use crate::shared::error::CompatError;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Default timeout for catalog requests
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HttpCatalogSource adapter for fetching the component catalog over HTTP.
///
/// Implements the CatalogSource port against `GET <base>/components`. The
/// port contract is fail-soft: any transport error, timeout, non-success
/// status or unparsable payload yields the built-in reference dataset, never
/// an error. The distinction is preserved in the returned `CatalogFetch`.
#[derive(Debug)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogSource {
    /// Creates a catalog source with the default request timeout
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a catalog source with an explicit request timeout.
    /// Timeout expiry behaves exactly like any other fetch failure.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into();
        validate_endpoint(&base_url)?;

        let user_agent = format!("pc-compat/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, base_url })
    }

    fn components_url(&self) -> String {
        format!("{}/components", self.base_url.trim_end_matches('/'))
    }

    async fn fetch_remote(&self) -> Result<Vec<Component>> {
        let response = self.client.get(self.components_url()).send().await?;

        if !response.status().is_success() {
            anyhow::bail!(
                "catalog endpoint returned status code {}",
                response.status()
            );
        }

        let components: Vec<Component> = response.json().await?;
        Ok(components)
    }
}

fn validate_endpoint(url: &str) -> Result<()> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(CompatError::InvalidEndpoint {
            url: url.to_string(),
            reason: "expected an http:// or https:// base URL".to_string(),
        }
        .into());
    }
    Ok(())
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> CatalogFetch {
        match self.fetch_remote().await {
            Ok(components) => CatalogFetch::Fetched(components),
            Err(_) => CatalogFetch::FellBack(reference_catalog()),
        }
    }
}

/// StaticCatalogSource adapter that always serves the reference dataset.
///
/// Used for offline mode and in tests; shares the fallback semantics with
/// the HTTP adapter so verdicts are identical either way.
pub struct StaticCatalogSource;

impl StaticCatalogSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StaticCatalogSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch(&self) -> CatalogFetch {
        CatalogFetch::FellBack(reference_catalog())
    }
}
