/// Network adapters for external API calls
mod caching_catalog;
mod catalog_client;
mod github_client;
mod ollama_client;

pub use caching_catalog::CachingCatalogSource;
pub use catalog_client::{HttpCatalogSource, StaticCatalogSource};
pub use github_client::GitHubMetadataClient;
pub use ollama_client::OllamaAdviceClient;
