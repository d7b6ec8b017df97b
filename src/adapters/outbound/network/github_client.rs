use crate::ports::outbound::{GitHubRepo, GitHubUser, RepoMetadataClient};
use crate::shared::error::CompatError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const TIMEOUT_SECS: u64 = 10;
const DEFAULT_PER_PAGE: u8 = 10;

/// Search responses wrap the repository list in an items field
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<GitHubRepo>,
}

/// GitHubMetadataClient adapter for the GitHub REST API.
///
/// Implements the RepoMetadataClient port. Pure pass-through lookups: a
/// non-success status maps to `None`, transport and parse failures are
/// errors. No retry, no backoff.
pub struct GitHubMetadataClient {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubMetadataClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let user_agent = format!("pc-compat/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Rejects path separators and URL metacharacters in user-supplied
    /// path segments before they reach a request URL.
    fn validate_path_segment(segment: &str, what: &str) -> Result<()> {
        if segment.is_empty() {
            anyhow::bail!("{} must not be empty", what);
        }
        if segment.contains('/') || segment.contains('\\') || segment.contains("..") {
            anyhow::bail!("{} contains path separators which are not allowed", what);
        }
        if segment.contains('#') || segment.contains('?') || segment.contains('@') {
            anyhow::bail!("{} contains URL-unsafe characters", what);
        }
        Ok(())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let url = self.url(path);
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await
            .map_err(|e| CompatError::MetadataFetch {
                resource: path.to_string(),
                details: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let parsed = response
            .json::<T>()
            .await
            .map_err(|e| CompatError::MetadataFetch {
                resource: path.to_string(),
                details: e.to_string(),
            })?;
        Ok(Some(parsed))
    }
}

#[async_trait]
impl RepoMetadataClient for GitHubMetadataClient {
    async fn user(&self, login: &str) -> Result<Option<GitHubUser>> {
        Self::validate_path_segment(login, "Login")?;
        self.get_json(&format!("users/{}", login)).await
    }

    async fn user_repos(&self, login: &str) -> Result<Option<Vec<GitHubRepo>>> {
        Self::validate_path_segment(login, "Login")?;
        self.get_json(&format!(
            "users/{}/repos?sort=updated&per_page={}",
            login, DEFAULT_PER_PAGE
        ))
        .await
    }

    async fn search_repos(&self, query: &str, per_page: u8) -> Result<Vec<GitHubRepo>> {
        let encoded = urlencoding::encode(query);
        let path = format!(
            "search/repositories?q={}&sort=stars&order=desc&per_page={}",
            encoded, per_page
        );
        let response: Option<SearchResponse> = self.get_json(&path).await?;
        Ok(response.map(|r| r.items).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = GitHubMetadataClient::new("https://api.github.com/").unwrap();
        assert_eq!(
            client.url("users/octocat"),
            "https://api.github.com/users/octocat"
        );
    }

    #[test]
    fn test_validate_path_segment_rejects_separators() {
        assert!(GitHubMetadataClient::validate_path_segment("octo/cat", "Login").is_err());
        assert!(GitHubMetadataClient::validate_path_segment("..", "Login").is_err());
        assert!(GitHubMetadataClient::validate_path_segment("octo?cat", "Login").is_err());
        assert!(GitHubMetadataClient::validate_path_segment("", "Login").is_err());
        assert!(GitHubMetadataClient::validate_path_segment("octocat", "Login").is_ok());
    }

    #[test]
    fn test_search_response_parses_items() {
        let json = r#"{"total_count": 1, "items": [{
            "name": "linguist",
            "full_name": "github/linguist",
            "html_url": "https://github.com/github/linguist",
            "stargazers_count": 11000
        }]}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].stars, 11000);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_metadata_error() {
        let client = GitHubMetadataClient::new("http://127.0.0.1:9").unwrap();
        let result = client.user("octocat").await;
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("users/octocat"));
    }
}
