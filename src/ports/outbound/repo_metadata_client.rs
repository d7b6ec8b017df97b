use crate::shared::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A GitHub account, reduced to the fields the CLI displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
}

/// A GitHub repository, reduced to the fields the CLI displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, rename = "stargazers_count")]
    pub stars: u64,
    #[serde(default, rename = "forks_count")]
    pub forks: u64,
    #[serde(default, rename = "open_issues_count")]
    pub open_issues: u64,
}

/// RepoMetadataClient port for GitHub lookups.
///
/// A missing resource (404 and other non-success statuses) is `Ok(None)`,
/// matching GitHub's behavior for unknown users; transport and parse
/// failures are errors. No retry, no backoff.
#[async_trait]
pub trait RepoMetadataClient: Send + Sync {
    async fn user(&self, login: &str) -> Result<Option<GitHubUser>>;

    /// The user's most recently updated repositories, newest first.
    async fn user_repos(&self, login: &str) -> Result<Option<Vec<GitHubRepo>>>;

    /// Repository search ordered by stars, descending.
    async fn search_repos(&self, query: &str, per_page: u8) -> Result<Vec<GitHubRepo>>;
}
