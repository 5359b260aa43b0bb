//! Queries against the service that hosts the repository and its releases.

use crate::error::Result;
use crate::http::{create_client, get_json};
use log::debug;
use serde::Deserialize;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
const SERVICE: &str = "GitHub";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryInfo {
    pub default_branch: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Release {
    pub tag_name: String,
}

#[allow(async_fn_in_trait)]
pub trait ReleaseHost {
    /// Repository metadata for `owner/repo`.
    async fn repository(&self, slug: &str) -> Result<RepositoryInfo>;
    /// The most recent published release of `owner/repo`.
    async fn latest_release(&self, slug: &str) -> Result<Release>;
}

pub struct GitHubClient {
    client: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(api_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        Ok(GitHubClient {
            client: create_client(SERVICE)?,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        })
    }

    fn repository_url(&self, slug: &str) -> String {
        format!("{}/repos/{}", self.api_url, slug)
    }

    fn latest_release_url(&self, slug: &str) -> String {
        format!("{}/repos/{}/releases/latest", self.api_url, slug)
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json");
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

impl ReleaseHost for GitHubClient {
    async fn repository(&self, slug: &str) -> Result<RepositoryInfo> {
        let url = self.repository_url(slug);
        debug!("Fetching repository info: {}", url);
        get_json(SERVICE, self.get(&url)).await
    }

    async fn latest_release(&self, slug: &str) -> Result<Release> {
        let url = self.latest_release_url(slug);
        debug!("Fetching latest release: {}", url);
        get_json(SERVICE, self.get(&url)).await
    }
}
