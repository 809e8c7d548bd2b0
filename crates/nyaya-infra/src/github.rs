//! GitHub REST client -- concrete [`RepoHost`] implementation.
//!
//! Three independent read-only GETs against the GitHub v3 API:
//! repository search, repository metadata, and raw README text. Each
//! call attaches an optional bearer token, maps non-2xx statuses to a
//! typed [`RepoHostError`], and never retries or caches.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::debug;

use nyaya_core::repohost::RepoHost;
use nyaya_types::repo::{RepoHostError, RepoRef, RepositoryInfo, SearchOrder, SearchSort};

/// GitHub API base URL.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Media type that makes the readme endpoint return raw text.
const RAW_README_MEDIA_TYPE: &str = "application/vnd.github.raw+json";

/// Read-only GitHub REST client.
///
/// GitHub rejects requests without a User-Agent, so the client always
/// sends one. The token is optional; unauthenticated calls work at a
/// lower rate limit.
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<SecretString>,
}

impl GitHubClient {
    /// Create a new client, optionally bearer-authenticated.
    pub fn new(token: Option<SecretString>) -> Self {
        let http = reqwest::Client::builder()
            .user_agent("nyaya/0.1")
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: GITHUB_API_BASE.to_string(),
            token,
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http.get(url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token.expose_secret());
        }
        builder
    }

    /// Issue the request and map non-2xx statuses to typed errors.
    async fn send(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, RepoHostError> {
        let response = builder
            .send()
            .await
            .map_err(|e| RepoHostError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(match status.as_u16() {
            404 => RepoHostError::NotFound,
            401 => RepoHostError::AuthenticationFailed,
            // GitHub signals rate limiting with 403 as well as 429
            403 | 429 => RepoHostError::RateLimited,
            code => RepoHostError::Api {
                status: code,
                message,
            },
        })
    }
}

impl RepoHost for GitHubClient {
    fn name(&self) -> &str {
        "github"
    }

    async fn search_repositories(
        &self,
        query: &str,
        sort: SearchSort,
        order: SearchOrder,
        per_page: u8,
    ) -> Result<Vec<RepositoryInfo>, RepoHostError> {
        let url = format!("{}/search/repositories", self.base_url);
        debug!(query, %sort, %order, per_page, "Searching repositories");

        let sort_param = sort.to_string();
        let order_param = order.to_string();
        let per_page_param = per_page.to_string();
        let params = [
            ("q", query),
            ("sort", sort_param.as_str()),
            ("order", order_param.as_str()),
            ("per_page", per_page_param.as_str()),
        ];

        let response = self.send(self.get(&url).query(&params)).await?;
        let parsed: SearchRepositoriesResponse = response
            .json()
            .await
            .map_err(|e| RepoHostError::Deserialization(e.to_string()))?;

        Ok(parsed.items.into_iter().map(RepositoryInfo::from).collect())
    }

    async fn get_repository(&self, repo: &RepoRef) -> Result<RepositoryInfo, RepoHostError> {
        let url = format!("{}/repos/{}/{}", self.base_url, repo.owner, repo.name);
        debug!(repo = %repo, "Fetching repository metadata");

        let response = self.send(self.get(&url)).await?;
        let parsed: GitHubRepo = response
            .json()
            .await
            .map_err(|e| RepoHostError::Deserialization(e.to_string()))?;

        Ok(parsed.into())
    }

    async fn get_readme(&self, repo: &RepoRef) -> Result<String, RepoHostError> {
        let url = format!(
            "{}/repos/{}/{}/readme",
            self.base_url, repo.owner, repo.name
        );
        debug!(repo = %repo, "Fetching README");

        let response = self
            .send(
                self.get(&url)
                    .header(reqwest::header::ACCEPT, RAW_README_MEDIA_TYPE),
            )
            .await?;

        response
            .text()
            .await
            .map_err(|e| RepoHostError::Transport(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// GitHub API wire types
// ---------------------------------------------------------------------------

/// Response from the repository search endpoint.
#[derive(Debug, Deserialize)]
struct SearchRepositoriesResponse {
    items: Vec<GitHubRepo>,
}

/// Repository object as returned by search and `/repos/{owner}/{repo}`.
#[derive(Debug, Deserialize)]
struct GitHubRepo {
    full_name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    forks_count: u64,
    #[serde(default)]
    open_issues_count: u64,
}

impl From<GitHubRepo> for RepositoryInfo {
    fn from(repo: GitHubRepo) -> Self {
        Self {
            full_name: repo.full_name,
            description: repo.description,
            language: repo.language,
            star_count: repo.stargazers_count,
            fork_count: repo.forks_count,
            open_issue_count: repo.open_issues_count,
        }
    }
}
