//! Code-host repository types for Nyaya.
//!
//! [`RepoRef`] identifies a repository and carries the structural URL
//! check that must pass before any network call. [`RepositoryInfo`] and
//! [`RepositorySummary`] are read-only projections of the code host's
//! responses -- never persisted.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Host literal accepted by [`RepoRef::from_url`].
pub const GITHUB_HOST: &str = "github.com";

/// Owner/name pair identifying a repository on the code host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse a repository URL, rejecting malformed input before any
    /// network call is made.
    ///
    /// Structural check: split on `/`, require at least 5 segments
    /// (`scheme:`, empty, host, owner, name) and the host literal
    /// [`GITHUB_HOST`]. A trailing `.git` on the name is stripped.
    pub fn from_url(url: &str) -> Result<Self, RepoUrlError> {
        let trimmed = url.trim().trim_end_matches('/');
        let parts: Vec<&str> = trimmed.split('/').collect();

        if parts.len() < 5 {
            return Err(RepoUrlError::TooFewSegments(url.trim().to_string()));
        }

        let host = parts[2].to_lowercase();
        if host != GITHUB_HOST {
            return Err(RepoUrlError::WrongHost(parts[2].to_string()));
        }

        let owner = parts[3];
        let name = parts[4].trim_end_matches(".git");
        if owner.is_empty() || name.is_empty() {
            return Err(RepoUrlError::EmptyComponent(url.trim().to_string()));
        }

        Ok(Self::new(owner, name))
    }

    /// The `owner/name` form used by the REST API.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Structural rejection of a repository URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepoUrlError {
    #[error("repository URL has too few path segments: '{0}'")]
    TooFewSegments(String),

    #[error("host '{0}' is not {GITHUB_HOST}")]
    WrongHost(String),

    #[error("repository URL has an empty owner or name: '{0}'")]
    EmptyComponent(String),
}

/// Sort field for repository search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchSort {
    Stars,
    Forks,
    Updated,
}

impl fmt::Display for SearchSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchSort::Stars => write!(f, "stars"),
            SearchSort::Forks => write!(f, "forks"),
            SearchSort::Updated => write!(f, "updated"),
        }
    }
}

impl FromStr for SearchSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stars" => Ok(SearchSort::Stars),
            "forks" => Ok(SearchSort::Forks),
            "updated" => Ok(SearchSort::Updated),
            other => Err(format!("invalid sort field: '{other}'")),
        }
    }
}

/// Result ordering for repository search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchOrder {
    Desc,
    Asc,
}

impl fmt::Display for SearchOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOrder::Desc => write!(f, "desc"),
            SearchOrder::Asc => write!(f, "asc"),
        }
    }
}

impl FromStr for SearchOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "desc" => Ok(SearchOrder::Desc),
            "asc" => Ok(SearchOrder::Asc),
            other => Err(format!("invalid sort order: '{other}'")),
        }
    }
}

/// Repository metadata as returned by the code host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryInfo {
    pub full_name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub star_count: u64,
    pub fork_count: u64,
    pub open_issue_count: u64,
}

/// Metadata plus a truncated README excerpt, ready for analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub full_name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub star_count: u64,
    pub fork_count: u64,
    pub open_issue_count: u64,
    pub readme_excerpt: String,
}

/// Errors from code-host operations.
#[derive(Debug, thiserror::Error)]
pub enum RepoHostError {
    #[error("repository not found")]
    NotFound,

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("rate limited by the code host")]
    RateLimited,

    #[error("code host returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}
