//! RepoHost trait definition.
//!
//! The seam between the analysis/search logic and the code-hosting
//! platform's REST API. Three independent read-only operations; the
//! concrete GitHub implementation lives in nyaya-infra.

use nyaya_types::repo::{RepoHostError, RepoRef, RepositoryInfo, SearchOrder, SearchSort};

/// Trait for read-only code-host backends.
///
/// Every operation is one outbound GET with no retry and no caching;
/// re-analyzing the same repository re-fetches from scratch. `per_page`
/// is passed through untouched -- clamping is a presentation-layer duty.
pub trait RepoHost: Send + Sync {
    /// Human-readable host name (e.g., "github").
    fn name(&self) -> &str;

    /// Search repositories matching a free-text query.
    fn search_repositories(
        &self,
        query: &str,
        sort: SearchSort,
        order: SearchOrder,
        per_page: u8,
    ) -> impl std::future::Future<Output = Result<Vec<RepositoryInfo>, RepoHostError>> + Send;

    /// Fetch metadata for one repository.
    fn get_repository(
        &self,
        repo: &RepoRef,
    ) -> impl std::future::Future<Output = Result<RepositoryInfo, RepoHostError>> + Send;

    /// Fetch the repository README as raw text.
    fn get_readme(
        &self,
        repo: &RepoRef,
    ) -> impl std::future::Future<Output = Result<String, RepoHostError>> + Send;
}
