//! Gateways for talking to GitHub through Octocrab.
//!
//! The welcome flow only depends on the traits below so that tests can swap
//! in `mockall` doubles; [`OctocrabGateway`] implements both over HTTP.

mod client;
mod error_mapping;
mod octocrab_gateway;
mod types;

pub use octocrab_gateway::OctocrabGateway;
pub use types::{ACTIVITY_PAGE_SIZE, PULL_REQUEST_PAGE_SIZE, PaginatedPullRequests};

use async_trait::async_trait;

use crate::github::error::GreeterError;
use crate::github::locator::RepositoryLocator;
use crate::github::models::ActivityPage;

/// Pull request listing and the two welcome mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PullRequestGateway: Send + Sync {
    /// Fetch one page of open pull requests, most recently updated first.
    async fn list_open_pull_requests(
        &self,
        locator: &RepositoryLocator,
        page: u32,
    ) -> Result<PaginatedPullRequests, GreeterError>;

    /// Submit a `COMMENT` review with the given body.
    async fn create_review_comment(
        &self,
        locator: &RepositoryLocator,
        number: u64,
        body: &str,
    ) -> Result<(), GreeterError>;

    /// Add labels to the issue backing a pull request.
    async fn add_labels(
        &self,
        locator: &RepositoryLocator,
        number: u64,
        labels: &[String],
    ) -> Result<(), GreeterError>;
}

/// Lookup of everything a contributor has opened in a repository.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityGateway: Send + Sync {
    /// Fetch the first page of issues and pull requests created by
    /// `creator`, in any state, oldest first.
    async fn list_activity(
        &self,
        locator: &RepositoryLocator,
        creator: &str,
    ) -> Result<ActivityPage, GreeterError>;
}
