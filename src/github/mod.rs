//! GitHub access for the greeter.
//!
//! This module wraps Octocrab behind small gateway traits: listing open pull
//! requests, looking up a contributor's history, submitting a review comment
//! and adding labels. Errors are mapped into [`GreeterError`] variants so the
//! caller can report precise failures without exposing Octocrab internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod pagination;
pub mod rate_limit;

pub use error::GreeterError;
pub use gateway::{
    ACTIVITY_PAGE_SIZE, ActivityGateway, OctocrabGateway, PULL_REQUEST_PAGE_SIZE,
    PaginatedPullRequests, PullRequestGateway,
};
pub use locator::{PersonalAccessToken, RepositoryLocator, RepositoryName, RepositoryOwner};
pub use models::{ActivityItem, ActivityPage, PullRequestSummary};
pub use pagination::PageInfo;
pub use rate_limit::RateLimitInfo;

#[cfg(test)]
pub use gateway::{MockActivityGateway, MockPullRequestGateway};
