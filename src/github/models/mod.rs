//! Data models for pull requests and contributor activity.
//!
//! Types prefixed with `Api` are internal deserialisation targets that
//! convert into the public domain types consumed by the welcome flow.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Open pull request as seen by the traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestSummary {
    /// Pull request number.
    pub number: u64,
    /// Title of the pull request.
    pub title: Option<String>,
    /// Author login if the account still exists.
    pub author: Option<String>,
    /// Names of the labels currently applied.
    pub labels: Vec<String>,
    /// Last update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

impl PullRequestSummary {
    /// Creates a summary with the given number and author and no labels.
    #[must_use]
    pub fn new(number: u64, author: &str) -> Self {
        Self {
            number,
            author: Some(author.to_owned()),
            ..Self::default()
        }
    }

    /// Replaces the label set.
    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Title for log lines, falling back to a placeholder.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("untitled pull request")
    }
}

/// Issue or pull request opened by a contributor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityItem {
    /// Issue or pull request number; both share one sequence per repository.
    pub number: u64,
    /// True when the item is a pull request rather than a plain issue.
    pub is_pull_request: bool,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

impl ActivityItem {
    /// Creates a pull request activity item.
    #[must_use]
    pub const fn pull_request(number: u64) -> Self {
        Self {
            number,
            is_pull_request: true,
            created_at: None,
        }
    }

    /// Creates a plain issue activity item.
    #[must_use]
    pub const fn issue(number: u64) -> Self {
        Self {
            number,
            is_pull_request: false,
            created_at: None,
        }
    }
}

/// First page of a contributor's activity together with the response status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityPage {
    /// HTTP status code reported by GitHub.
    pub status: u16,
    /// Items ordered by creation time, oldest first.
    pub items: Vec<ActivityItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUser {
    pub(crate) login: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiLabel {
    pub(crate) name: String,
}

/// API response type for the pull request listing.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiPullRequestSummary {
    pub(crate) number: u64,
    pub(crate) title: Option<String>,
    pub(crate) user: Option<ApiUser>,
    #[serde(default)]
    pub(crate) labels: Vec<ApiLabel>,
    pub(crate) updated_at: Option<DateTime<Utc>>,
}

/// API response type for the issue listing.
///
/// GitHub marks pull requests in the issue listing with a `pull_request`
/// object; plain issues omit it.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiIssue {
    pub(crate) number: u64,
    #[serde(default)]
    pub(crate) pull_request: Option<serde_json::Value>,
    pub(crate) created_at: Option<DateTime<Utc>>,
}

/// API response type for a submitted review.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiReview {
    pub(crate) id: u64,
}

impl From<ApiPullRequestSummary> for PullRequestSummary {
    fn from(value: ApiPullRequestSummary) -> Self {
        Self {
            number: value.number,
            title: value.title,
            author: value.user.and_then(|user| user.login),
            labels: value.labels.into_iter().map(|label| label.name).collect(),
            updated_at: value.updated_at,
        }
    }
}

impl From<ApiIssue> for ActivityItem {
    fn from(value: ApiIssue) -> Self {
        Self {
            number: value.number,
            is_pull_request: value
                .pull_request
                .is_some_and(|marker| !marker.is_null()),
            created_at: value.created_at,
        }
    }
}
