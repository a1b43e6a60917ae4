//! Public types for gateway operations.

use crate::github::models::PullRequestSummary;
use crate::github::pagination::PageInfo;

/// Page size used when listing open pull requests.
pub const PULL_REQUEST_PAGE_SIZE: u8 = 100;

/// Page size used when listing a contributor's activity.
///
/// Only one page is ever fetched; the classifier's bailout threshold is
/// tuned against this value.
pub const ACTIVITY_PAGE_SIZE: u8 = 100;

/// One page of open pull requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatedPullRequests {
    /// Pull request summaries on this page, in the order GitHub returned them.
    pub items: Vec<PullRequestSummary>,
    /// Pagination state.
    pub page_info: PageInfo,
}

impl PaginatedPullRequests {
    /// Builds a page from its items, marking it as the last known page.
    #[must_use]
    pub fn from_items(page: u32, items: Vec<PullRequestSummary>) -> Self {
        Self {
            items,
            page_info: PageInfo::new(page, PULL_REQUEST_PAGE_SIZE),
        }
    }
}
