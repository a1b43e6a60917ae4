//! Octocrab implementation of the pull request and activity gateways.

use async_trait::async_trait;
use http::{StatusCode, Uri};
use octocrab::{Octocrab, Page};
use serde_json::json;
use url::form_urlencoded;

use crate::github::error::GreeterError;
use crate::github::locator::{PersonalAccessToken, RepositoryLocator};
use crate::github::models::{
    ActivityItem, ActivityPage, ApiIssue, ApiLabel, ApiPullRequestSummary, ApiReview,
    PullRequestSummary,
};
use crate::github::pagination::PageInfo;
use crate::github::rate_limit::RateLimitInfo;

use super::client::build_octocrab_client;
use super::error_mapping::{is_rate_limit_error, map_octocrab_error, rate_limit_error};
use super::types::{ACTIVITY_PAGE_SIZE, PULL_REQUEST_PAGE_SIZE, PaginatedPullRequests};
use super::{ActivityGateway, PullRequestGateway};

const LIST_PULLS: &str = "list pulls";
const LIST_ACTIVITY: &str = "list activity";
const CREATE_REVIEW: &str = "create review";
const ADD_LABELS: &str = "add labels";

/// Octocrab-backed gateway shared by the traversal and the classifier.
pub struct OctocrabGateway {
    client: Octocrab,
}

impl OctocrabGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token against the locator's
    /// API base.
    ///
    /// # Errors
    ///
    /// Returns `GreeterError::InvalidUrl` when the base URI cannot be parsed or
    /// `GreeterError::Api` when Octocrab fails to construct a client.
    pub fn for_token(
        token: &PersonalAccessToken,
        locator: &RepositoryLocator,
    ) -> Result<Self, GreeterError> {
        let octocrab = build_octocrab_client(token, locator.api_base())?;
        Ok(Self::new(octocrab))
    }

    async fn map_error(&self, operation: &str, error: &octocrab::Error) -> GreeterError {
        match error {
            octocrab::Error::GitHub { source, .. } if is_rate_limit_error(source) => {
                let rate_limit = self.fetch_rate_limit_info().await;
                rate_limit_error(operation, &source.message, rate_limit)
            }
            _ => map_octocrab_error(operation, error),
        }
    }

    async fn fetch_rate_limit_info(&self) -> Option<RateLimitInfo> {
        let rate = self.client.ratelimit().get().await.ok()?.rate;
        let remaining = u32::try_from(rate.remaining).ok()?;
        Some(RateLimitInfo::new(remaining, rate.reset))
    }
}

fn activity_uri(locator: &RepositoryLocator, creator: &str) -> Result<Uri, GreeterError> {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("creator", creator)
        .append_pair("state", "all")
        .append_pair("sort", "created")
        .append_pair("direction", "asc")
        .append_pair("per_page", &ACTIVITY_PAGE_SIZE.to_string())
        .append_pair("page", "1")
        .finish();

    format!("{path}?{query}", path = locator.issues_path())
        .parse::<Uri>()
        .map_err(|error| GreeterError::InvalidUrl(error.to_string()))
}

#[async_trait]
impl PullRequestGateway for OctocrabGateway {
    async fn list_open_pull_requests(
        &self,
        locator: &RepositoryLocator,
        page: u32,
    ) -> Result<PaginatedPullRequests, GreeterError> {
        let page_str = page.to_string();
        let per_page_str = PULL_REQUEST_PAGE_SIZE.to_string();
        let query_params = [
            ("state", "open"),
            ("sort", "updated"),
            ("direction", "desc"),
            ("per_page", per_page_str.as_str()),
            ("page", page_str.as_str()),
        ];

        let page_result: Page<ApiPullRequestSummary> = match self
            .client
            .get(locator.pulls_path(), Some(&query_params))
            .await
        {
            Ok(page_result) => page_result,
            Err(error) => return Err(self.map_error(LIST_PULLS, &error).await),
        };

        let page_info = PageInfo::new(page, PULL_REQUEST_PAGE_SIZE)
            .with_total_pages(page_result.number_of_pages())
            .with_has_next(page_result.next.is_some());

        let items: Vec<PullRequestSummary> = page_result
            .items
            .into_iter()
            .map(ApiPullRequestSummary::into)
            .collect();

        Ok(PaginatedPullRequests { items, page_info })
    }

    async fn create_review_comment(
        &self,
        locator: &RepositoryLocator,
        number: u64,
        body: &str,
    ) -> Result<(), GreeterError> {
        let payload = json!({ "body": body, "event": "COMMENT" });

        match self
            .client
            .post::<_, ApiReview>(locator.reviews_path(number), Some(&payload))
            .await
        {
            Ok(review) => {
                tracing::debug!(pr = number, review_id = review.id, "review submitted");
                Ok(())
            }
            Err(error) => Err(self.map_error(CREATE_REVIEW, &error).await),
        }
    }

    async fn add_labels(
        &self,
        locator: &RepositoryLocator,
        number: u64,
        labels: &[String],
    ) -> Result<(), GreeterError> {
        let payload = json!({ "labels": labels });

        match self
            .client
            .post::<_, Vec<ApiLabel>>(locator.labels_path(number), Some(&payload))
            .await
        {
            Ok(applied) => {
                tracing::debug!(pr = number, label_count = applied.len(), "labels applied");
                Ok(())
            }
            Err(error) => Err(self.map_error(ADD_LABELS, &error).await),
        }
    }
}

#[async_trait]
impl ActivityGateway for OctocrabGateway {
    async fn list_activity(
        &self,
        locator: &RepositoryLocator,
        creator: &str,
    ) -> Result<ActivityPage, GreeterError> {
        let uri = activity_uri(locator, creator)?;

        let response = match self.client._get(uri).await {
            Ok(response) => response,
            Err(error) => return Err(self.map_error(LIST_ACTIVITY, &error).await),
        };

        let status = response.status();
        if status != StatusCode::OK {
            return Ok(ActivityPage {
                status: status.as_u16(),
                items: Vec::new(),
            });
        }

        let body = self
            .client
            .body_to_string(response)
            .await
            .map_err(|error| GreeterError::Api {
                message: format!("{LIST_ACTIVITY} response decode failed: {error}"),
            })?;

        let issues: Vec<ApiIssue> =
            serde_json::from_str(&body).map_err(|error| GreeterError::Api {
                message: format!("{LIST_ACTIVITY} response deserialisation failed: {error}"),
            })?;

        Ok(ActivityPage {
            status: status.as_u16(),
            items: issues.into_iter().map(ActivityItem::from).collect(),
        })
    }
}
