//! First-time contributor detection from one page of activity.
//!
//! The classifier only ever reads the first page of a contributor's issues
//! and pull requests. When that page cannot prove the absence of an earlier
//! pull request it answers "not first-time": a missed welcome is acceptable,
//! welcoming a returning contributor is not.

use crate::github::error::GreeterError;
use crate::github::gateway::ActivityGateway;
use crate::github::locator::RepositoryLocator;

/// Activity pages with more items than this are treated as prior history.
pub const CONSERVATIVE_HISTORY_LIMIT: usize = 10;

const SUCCESS_STATUS: u16 = 200;

/// Outcome of classifying one pull request author.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// No earlier pull request and a short history.
    FirstContribution,
    /// The author opened this earlier pull request.
    PriorPullRequest(u64),
    /// The history page is too long to rule out an earlier pull request.
    ExtensiveHistory(usize),
}

impl Classification {
    /// True only for [`Classification::FirstContribution`].
    #[must_use]
    pub const fn is_first_contribution(self) -> bool {
        matches!(self, Self::FirstContribution)
    }
}

/// Decides whether a pull request is its author's first contribution.
pub struct ContributorClassifier<'client, Gateway>
where
    Gateway: ActivityGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> ContributorClassifier<'client, Gateway>
where
    Gateway: ActivityGateway,
{
    /// Create a classifier over the given activity gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Classify `author` as the opener of pull request `number`.
    ///
    /// Issues one activity lookup. The pull request being evaluated shows up
    /// in its own author's history but never counts as earlier, since only
    /// numbers strictly below `number` are considered.
    ///
    /// # Errors
    ///
    /// Returns [`GreeterError::UnexpectedStatus`] when the lookup does not
    /// report `200 OK`, and propagates any gateway failure.
    pub async fn classify(
        &self,
        locator: &RepositoryLocator,
        author: &str,
        number: u64,
    ) -> Result<Classification, GreeterError> {
        let page = self.client.list_activity(locator, author).await?;

        if page.status != SUCCESS_STATUS {
            return Err(GreeterError::UnexpectedStatus {
                operation: "list activity".to_owned(),
                status: page.status,
            });
        }

        if let Some(prior) = page
            .items
            .iter()
            .find(|item| item.is_pull_request && item.number < number)
        {
            tracing::info!(
                pr = number,
                author,
                prior_pr = prior.number,
                "skipping pr #{number} because author {author} has created pr #{} in the past",
                prior.number
            );
            return Ok(Classification::PriorPullRequest(prior.number));
        }

        let history = page.items.len();
        if history > CONSERVATIVE_HISTORY_LIMIT {
            tracing::info!(
                pr = number,
                author,
                history,
                "skipping pr #{number} because author {author} has more than \
                 {CONSERVATIVE_HISTORY_LIMIT} issues or prs, assuming a returning contributor"
            );
            return Ok(Classification::ExtensiveHistory(history));
        }

        Ok(Classification::FirstContribution)
    }

    /// Returns true when `number` is `author`'s first contribution.
    ///
    /// # Errors
    ///
    /// See [`ContributorClassifier::classify`].
    pub async fn is_first_contribution(
        &self,
        locator: &RepositoryLocator,
        author: &str,
        number: u64,
    ) -> Result<bool, GreeterError> {
        self.classify(locator, author, number)
            .await
            .map(Classification::is_first_contribution)
    }
}
