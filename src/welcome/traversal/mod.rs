//! Budgeted walk over a repository's open pull requests.
//!
//! Pages are fetched newest-updated first. Every remote call is charged
//! against a single operation budget, and the walk stops as soon as the
//! remaining budget falls under [`SAFETY_FLOOR`], leaving whatever is left
//! for the next scheduled run.

use crate::github::error::GreeterError;
use crate::github::gateway::{ActivityGateway, PullRequestGateway};
use crate::github::locator::RepositoryLocator;
use crate::github::models::PullRequestSummary;

use super::classifier::ContributorClassifier;
use super::settings::WelcomeSettings;

/// Remaining budget below which the walk stops.
pub const SAFETY_FLOOR: u32 = 3;
/// Cost of fetching one page of pull requests.
pub const PAGE_COST: u32 = 1;
/// Cost of classifying one author.
pub const CLASSIFY_COST: u32 = 1;
/// Cost of the review comment plus the marker label.
pub const WELCOME_COST: u32 = 2;

const FIRST_PAGE: u32 = 1;

/// Why a traversal finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// An empty page was reached.
    Exhausted,
    /// The budget hit exactly zero after a page fetch.
    BudgetDepleted,
    /// The budget fell under the safety floor mid-walk.
    BudgetTruncated,
}

/// Outcome of one traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalReport {
    /// Budget left on natural termination, or `0` when truncated.
    pub operations_left: u32,
    /// Why the walk ended.
    pub stop: StopReason,
    /// Pull requests that received a welcome, in visit order.
    pub welcomed: Vec<u64>,
}

impl TraversalReport {
    const fn finished(operations_left: u32, stop: StopReason, welcomed: Vec<u64>) -> Self {
        Self {
            operations_left,
            stop,
            welcomed,
        }
    }

    const fn truncated(welcomed: Vec<u64>) -> Self {
        Self::finished(0, StopReason::BudgetTruncated, welcomed)
    }
}

enum ItemOutcome {
    Continue,
    Truncate,
}

/// Walks open pull requests and welcomes first-time contributors.
///
/// # Example
///
/// ```no_run
/// use greeter::{
///     MarkerLabel, OctocrabGateway, PersonalAccessToken, RepositoryLocator, WelcomeSettings,
///     WelcomeTraversal,
/// };
///
/// # async fn run() -> Result<(), greeter::GreeterError> {
/// let locator = RepositoryLocator::from_slug("octo/repo", None)?;
/// let token = PersonalAccessToken::new("ghp_example")?;
/// let gateway = OctocrabGateway::for_token(&token, &locator)?;
/// let settings = WelcomeSettings::new(MarkerLabel::new("first-time")?, "Welcome!", 100);
///
/// let report = WelcomeTraversal::new(&gateway, &gateway, &settings)
///     .traverse(&locator)
///     .await?;
/// println!("{} operations left", report.operations_left);
/// # Ok(())
/// # }
/// ```
pub struct WelcomeTraversal<'a, Pulls, Activity>
where
    Pulls: PullRequestGateway,
    Activity: ActivityGateway,
{
    pulls: &'a Pulls,
    classifier: ContributorClassifier<'a, Activity>,
    settings: &'a WelcomeSettings,
}

impl<'a, Pulls, Activity> WelcomeTraversal<'a, Pulls, Activity>
where
    Pulls: PullRequestGateway,
    Activity: ActivityGateway,
{
    /// Creates a traversal over the given gateways.
    #[must_use]
    pub const fn new(
        pulls: &'a Pulls,
        activity: &'a Activity,
        settings: &'a WelcomeSettings,
    ) -> Self {
        Self {
            pulls,
            classifier: ContributorClassifier::new(activity),
            settings,
        }
    }

    /// Runs one traversal starting from the configured budget.
    ///
    /// The first page is always fetched. Later pages are only fetched while
    /// the budget is at or above [`SAFETY_FLOOR`].
    ///
    /// # Errors
    ///
    /// Any gateway or classifier failure aborts the walk and is returned
    /// unchanged; pull requests already welcomed stay welcomed.
    pub async fn traverse(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<TraversalReport, GreeterError> {
        let mut budget = self.settings.operation_budget;
        let mut welcomed = Vec::new();
        let mut page = FIRST_PAGE;

        loop {
            if page > FIRST_PAGE && budget < SAFETY_FLOOR {
                tracing::warn!(
                    page,
                    operations_left = budget,
                    "budget below safety floor before fetching page {page}, exiting to avoid rate limit"
                );
                return Ok(TraversalReport::truncated(welcomed));
            }

            let listing = self.pulls.list_open_pull_requests(locator, page).await?;
            budget = budget.saturating_sub(PAGE_COST);
            tracing::debug!(
                page,
                items = listing.items.len(),
                total_pages = ?listing.page_info.total_pages(),
                last_page = listing.page_info.is_last_page(),
                operations_left = budget,
                "fetched open pull requests"
            );

            if listing.items.is_empty() {
                tracing::info!(page, operations_left = budget, "no more open pull requests");
                return Ok(TraversalReport::finished(
                    budget,
                    StopReason::Exhausted,
                    welcomed,
                ));
            }
            if budget == 0 {
                tracing::warn!(page, "operation budget spent after fetching page {page}");
                return Ok(TraversalReport::finished(
                    0,
                    StopReason::BudgetDepleted,
                    welcomed,
                ));
            }

            for pull_request in &listing.items {
                let outcome = self
                    .visit(locator, pull_request, &mut budget, &mut welcomed)
                    .await?;
                if matches!(outcome, ItemOutcome::Truncate) {
                    return Ok(TraversalReport::truncated(welcomed));
                }
            }

            page += 1;
        }
    }

    async fn visit(
        &self,
        locator: &RepositoryLocator,
        pull_request: &PullRequestSummary,
        budget: &mut u32,
        welcomed: &mut Vec<u64>,
    ) -> Result<ItemOutcome, GreeterError> {
        let number = pull_request.number;
        tracing::info!(pr = number, "found pr #{number}: {}", pull_request.display_title());

        let marker = &self.settings.marker_label;
        if marker.is_present_in(&pull_request.labels) {
            tracing::info!(
                pr = number,
                label = marker.name(),
                "skipping pr #{number} because it already has label {}",
                marker.name()
            );
            return Ok(ItemOutcome::Continue);
        }

        let Some(author) = pull_request.author.as_deref() else {
            tracing::info!(pr = number, "skipping pr #{number} because it has no author");
            return Ok(ItemOutcome::Continue);
        };

        if *budget < SAFETY_FLOOR {
            tracing::warn!(
                pr = number,
                operations_left = *budget,
                "budget below safety floor before classifying pr #{number}, exiting to avoid rate limit"
            );
            return Ok(ItemOutcome::Truncate);
        }

        let first_time = self
            .classifier
            .is_first_contribution(locator, author, number)
            .await?;

        if first_time {
            self.welcome(locator, number, author).await?;
            *budget = budget.saturating_sub(WELCOME_COST);
            welcomed.push(number);
        }
        *budget = budget.saturating_sub(CLASSIFY_COST);

        if *budget < SAFETY_FLOOR {
            let performed = self.settings.operation_budget.saturating_sub(*budget);
            tracing::warn!(
                operations_left = *budget,
                "performed {performed} operations, exiting to avoid rate limit"
            );
            return Ok(ItemOutcome::Truncate);
        }

        Ok(ItemOutcome::Continue)
    }

    async fn welcome(
        &self,
        locator: &RepositoryLocator,
        number: u64,
        author: &str,
    ) -> Result<(), GreeterError> {
        self.pulls
            .create_review_comment(locator, number, &self.settings.welcome_message)
            .await?;
        tracing::info!(pr = number, author, "posted welcome comment on pr #{number}");

        let label = self.settings.marker_label.name();
        self.pulls
            .add_labels(locator, number, &[label.to_owned()])
            .await?;
        tracing::info!(pr = number, label, "marked pr #{number} with label {label}");
        Ok(())
    }
}
