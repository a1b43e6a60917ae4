//! Greeter library crate: welcomes first-time contributors on GitHub.
//!
//! A run walks a repository's open pull requests newest-updated first,
//! spending a fixed budget of API calls. Pull requests from first-time
//! contributors receive a review comment and a marker label; the label is
//! the only state carried between runs, so repeated runs never welcome the
//! same pull request twice.

pub mod config;
pub mod github;
pub mod welcome;

pub use config::GreeterConfig;
pub use github::{
    ActivityGateway, GreeterError, OctocrabGateway, PersonalAccessToken, PullRequestGateway,
    RepositoryLocator,
};
pub use welcome::{
    Classification, ContributorClassifier, MarkerLabel, StopReason, TraversalReport,
    WelcomeSettings, WelcomeTraversal,
};
