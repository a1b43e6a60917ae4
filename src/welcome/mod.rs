//! The welcome flow: traversal, classification and the marker label.
//!
//! [`WelcomeTraversal`] walks open pull requests within an operation budget,
//! asks [`ContributorClassifier`] about every unlabelled one, and welcomes
//! first-time contributors with a review comment plus the [`MarkerLabel`].
//! The label is the only record of past runs.

pub mod classifier;
pub mod label;
pub mod settings;
pub mod traversal;

pub use classifier::{CONSERVATIVE_HISTORY_LIMIT, Classification, ContributorClassifier};
pub use label::MarkerLabel;
pub use settings::WelcomeSettings;
pub use traversal::{
    CLASSIFY_COST, PAGE_COST, SAFETY_FLOOR, StopReason, TraversalReport, WELCOME_COST,
    WelcomeTraversal,
};
