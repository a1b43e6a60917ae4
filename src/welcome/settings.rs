//! Validated inputs for one welcome run.

use super::label::MarkerLabel;

/// Settings the traversal needs, already validated by configuration loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeSettings {
    /// Label marking a pull request as already welcomed.
    pub marker_label: MarkerLabel,
    /// Body of the review comment posted on first-time pull requests.
    pub welcome_message: String,
    /// Hard ceiling on remote calls for this run.
    pub operation_budget: u32,
}

impl WelcomeSettings {
    /// Bundles the three run settings.
    #[must_use]
    pub fn new(
        marker_label: MarkerLabel,
        welcome_message: impl Into<String>,
        operation_budget: u32,
    ) -> Self {
        Self {
            marker_label,
            welcome_message: welcome_message.into(),
            operation_budget,
        }
    }
}
