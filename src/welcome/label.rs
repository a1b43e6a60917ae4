//! Marker label used as the cross-run "already welcomed" flag.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::github::error::GreeterError;

/// Label that marks a pull request as handled.
///
/// Comparison ignores case and accents, so `Première-Fois` matches
/// `premiere-fois`.
///
/// # Example
///
/// ```
/// use greeter::MarkerLabel;
///
/// let marker = MarkerLabel::new("first-time").expect("label should be valid");
/// assert!(marker.matches("First-Time"));
/// assert!(!marker.matches("first-timer"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerLabel {
    name: String,
    folded: String,
}

impl MarkerLabel {
    /// Creates a marker label, rejecting blank names.
    ///
    /// # Errors
    ///
    /// Returns [`GreeterError::Configuration`] when the name is empty or only
    /// whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, GreeterError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GreeterError::configuration("pr_label must not be blank"));
        }
        let folded = fold(&name);
        Ok(Self { name, folded })
    }

    /// The label name as configured; this is what gets applied.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when `candidate` names the same label.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        fold(candidate) == self.folded
    }

    /// True when any of `labels` names the marker.
    #[must_use]
    pub fn is_present_in(&self, labels: &[String]) -> bool {
        labels.iter().any(|label| self.matches(label))
    }
}

fn fold(value: &str) -> String {
    value
        .nfd()
        .filter(|character| !is_combining_mark(*character))
        .flat_map(char::to_lowercase)
        .collect()
}
