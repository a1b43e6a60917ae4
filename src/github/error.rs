//! Error types exposed by the greeter.

use thiserror::Error;

use super::rate_limit::RateLimitInfo;

/// Errors surfaced while loading configuration or communicating with GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GreeterError {
    /// Configuration could not be loaded or failed validation.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The authentication token was missing.
    #[error("personal access token is required")]
    MissingToken,

    /// The repository identifier is not of the form `owner/repo`.
    #[error("repository must be given as owner/repo: {0}")]
    InvalidRepository(String),

    /// A URL could not be parsed.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Rate limit exceeded - the API returned 403/429 with a rate limit message.
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Rate limit info if it could be fetched after the failure.
        rate_limit: Option<RateLimitInfo>,
        /// Error message from GitHub.
        message: String,
    },

    /// A call completed but did not report `200 OK`.
    #[error("{operation} received unexpected API status code {status}")]
    UnexpectedStatus {
        /// Name of the remote operation.
        operation: String,
        /// HTTP status code returned by GitHub.
        status: u16,
    },
}

impl GreeterError {
    /// Creates a configuration error from any displayable message.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::GreeterError;

    #[rstest]
    #[case::configuration(
        GreeterError::configuration("pr_label is required"),
        "configuration error: pr_label is required"
    )]
    #[case::unexpected_status(
        GreeterError::UnexpectedStatus {
            operation: "list activity".to_owned(),
            status: 202,
        },
        "list activity received unexpected API status code 202"
    )]
    #[case::repository(
        GreeterError::InvalidRepository("octocat".to_owned()),
        "repository must be given as owner/repo: octocat"
    )]
    fn renders_user_facing_messages(#[case] error: GreeterError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}
