//! Error mapping helpers for the Octocrab gateway.

use http::StatusCode;

use crate::github::error::GreeterError;
use crate::github::rate_limit::RateLimitInfo;

/// Checks if a GitHub error status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

/// Checks whether the GitHub error is a quota refusal, which GitHub signals
/// with 403 or 429 plus a rate-limit message or documentation link.
pub(super) fn is_rate_limit_error(source: &octocrab::GitHubError) -> bool {
    let is_rate_limit_status = matches!(
        source.status_code,
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
    );

    let message_indicates_rate_limit = source.message.to_lowercase().contains("rate limit")
        || source
            .documentation_url
            .as_deref()
            .is_some_and(|url| url.contains("rate-limit"));

    is_rate_limit_status && message_indicates_rate_limit
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> GreeterError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return if is_auth_failure(source.status_code) {
            GreeterError::Authentication {
                message: format!(
                    "{operation} failed: GitHub returned {status} {message}",
                    status = source.status_code,
                    message = source.message
                ),
            }
        } else {
            GreeterError::Api {
                message: format!(
                    "{operation} failed with status {status}: {message}",
                    status = source.status_code,
                    message = source.message
                ),
            }
        };
    }

    if is_network_error(error) {
        return GreeterError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    GreeterError::Api {
        message: format!("{operation} failed: {error}"),
    }
}

pub(super) fn rate_limit_error(
    operation: &str,
    message: &str,
    rate_limit: Option<RateLimitInfo>,
) -> GreeterError {
    let base_message = format!("{operation} failed: {message}");
    let message = match &rate_limit {
        Some(info) => format!(
            "{base_message} (resets at {reset}, in {seconds}s)",
            reset = info.reset_at(),
            seconds = info.seconds_until_reset()
        ),
        None => base_message,
    };

    GreeterError::RateLimitExceeded {
        rate_limit,
        message,
    }
}
