//! Run configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! Lowest to highest:
//!
//! 1. **Defaults** – nothing is set by default
//! 2. **Configuration file** – `.greeter.toml` in the current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `GREETER_TOKEN`, `GREETER_PR_LABEL`, and so
//!    on
//! 4. **Command-line arguments** – `--token`/`-t`, `--pr-label`/`-l`, and so on
//!
//! The token, repository and API URL additionally fall back to the
//! `GITHUB_TOKEN`, `GITHUB_REPOSITORY` and `GITHUB_API_URL` variables that
//! CI runners export.
//!
//! # Configuration File
//!
//! ```toml
//! repository = "octo/repo"
//! pr_message = "Thanks for your first pull request!"
//! pr_label = "first-time-contributor"
//! operations_per_run = 100
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::GreeterError;
use crate::github::locator::{PersonalAccessToken, RepositoryLocator};
use crate::welcome::{MarkerLabel, WelcomeSettings};

const TOKEN_FALLBACK: &str = "GITHUB_TOKEN";
const REPOSITORY_FALLBACK: &str = "GITHUB_REPOSITORY";
const API_URL_FALLBACK: &str = "GITHUB_API_URL";

/// Greeter configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use greeter::GreeterConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = GreeterConfig::load().expect("failed to load configuration");
/// let settings = config.welcome_settings().expect("settings required");
/// let locator = config.repository_locator().expect("repository required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "GREETER",
    discovery(
        dotfile_name = ".greeter.toml",
        config_file_name = "greeter.toml",
        app_name = "greeter"
    )
)]
pub struct GreeterConfig {
    /// Personal access token for the GitHub API.
    ///
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `GREETER_TOKEN`, falling back to `GITHUB_TOKEN`
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Repository to scan as `owner/repo` or as a repository URL such as
    /// `https://ghe.example.com/octo/repo`.
    ///
    /// - CLI: `--repository <SLUG>` or `-r <SLUG>`
    /// - Environment: `GREETER_REPOSITORY`, falling back to
    ///   `GITHUB_REPOSITORY`
    /// - Config file: `repository = "..."`
    #[ortho_config(cli_short = 'r')]
    pub repository: Option<String>,

    /// REST API base URL, for GitHub Enterprise installations.
    ///
    /// Falls back to `GITHUB_API_URL`, then to the public API.
    #[ortho_config()]
    pub api_url: Option<String>,

    /// Review comment posted on first-time pull requests.
    #[ortho_config(cli_short = 'm')]
    pub pr_message: Option<String>,

    /// Label marking a pull request as already welcomed.
    #[ortho_config(cli_short = 'l')]
    pub pr_label: Option<String>,

    /// Maximum number of API calls one run may spend.
    #[ortho_config(cli_short = 'o')]
    pub operations_per_run: Option<u32>,
}

impl GreeterConfig {
    /// Resolves the token from configuration or `GITHUB_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns [`GreeterError::MissingToken`] when no source provides a
    /// non-blank value.
    pub fn resolve_token(&self) -> Result<PersonalAccessToken, GreeterError> {
        let value = self
            .token
            .clone()
            .or_else(|| env::var(TOKEN_FALLBACK).ok())
            .ok_or(GreeterError::MissingToken)?;
        PersonalAccessToken::new(value)
    }

    /// Builds the locator of the repository to scan.
    ///
    /// `repository` is either an `owner/repo` slug or a repository URL. A URL
    /// carries its own host, so `api_url` only applies to slugs.
    ///
    /// # Errors
    ///
    /// Returns [`GreeterError::Configuration`] when no repository is
    /// configured, [`GreeterError::InvalidRepository`] when it is neither an
    /// `owner/repo` slug nor a repository URL, and [`GreeterError::InvalidUrl`]
    /// for a malformed URL.
    pub fn repository_locator(&self) -> Result<RepositoryLocator, GreeterError> {
        let slug = self
            .repository
            .clone()
            .or_else(|| env::var(REPOSITORY_FALLBACK).ok())
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| {
                GreeterError::configuration(
                    "repository is required (use --repository or GITHUB_REPOSITORY)",
                )
            })?;
        let api_url = self
            .api_url
            .clone()
            .or_else(|| env::var(API_URL_FALLBACK).ok())
            .filter(|value| !value.trim().is_empty());

        let repository = slug.trim();
        if repository.contains("://") {
            return RepositoryLocator::parse(repository);
        }
        RepositoryLocator::from_slug(repository, api_url.as_deref())
    }

    /// Validates the welcome inputs.
    ///
    /// # Errors
    ///
    /// Returns [`GreeterError::Configuration`] when the message or label is
    /// missing or blank, or when the budget is missing or zero.
    pub fn welcome_settings(&self) -> Result<WelcomeSettings, GreeterError> {
        let message = self
            .pr_message
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| GreeterError::configuration("pr_message is required"))?;
        let label = self
            .pr_label
            .as_deref()
            .ok_or_else(|| GreeterError::configuration("pr_label is required"))?;
        let budget = match self.operations_per_run {
            None => {
                return Err(GreeterError::configuration(
                    "operations_per_run is required",
                ));
            }
            Some(0) => {
                return Err(GreeterError::configuration(
                    "operations_per_run must be a positive integer",
                ));
            }
            Some(budget) => budget,
        };

        Ok(WelcomeSettings::new(MarkerLabel::new(label)?, message, budget))
    }
}

#[cfg(test)]
mod tests;
