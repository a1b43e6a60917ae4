//! Repository identity wrappers and API path construction.

use url::Url;

use super::error::GreeterError;

/// Public GitHub API base used when no override is configured.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, GreeterError> {
        if value.is_empty() {
            return Err(GreeterError::InvalidRepository(value.to_owned()));
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, GreeterError> {
        if value.is_empty() {
            return Err(GreeterError::InvalidRepository(value.to_owned()));
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `GreeterError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, GreeterError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(GreeterError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl std::fmt::Debug for PersonalAccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PersonalAccessToken(***)")
    }
}

/// Derives the GitHub API base URL from a host string.
fn derive_api_base_from_host(
    scheme: &str,
    host: &str,
    port: Option<u16>,
) -> Result<Url, GreeterError> {
    if host.eq_ignore_ascii_case("github.com") {
        return parse_api_base(DEFAULT_API_BASE);
    }

    let authority = if host.contains(':') {
        format!("[{host}]")
    } else {
        host.to_owned()
    };
    let mut api_url = Url::parse(&format!("{scheme}://{authority}"))
        .map_err(|error| GreeterError::InvalidUrl(error.to_string()))?;

    api_url
        .set_port(port)
        .map_err(|()| GreeterError::InvalidUrl("invalid port".to_owned()))?;
    api_url.set_path("api/v3");
    Ok(api_url)
}

fn parse_api_base(value: &str) -> Result<Url, GreeterError> {
    Url::parse(value).map_err(|error| GreeterError::InvalidUrl(error.to_string()))
}

/// Repository targeted by a run together with its API base.
///
/// # Example
///
/// ```
/// use greeter::RepositoryLocator;
///
/// let locator = RepositoryLocator::from_slug("octo/repo", None)
///     .expect("should parse repository slug");
/// assert_eq!(locator.owner().as_str(), "octo");
/// assert_eq!(locator.repository().as_str(), "repo");
/// assert_eq!(locator.api_base().as_str(), "https://api.github.com/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    api_base: Url,
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Parses an `owner/repo` slug, as exported by Actions runners in
    /// `GITHUB_REPOSITORY`, optionally against a custom API base.
    ///
    /// # Errors
    ///
    /// Returns `GreeterError::InvalidRepository` when the slug does not have
    /// exactly two non-empty segments, or `GreeterError::InvalidUrl` when the
    /// API base cannot be parsed.
    pub fn from_slug(slug: &str, api_base: Option<&str>) -> Result<Self, GreeterError> {
        let trimmed = slug.trim();
        let invalid = || GreeterError::InvalidRepository(trimmed.to_owned());

        let (owner, repo) = trimmed.split_once('/').ok_or_else(invalid)?;
        if repo.contains('/') || owner.is_empty() || repo.is_empty() {
            return Err(invalid());
        }

        let api_base = parse_api_base(api_base.unwrap_or(DEFAULT_API_BASE))?;

        Ok(Self {
            api_base,
            owner: RepositoryOwner::new(owner)?,
            repository: RepositoryName::new(repo)?,
        })
    }

    /// Parses a repository URL in the form `https://<host>/<owner>/<repo>`.
    ///
    /// GitHub Enterprise hosts map to `https://<host>/api/v3`.
    ///
    /// # Errors
    ///
    /// Returns `GreeterError::InvalidUrl` when parsing fails or
    /// `GreeterError::InvalidRepository` when the path is not `/owner/repo`.
    pub fn parse(input: &str) -> Result<Self, GreeterError> {
        let parsed =
            Url::parse(input).map_err(|error| GreeterError::InvalidUrl(error.to_string()))?;

        let mut segments = parsed
            .path_segments()
            .ok_or_else(|| GreeterError::InvalidRepository(input.to_owned()))?;
        let owner_segment = segments
            .next()
            .ok_or_else(|| GreeterError::InvalidRepository(input.to_owned()))?;
        let repository_segment = segments
            .next()
            .ok_or_else(|| GreeterError::InvalidRepository(input.to_owned()))?;

        let owner = RepositoryOwner::new(owner_segment)?;
        let repository = RepositoryName::new(repository_segment.trim_end_matches(".git"))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| GreeterError::InvalidUrl("URL must include a host".to_owned()))?;
        let api_base = derive_api_base_from_host(parsed.scheme(), host, parsed.port())?;

        Ok(Self {
            api_base,
            owner,
            repository,
        })
    }

    /// API base URL used for every call against this repository.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    fn repo_path(&self) -> String {
        format!(
            "/repos/{}/{}",
            self.owner.as_str(),
            self.repository.as_str()
        )
    }

    /// Returns the API path for listing pull requests.
    pub(crate) fn pulls_path(&self) -> String {
        format!("{}/pulls", self.repo_path())
    }

    /// Returns the API path for listing issues (which include pull requests).
    pub(crate) fn issues_path(&self) -> String {
        format!("{}/issues", self.repo_path())
    }

    /// Returns the API path for submitting a review on a pull request.
    pub(crate) fn reviews_path(&self, number: u64) -> String {
        format!("{}/pulls/{number}/reviews", self.repo_path())
    }

    /// Returns the API path for adding labels to an issue or pull request.
    pub(crate) fn labels_path(&self, number: u64) -> String {
        format!("{}/issues/{number}/labels", self.repo_path())
    }
}

impl std::fmt::Display for RepositoryLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner.as_str(), self.repository.as_str())
    }
}
