//! Typed step parameters for the welcome run BDD tests.

use std::fmt;
use std::str::FromStr;

/// Pull request or issue number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PullRequestNumber(u64);

impl PullRequestNumber {
    pub(crate) const fn value(self) -> u64 {
        self.0
    }
}

impl FromStr for PullRequestNumber {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.parse::<u64>().map_err(|error| error.to_string())?;
        if value == 0 {
            return Err("PullRequestNumber must be >= 1".to_owned());
        }
        Ok(Self(value))
    }
}

impl fmt::Display for PullRequestNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Operation budget for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OperationBudget(u32);

impl OperationBudget {
    pub(crate) const fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for OperationBudget {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self)
    }
}

/// Count of issues or welcomed pull requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ItemCount(u64);

impl ItemCount {
    pub(crate) const fn value(self) -> u64 {
        self.0
    }
}

impl FromStr for ItemCount {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

/// HTTP status code served by the mock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HttpStatus(u16);

impl HttpStatus {
    pub(crate) const fn value(self) -> u16 {
        self.0
    }
}

impl FromStr for HttpStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.parse::<u16>().map_err(|error| error.to_string())?;
        if !(100..=599).contains(&value) {
            return Err(format!("{value} is not an HTTP status code"));
        }
        Ok(Self(value))
    }
}
