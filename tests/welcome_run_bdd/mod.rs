//! Support modules for the welcome run BDD tests.

pub(crate) mod domain;
pub(crate) mod harness;
pub(crate) mod state;

pub(crate) use domain::{HttpStatus, ItemCount, OperationBudget, PullRequestNumber};
pub(crate) use harness::{
    REPOSITORY_PATH, WELCOME_MESSAGE, activity_requested_for, issue_json, mount, pull_request_json,
    received_post_json,
};
pub(crate) use state::{WelcomeState, ensure_runtime_and_server, run_welcome};
