//! Payload builders and request inspection for the welcome run BDD tests.

use serde_json::{Value, json};
use wiremock::Mock;

use super::state::{WelcomeState, ensure_runtime_and_server};

/// API path prefix for the scenario repository behind the mock server.
pub(crate) const REPOSITORY_PATH: &str = "/api/v3/repos/owner/repo";

/// Review body posted by every scenario run.
pub(crate) const WELCOME_MESSAGE: &str = "Welcome, and thanks for your first pull request!";

pub(crate) fn pull_request_json(number: u64, author: &str, labels: &[&str]) -> Value {
    let label_objects: Vec<Value> = labels.iter().map(|name| json!({ "name": name })).collect();
    json!({
        "number": number,
        "title": format!("Change #{number}"),
        "state": "open",
        "user": { "login": author },
        "labels": label_objects,
        "updated_at": "2024-01-01T00:00:00Z"
    })
}

pub(crate) fn issue_json(number: u64, is_pull_request: bool) -> Value {
    if is_pull_request {
        json!({
            "number": number,
            "state": "closed",
            "created_at": "2023-01-01T00:00:00Z",
            "pull_request": {
                "url": format!("https://api.github.com/repos/owner/repo/pulls/{number}")
            }
        })
    } else {
        json!({
            "number": number,
            "state": "closed",
            "created_at": "2023-01-01T00:00:00Z"
        })
    }
}

pub(crate) fn mount(welcome_state: &WelcomeState, mock: Mock) {
    let runtime = ensure_runtime_and_server(welcome_state);
    welcome_state
        .server
        .with_ref(|server| {
            runtime.block_on(mock.mount(server));
        })
        .unwrap_or_else(|| panic!("mock server not initialised"));
}

/// JSON body of the POST the run sent to `path`, if any.
pub(crate) fn received_post_json(welcome_state: &WelcomeState, path: &str) -> Option<Value> {
    let runtime = ensure_runtime_and_server(welcome_state);
    let requests = welcome_state
        .server
        .with_ref(|server| runtime.block_on(server.received_requests()))
        .flatten()
        .unwrap_or_else(|| panic!("request recording disabled"));

    requests
        .iter()
        .find(|request| request.method.as_str() == "POST" && request.url.path() == path)
        .map(|request| {
            request
                .body_json::<Value>()
                .unwrap_or_else(|error| panic!("POST body should be JSON: {error}"))
        })
}

/// True when the run looked up the history of `author`.
pub(crate) fn activity_requested_for(welcome_state: &WelcomeState, author: &str) -> bool {
    let runtime = ensure_runtime_and_server(welcome_state);
    let issues_path = format!("{REPOSITORY_PATH}/issues");
    let requests = welcome_state
        .server
        .with_ref(|server| runtime.block_on(server.received_requests()))
        .flatten()
        .unwrap_or_else(|| panic!("request recording disabled"));

    requests.iter().any(|request| {
        request.url.path() == issues_path
            && request
                .url
                .query_pairs()
                .any(|(key, value)| key == "creator" && value == author)
    })
}

