//! Scenario state, runtime setup and the run driver for the welcome run BDD
//! tests.

use std::cell::RefCell;
use std::rc::Rc;

use greeter::{
    GreeterError, MarkerLabel, OctocrabGateway, PersonalAccessToken, RepositoryLocator,
    TraversalReport, WelcomeSettings, WelcomeTraversal,
};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use serde_json::{Value, json};
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::harness::{REPOSITORY_PATH, WELCOME_MESSAGE, mount};

const FALLBACK_PRIORITY: u8 = 10;

/// Tokio runtime shared between steps of one scenario.
#[derive(Clone)]
pub(crate) struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub(crate) fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

#[derive(ScenarioState, Default)]
pub(crate) struct WelcomeState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) pulls: Slot<Vec<Value>>,
    pub(crate) report: Slot<TraversalReport>,
    pub(crate) error: Slot<GreeterError>,
}

pub(crate) fn ensure_runtime_and_server(welcome_state: &WelcomeState) -> SharedRuntime {
    if welcome_state.runtime.with_ref(|_| ()).is_none() {
        let runtime = Runtime::new()
            .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
        welcome_state.runtime.set(SharedRuntime::new(runtime));
    }

    let shared_runtime = welcome_state
        .runtime
        .get()
        .unwrap_or_else(|| panic!("runtime not initialised after set"));

    if welcome_state.server.with_ref(|_| ()).is_none() {
        welcome_state
            .server
            .set(shared_runtime.block_on(MockServer::start()));
    }

    shared_runtime
}

/// Serves the collected pull requests as page 1 and answers everything else
/// the run may call with an empty or successful response.
fn mount_listing_and_fallbacks(welcome_state: &WelcomeState) {
    let pulls_path = format!("{REPOSITORY_PATH}/pulls");
    let pulls = welcome_state.pulls.get().unwrap_or_default();

    mount(
        welcome_state,
        Mock::given(method("GET"))
            .and(path(pulls_path.as_str()))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&pulls)),
    );
    mount(
        welcome_state,
        Mock::given(method("GET"))
            .and(path(pulls_path.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .with_priority(FALLBACK_PRIORITY),
    );
    mount(
        welcome_state,
        Mock::given(method("GET"))
            .and(path(format!("{REPOSITORY_PATH}/issues")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .with_priority(FALLBACK_PRIORITY),
    );
    mount(
        welcome_state,
        Mock::given(method("POST"))
            .and(path_regex(r"^/api/v3/repos/owner/repo/pulls/\d+/reviews$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 }))),
    );
    mount(
        welcome_state,
        Mock::given(method("POST"))
            .and(path_regex(r"^/api/v3/repos/owner/repo/issues/\d+/labels$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([]))),
    );
}

/// Runs one traversal against the mock server and records its outcome.
pub(crate) fn run_welcome(welcome_state: &WelcomeState, label: &str, budget: u32) {
    let runtime = ensure_runtime_and_server(welcome_state);
    mount_listing_and_fallbacks(welcome_state);

    let server_url = welcome_state
        .server
        .with_ref(MockServer::uri)
        .unwrap_or_else(|| panic!("mock server URL missing"));

    let result = runtime.block_on(async {
        let locator = RepositoryLocator::parse(&format!("{server_url}/owner/repo"))?;
        let token = PersonalAccessToken::new("ghp_scenario")?;
        let settings = WelcomeSettings::new(MarkerLabel::new(label)?, WELCOME_MESSAGE, budget);
        let gateway = OctocrabGateway::for_token(&token, &locator)?;

        WelcomeTraversal::new(&gateway, &gateway, &settings)
            .traverse(&locator)
            .await
    });

    match result {
        Ok(report) => welcome_state.report.set(report),
        Err(error) => welcome_state.error.set(error),
    }
}
