//! Greeter CLI entrypoint: one budgeted welcome run per invocation.

use std::io::{self, Write};
use std::process::ExitCode;

use greeter::{GreeterConfig, GreeterError, OctocrabGateway, TraversalReport, WelcomeTraversal};
use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(report) => {
            tracing::info!(
                operations_left = report.operations_left,
                stop = ?report.stop,
                welcomed = report.welcomed.len(),
                "welcome run finished"
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!(error = %error, details = ?error, "welcome run failed");
            let _write_result = writeln!(io::stderr().lock(), "{error}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run() -> Result<TraversalReport, GreeterError> {
    let config = load_config()?;

    let settings = config.welcome_settings()?;
    let token = config.resolve_token()?;
    let locator = config.repository_locator()?;

    let gateway = OctocrabGateway::for_token(&token, &locator)?;
    tracing::info!(
        repository = %locator,
        budget = settings.operation_budget,
        "starting welcome run"
    );

    WelcomeTraversal::new(&gateway, &gateway, &settings)
        .traverse(&locator)
        .await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`GreeterError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<GreeterConfig, GreeterError> {
    GreeterConfig::load().map_err(|error| GreeterError::configuration(error.to_string()))
}
