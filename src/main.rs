//! Tutorlink CLI entrypoint for browsing the tutor marketplace.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;
use tutorlink::{ClientError, OperationMode, TutorlinkConfig};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

/// Installs a stderr subscriber filtered by `RUST_LOG`, defaulting to `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ignored = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

async fn run() -> Result<(), ClientError> {
    let config = load_config()?;
    match config.operation_mode() {
        OperationMode::Browse => cli::browse::run(&config).await,
        OperationMode::TutorDetail => cli::tutor_detail::run(&config).await,
        OperationMode::Testimonials => cli::testimonials::run(&config).await,
        OperationMode::Session => cli::session::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ClientError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<TutorlinkConfig, ClientError> {
    TutorlinkConfig::load().map_err(|error| ClientError::Configuration {
        message: error.to_string(),
    })
}
