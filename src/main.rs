mod application;
mod domain;
mod infrastructure;
mod presentation;

use clap::Parser;
use crate::infrastructure::config::Config;
use crate::infrastructure::http_client::HyperHttpClient;
use crate::infrastructure::{logging, output};
use crate::presentation::cli::Cli;

/// restcall: one HTTP request against a configured API
///
/// Joins ENDPOINT onto `API_URL`, validates the result, sends a GET or POST
/// (with optional relaxed-JSON data) and either pretty-prints the JSON answer
/// or saves it under `STORAGE_PATH` as JSON or CSV. Exits 0 only when every
/// step succeeded.
#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::from_env();
    tracing::debug!(?config, "loaded configuration");
    let request_service = HyperHttpClient::new().create_request_service();

    if let Err(err) = cli.run(&config, &request_service).await {
        tracing::debug!(error = ?err, "request failed");
        output::print_error(&err.to_string());
        std::process::exit(err.exit_code());
    }
}
