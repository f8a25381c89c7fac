use crate::application::builders::request_builder::RequestBuilder;
use crate::application::services::HttpRequestService;
use crate::domain::errors::AppError;
use crate::infrastructure::config::Config;
use crate::infrastructure::output;
use crate::infrastructure::storage::FileStorage;
use clap::Parser;
use tracing::info;

/// CLI configuration for restcall
#[derive(Parser, Debug)]
#[command(name = "restcall", version)]
#[command(
    about = "Send one GET or POST request to the configured API and print or save the JSON response",
    long_about = None
)]
pub struct Cli {
    /// Request method
    #[arg(value_name = "METHOD", value_parser = ["get", "post"])]
    pub method: String,

    /// Request endpoint URI fragment, joined onto API_URL
    #[arg(value_name = "ENDPOINT")]
    pub endpoint: String,

    /// Data to send with the request (relaxed JSON)
    #[arg(short = 'd', long = "data", value_name = "DATA")]
    pub data: Option<String>,

    /// Output to a .json or .csv file under STORAGE_PATH (default: dump to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<String>,

    /// Log request details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub async fn run(&self, config: &Config, request_service: &HttpRequestService) -> Result<(), AppError> {
        let request = RequestBuilder::new()
            .method(&self.method)?
            .url(&config.api_url, &self.endpoint)?
            .payload(&self.data)?
            .build()?;

        let response = request_service.send_request(request).await?;
        output::print_success(&format!("Http response status code: {}.", response.status.as_u16()));

        let body = response.json()?;
        match &self.output {
            Some(filename) => {
                let path = FileStorage::new(&config.storage_path).save(filename, &body)?;
                info!(path = %path.display(), "saved response");
            }
            None => output::print_response(&body),
        }

        Ok(())
    }
}
