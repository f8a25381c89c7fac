use crate::domain::entities::{Method, Request, Response};
use crate::domain::errors::AppError;
use async_trait::async_trait;
use tracing::{debug, info};

/// Trait for HTTP clients to enable mocking and dependency inversion
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn send(&self, request: Request) -> Result<Response, AppError>;
}

/// Application service for orchestrating a single request
pub struct HttpRequestService {
    http_client: Box<dyn HttpClient>,
}

impl HttpRequestService {
    pub fn new(http_client: Box<dyn HttpClient>) -> Self {
        Self { http_client }
    }

    /// Sends the request and accepts only 2xx answers
    pub async fn send_request(&self, request: Request) -> Result<Response, AppError> {
        RequestValidator::validate(&request)?;

        info!(method = ?request.method, url = %request.url.as_str(), "dispatching request");
        let response = self.http_client.send(request).await?;
        debug!(status = response.status.as_u16(), bytes = response.body.len(), "response received");

        if !response.status.is_success() {
            return Err(AppError::HttpStatus(response.status.as_u16()));
        }
        Ok(response)
    }
}

/// Domain rules a request must satisfy before it reaches the transport
pub struct RequestValidator;

impl RequestValidator {
    pub fn validate(request: &Request) -> Result<(), AppError> {
        Self::validate_method_payload_combination(request)
    }

    fn validate_method_payload_combination(request: &Request) -> Result<(), AppError> {
        match (&request.method, &request.payload) {
            (Method::Get, Some(payload)) if !payload.is_mapping() => Err(AppError::PayloadDecode(
                "GET data must be an object of query parameters".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
