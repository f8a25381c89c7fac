use crate::application::services::{HttpClient, HttpRequestService};
use crate::domain::entities::{Method as DomainMethod, Request, Response};
use crate::domain::errors::AppError;
use crate::domain::value_objects::{Payload, Url};

use anyhow::anyhow;
use async_trait::async_trait;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::header::{CONTENT_TYPE, HeaderValue};
use hyper::{Method, Request as HyperRequest};
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use serde_json::Value;
use std::error::Error as StdError;

/// Infrastructure implementation of HttpClient using Hyper
/// This is a low-level HTTP transport that the application service uses
pub struct HyperHttpClient {
    client: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
}

impl HyperHttpClient {
    pub fn new() -> Self {
        let connector = HttpsConnector::new();
        let client = Client::builder(TokioExecutor::new())
            .build::<HttpsConnector<HttpConnector>, Full<Bytes>>(connector);
        Self { client }
    }

    /// Creates a configured HTTP request service using this client
    pub fn create_request_service(self) -> HttpRequestService {
        HttpRequestService::new(Box::new(self))
    }
}

impl Default for HyperHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for HyperHttpClient {
    async fn send(&self, request: Request) -> Result<Response, AppError> {
        let hyper_request = RequestAdapter::to_hyper_request(request)?;
        let hyper_response = self.execute_http_request(hyper_request).await?;
        ResponseAdapter::to_domain_response(hyper_response).await
    }
}

impl HyperHttpClient {
    async fn execute_http_request(
        &self,
        request: HyperRequest<Full<Bytes>>,
    ) -> Result<hyper::Response<hyper::body::Incoming>, AppError> {
        self.client
            .request(request)
            .await
            .map_err(|e| AppError::Network(error_chain(&e)))
    }
}

/// Flattens an error and its sources into one line; hyper's top-level
/// messages alone ("client error (Connect)") hide the cause.
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Adapter for converting domain requests to Hyper requests
struct RequestAdapter;

impl RequestAdapter {
    fn to_hyper_request(domain_request: Request) -> Result<HyperRequest<Full<Bytes>>, AppError> {
        let method = MethodAdapter::to_hyper_method(domain_request.method);
        let (uri, body) = match domain_request.method {
            DomainMethod::Get => {
                let target = QueryAdapter::with_query(&domain_request.url, &domain_request.payload);
                (UriAdapter::to_hyper_uri(&target)?, Full::new(Bytes::new()))
            }
            DomainMethod::Post => (
                UriAdapter::to_hyper_uri(&domain_request.url.0)?,
                BodyAdapter::to_hyper_body(&domain_request.payload)?,
            ),
        };

        let mut builder = HyperRequest::builder().method(method).uri(uri);
        if domain_request.method == DomainMethod::Post {
            builder = HeaderAdapter::add_json_content_type(builder, &domain_request.payload);
        }

        builder
            .body(body)
            .map_err(|e| AppError::Unknown(anyhow!("Failed to build HTTP request: {}", e)))
    }
}

/// Adapter for converting domain responses from Hyper responses
struct ResponseAdapter;

impl ResponseAdapter {
    async fn to_domain_response(
        hyper_response: hyper::Response<hyper::body::Incoming>,
    ) -> Result<Response, AppError> {
        let status = hyper_response.status();
        let body = Self::extract_response_body(hyper_response).await?;

        Ok(Response { status, body })
    }

    async fn extract_response_body(
        response: hyper::Response<hyper::body::Incoming>,
    ) -> Result<String, AppError> {
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response body: {}", error_chain(&e))))?
            .to_bytes();

        String::from_utf8(body_bytes.to_vec())
            .map_err(|e| AppError::Unknown(anyhow!("Response body contains invalid UTF-8: {}", e)))
    }
}

/// Adapter for converting domain HTTP methods to Hyper methods
struct MethodAdapter;

impl MethodAdapter {
    fn to_hyper_method(domain_method: DomainMethod) -> Method {
        match domain_method {
            DomainMethod::Get => Method::GET,
            DomainMethod::Post => Method::POST,
        }
    }
}

/// Adapter for converting parsed URLs to Hyper URIs
struct UriAdapter;

impl UriAdapter {
    fn to_hyper_uri(url: &url::Url) -> Result<hyper::Uri, AppError> {
        url.as_str().parse::<hyper::Uri>().map_err(|_| AppError::InvalidUrl)
    }
}

/// Adapter for encoding a GET payload as query parameters
struct QueryAdapter;

impl QueryAdapter {
    /// Non-object GET data never gets here; `RequestValidator` rejects it.
    fn with_query(url: &Url, payload: &Option<Payload>) -> url::Url {
        let mut target = url.0.clone();
        let Some(Payload(Value::Object(params))) = payload else {
            return target;
        };
        if params.is_empty() {
            return target;
        }

        {
            let mut pairs = target.query_pairs_mut();
            for (key, value) in params {
                match value {
                    Value::Array(items) => {
                        for item in items {
                            pairs.append_pair(key, &Self::param_value(item));
                        }
                    }
                    other => {
                        pairs.append_pair(key, &Self::param_value(other));
                    }
                }
            }
        }
        target
    }

    fn param_value(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

/// Adapter for converting domain payloads to Hyper bodies
struct BodyAdapter;

impl BodyAdapter {
    fn to_hyper_body(payload: &Option<Payload>) -> Result<Full<Bytes>, AppError> {
        match payload {
            Some(payload) => {
                let bytes = serde_json::to_vec(&payload.0)
                    .map_err(|e| AppError::Unknown(anyhow!("Failed to encode request data: {}", e)))?;
                Ok(Full::new(Bytes::from(bytes)))
            }
            None => Ok(Full::new(Bytes::new())),
        }
    }
}

/// Adapter for handling HTTP headers
struct HeaderAdapter;

impl HeaderAdapter {
    fn add_json_content_type(
        builder: http::request::Builder,
        payload: &Option<Payload>,
    ) -> http::request::Builder {
        if payload.is_some() {
            builder.header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
        } else {
            builder
        }
    }
}
