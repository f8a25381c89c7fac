use crate::domain::entities::{Method, Request};
use crate::domain::errors::AppError;
use crate::domain::value_objects::{Payload, Url, build_url};
use anyhow::anyhow;
use std::str::FromStr;
use tracing::debug;

#[derive(Default)]
pub struct RequestBuilder {
    method: Option<Method>,
    url: Option<Url>,
    payload: Option<Payload>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: &str) -> Result<Self, AppError> {
        self.method = Some(Method::from_str(method)?);
        Ok(self)
    }

    /// Composes the target from the API base and the endpoint fragment and
    /// runs it through the URL validator.
    pub fn url(mut self, api_url: &str, endpoint: &str) -> Result<Self, AppError> {
        let full_url = build_url(api_url, endpoint)?;
        debug!(url = %full_url, "composed request URL");
        self.url = Some(Url::new(&full_url)?);
        Ok(self)
    }

    pub fn payload(mut self, raw: &Option<String>) -> Result<Self, AppError> {
        if let Some(data) = raw {
            self.payload = Some(Payload::parse(data)?);
        }
        Ok(self)
    }

    pub fn build(self) -> Result<Request, AppError> {
        let method = self.method.ok_or_else(|| anyhow!("Method is required"))?;
        let url = self.url.ok_or_else(|| anyhow!("URL is required"))?;
        Ok(Request {
            method,
            url,
            payload: self.payload,
        })
    }
}
