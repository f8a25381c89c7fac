use crate::domain::value_objects::{Payload, Url};
use anyhow::{Context, Result, anyhow};
use hyper::StatusCode;
use serde_json::Value;
use std::str::FromStr;

/// HTTP methods the tool can dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl FromStr for Method {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            other => Err(anyhow!("Unsupported HTTP method: '{}'", other)),
        }
    }
}

/// Represents an HTTP request
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub payload: Option<Payload>,
}

/// Represents an HTTP response
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub body: String,
}

impl Response {
    /// Decodes the body as a JSON value of any shape
    pub fn json(&self) -> Result<Value> {
        serde_json::from_str(&self.body).context("Response body is not valid JSON")
    }
}
