use thiserror::Error;

/// Every way a single invocation can fail. Each variant maps to exit code 1.
#[derive(Error, Debug)]
pub enum AppError {
    /// The composed URL failed validation; no request was sent.
    #[error("Specified URL is not valid.")]
    InvalidUrl,

    /// The `--data` argument could not be turned into a payload.
    #[error("Request data could not be decoded. {0}")]
    PayloadDecode(String),

    /// Connection, DNS, TLS or body transfer failure.
    #[error("Networking exception is occurred. {0}")]
    Network(String),

    /// The server answered outside the 2xx range.
    #[error("Http response status code: {0}.")]
    HttpStatus(u16),

    #[error("Unknown exception is occurred. {0:#}")]
    Unknown(#[from] anyhow::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn messages_match_console_wording() {
        assert_eq!(AppError::InvalidUrl.to_string(), "Specified URL is not valid.");
        assert_eq!(
            AppError::HttpStatus(404).to_string(),
            "Http response status code: 404."
        );
        assert_eq!(
            AppError::Network("connection refused".into()).to_string(),
            "Networking exception is occurred. connection refused"
        );
    }

    #[test]
    fn unknown_keeps_context_chain() {
        let err: AppError = anyhow!("disk full").context("Failed to write out.json").into();
        assert_eq!(
            err.to_string(),
            "Unknown exception is occurred. Failed to write out.json: disk full"
        );
        assert_eq!(err.exit_code(), 1);
    }
}
