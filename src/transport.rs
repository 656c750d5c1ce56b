//! HTTP transports that carry requests built by [`crate::ApiRequest`].
//!
//! [`ureq::Agent`] backs the blocking client and [`reqwest::Client`] the async
//! one. Both are told not to treat error statuses as transport failures, so
//! error bodies reach [`crate::ApiError`].

use std::{future::Future, time};

/// An error from the underlying HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The blocking HTTP client failed.
    #[error("HTTP request failed")]
    Ureq(#[from] ureq::Error),
    /// The async HTTP client failed.
    #[error("HTTP request failed")]
    Reqwest(#[from] reqwest::Error),
    /// Any other failure.
    #[error("{0}")]
    Other(String),
}

/// A blocking HTTP transport.
pub trait Transport: Send + Sync {
    /// Send a request and read the whole response.
    fn send(&self, req: http::Request<String>)
    -> Result<http::Response<Vec<u8>>, TransportError>;

    /// Release any resources held by the transport.
    fn close(&self) -> Result<(), TransportError> {
        Ok(())
    }
}

impl Transport for ureq::Agent {
    fn send(
        &self,
        req: http::Request<String>,
    ) -> Result<http::Response<Vec<u8>>, TransportError> {
        let resp = self.run(req)?;
        let (parts, mut body) = resp.into_parts();
        let body = body.read_to_vec()?;
        Ok(http::Response::from_parts(parts, body))
    }
}

/// An async HTTP transport.
pub trait AsyncTransport: Send + Sync {
    /// Send a request and read the whole response.
    fn send(
        &self,
        req: http::Request<String>,
    ) -> impl Future<Output = Result<http::Response<Vec<u8>>, TransportError>> + Send;

    /// Acquire any resources needed before the first request.
    fn open(&self) -> impl Future<Output = Result<(), TransportError>> + Send {
        async { Ok(()) }
    }

    /// Release any resources held by the transport.
    fn close(&self) -> impl Future<Output = Result<(), TransportError>> + Send {
        async { Ok(()) }
    }
}

impl AsyncTransport for reqwest::Client {
    async fn send(
        &self,
        req: http::Request<String>,
    ) -> Result<http::Response<Vec<u8>>, TransportError> {
        let req = reqwest::Request::try_from(req)?;
        let resp = self.execute(req).await?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?;

        let mut out = http::Response::new(body.to_vec());
        *out.status_mut() = status;
        *out.headers_mut() = headers;
        Ok(out)
    }
}

/// A blocking agent that lets error statuses through.
pub(crate) fn ureq_agent(timeout: Option<time::Duration>) -> ureq::Agent {
    // Allows error responses to be parsed.
    let cfg = ureq::config::Config::builder()
        .http_status_as_error(false)
        .timeout_global(timeout);
    ureq::Agent::new_with_config(cfg.build())
}

/// An async client with the given timeout.
pub(crate) fn reqwest_client(
    timeout: Option<time::Duration>,
) -> Result<reqwest::Client, TransportError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    Ok(builder.build()?)
}
