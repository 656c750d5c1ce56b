//! Test utilities: a fixed configuration and a scripted transport.

use std::{
    collections::VecDeque,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use crate::{
    ClientConfiguration, StaticToken,
    transport::{AsyncTransport, Transport, TransportError},
};

pub(crate) const TEST_SUBSCRIPTION: &str = "00000000-0000-0000-0000-000000000000";

/// A configuration against the public endpoint with a fixed token.
pub(crate) fn test_config() -> Arc<ClientConfiguration> {
    Arc::new(ClientConfiguration::new(
        Arc::new(StaticToken::new("test-token")),
        TEST_SUBSCRIPTION,
    ))
}

/// A request as seen by [`MockTransport`].
#[derive(Debug, Clone)]
pub(crate) struct Recorded {
    pub(crate) method: http::Method,
    pub(crate) uri: String,
    pub(crate) body: String,
}

/// Replays queued responses in order and records every request.
#[derive(Debug, Default)]
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<(http::StatusCode, String)>>,
    requests: Mutex<Vec<Recorded>>,
    opens: AtomicUsize,
    closes: AtomicUsize,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a response.
    pub(crate) fn respond(self, status: u16, body: &str) -> Self {
        let status = http::StatusCode::from_u16(status).expect("test status should be valid");
        self.responses
            .lock()
            .unwrap()
            .push_back((status, body.to_owned()));
        self
    }

    pub(crate) fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub(crate) fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    fn reply(
        &self,
        req: http::Request<String>,
    ) -> Result<http::Response<Vec<u8>>, TransportError> {
        let (parts, body) = req.into_parts();
        self.requests.lock().unwrap().push(Recorded {
            method: parts.method,
            uri: parts.uri.to_string(),
            body,
        });

        let Some((status, body)) = self.responses.lock().unwrap().pop_front() else {
            return Err(TransportError::Other("no response queued".into()));
        };

        let mut resp = http::Response::new(body.into_bytes());
        *resp.status_mut() = status;
        Ok(resp)
    }
}

impl Transport for MockTransport {
    fn send(
        &self,
        req: http::Request<String>,
    ) -> Result<http::Response<Vec<u8>>, TransportError> {
        self.reply(req)
    }

    fn close(&self) -> Result<(), TransportError> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl AsyncTransport for MockTransport {
    async fn send(
        &self,
        req: http::Request<String>,
    ) -> Result<http::Response<Vec<u8>>, TransportError> {
        self.reply(req)
    }

    async fn open(&self) -> Result<(), TransportError> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn close(&self) -> Result<(), TransportError> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
