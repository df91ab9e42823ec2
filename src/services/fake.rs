//! In-memory transport for tests
//!
//! Responses are matched by URL substring; every requested URL is recorded so
//! tests can count network calls.

use super::fetch::Transport;
use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::Url;
use std::sync::Mutex;

#[derive(Debug, Clone)]
enum Reply {
    Body(String),
    Fail(String),
}

#[derive(Debug, Default)]
pub struct FakeTransport {
    replies: Mutex<Vec<(String, Reply)>>,
    requests: Mutex<Vec<Url>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer requests whose URL contains `url_contains` with `body`
    pub fn respond(&self, url_contains: &str, body: &str) {
        self.replies
            .lock()
            .unwrap()
            .push((url_contains.to_string(), Reply::Body(body.to_string())));
    }

    /// Fail requests whose URL contains `url_contains`
    pub fn fail(&self, url_contains: &str, message: &str) {
        self.replies
            .lock()
            .unwrap()
            .push((url_contains.to_string(), Reply::Fail(message.to_string())));
    }

    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(&self, url: &Url) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(url.clone());

        // Later registrations win over earlier ones
        let reply = self
            .replies
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(pattern, _)| url.as_str().contains(pattern.as_str()))
            .map(|(_, reply)| reply.clone());

        match reply {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Fail(message)) => Err(FetchError::Transport(message)),
            None => Err(FetchError::BadStatus { status: 404 }),
        }
    }
}
