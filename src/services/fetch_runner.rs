//! Background request runner
//!
//! Requests run as tasks on a tokio runtime and report back over a channel
//! that the UI loop drains on every tick. Earlier requests are never
//! cancelled: completions are handed out in arrival order.

use super::fetch::{FetchClient, ResultSet};
use crate::error::FetchError;
use crate::model::Endpoint;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::time::Instant;
use tokio::runtime::Handle;

/// A request the pipeline decided to issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: u64,
    pub endpoint: Endpoint,
}

impl PendingRequest {
    /// Pair the request with its outcome
    pub fn complete(self, result: Result<ResultSet, FetchError>) -> FetchCompletion {
        FetchCompletion {
            id: self.id,
            endpoint: self.endpoint,
            result,
        }
    }
}

/// Outcome of a finished request
#[derive(Debug)]
pub struct FetchCompletion {
    pub id: u64,
    pub endpoint: Endpoint,
    pub result: Result<ResultSet, FetchError>,
}

/// Spawns fetches and collects their completions
pub struct FetchRunner {
    runtime: Handle,
    client: FetchClient,
    sender: Sender<FetchCompletion>,
    receiver: Receiver<FetchCompletion>,
}

impl FetchRunner {
    pub fn new(runtime: Handle, client: FetchClient) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            runtime,
            client,
            sender,
            receiver,
        }
    }

    /// Start a request in the background
    pub fn spawn(&self, request: PendingRequest) {
        let client = self.client.clone();
        let sender = self.sender.clone();

        tracing::debug!(id = request.id, endpoint = request.endpoint.name(), "spawning fetch");

        self.runtime.spawn(async move {
            let started = Instant::now();
            let result = client.execute(&request.endpoint).await;
            if let Err(ref err) = result {
                tracing::warn!(
                    id = request.id,
                    endpoint = request.endpoint.name(),
                    error = %err,
                    "fetch failed"
                );
            }
            tracing::debug!(
                id = request.id,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "fetch finished"
            );
            // The receiver lives as long as the runner; a send error only happens on shutdown
            let _ = sender.send(request.complete(result));
        });
    }

    /// Drain all completions that have arrived since the last poll
    pub fn poll(&self) -> Vec<FetchCompletion> {
        let mut completions = Vec::new();
        loop {
            match self.receiver.try_recv() {
                Ok(completion) => completions.push(completion),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        completions
    }
}
