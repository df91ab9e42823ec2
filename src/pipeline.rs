//! Search pipeline controller
//!
//! Owns the UI status and turns triggering actions into requests, and
//! request outcomes into the next status. It does no I/O itself: `begin`
//! hands back a [`PendingRequest`] for the caller to run, and `complete`
//! takes the outcome.

use crate::model::{route, Query, Recipe, Trigger, UiStatus};
use crate::services::{FetchCompletion, PendingRequest, ResultSet};
use chrono::{DateTime, Local};

#[derive(Debug, Default)]
pub struct SearchPipeline {
    status: UiStatus,
    /// Last card grid, kept so closing a detail panel can go back to it
    last_results: Vec<Recipe>,
    next_request_id: u64,
    in_flight: usize,
    last_response_at: Option<DateTime<Local>>,
}

impl SearchPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &UiStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn last_response_at(&self) -> Option<DateTime<Local>> {
        self.last_response_at
    }

    /// Text submission
    ///
    /// Blank input flips to `Error` without any request.
    pub fn submit(&mut self, raw_input: &str) -> Option<PendingRequest> {
        match Query::parse(raw_input) {
            Some(query) => self.begin(Trigger::Submit(query)),
            None => {
                self.reset();
                self.last_results.clear();
                tracing::debug!("empty submission rejected");
                self.status = UiStatus::Error;
                None
            }
        }
    }

    /// Navigation shortcut by identifier
    pub fn navigate(&mut self, shortcut_id: &str) -> Option<PendingRequest> {
        self.begin(Trigger::Navigate(shortcut_id.to_string()))
    }

    /// Card selection by record identifier
    pub fn select_card(&mut self, record_id: &str) -> Option<PendingRequest> {
        self.begin(Trigger::SelectCard(record_id.to_string()))
    }

    /// Route a trigger; a routed trigger clears the output region first
    pub fn begin(&mut self, trigger: Trigger) -> Option<PendingRequest> {
        let Some(endpoint) = route(&trigger) else {
            tracing::debug!(?trigger, "unrecognized trigger ignored");
            return None;
        };

        self.reset();
        // A lookup keeps the grid it was opened from
        if !endpoint.is_lookup() {
            self.last_results.clear();
        }
        self.next_request_id += 1;
        self.in_flight += 1;

        tracing::info!(
            id = self.next_request_id,
            endpoint = endpoint.name(),
            "request started"
        );

        Some(PendingRequest {
            id: self.next_request_id,
            endpoint,
        })
    }

    /// Apply a finished request; the latest arrival always wins
    pub fn complete(&mut self, completion: FetchCompletion) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.last_response_at = Some(Local::now());

        if completion.id != self.next_request_id {
            tracing::debug!(
                id = completion.id,
                latest = self.next_request_id,
                "older request finished after a newer one started"
            );
        }

        self.status = match completion.result {
            Ok(ResultSet::NoResults) => UiStatus::Warning,
            Ok(ResultSet::Records(mut records)) if completion.endpoint.is_lookup() => {
                // FetchClient guarantees a non-empty lookup result
                match records.drain(..).next() {
                    Some(recipe) => UiStatus::ShowingDetail(Box::new(recipe)),
                    None => UiStatus::Warning,
                }
            }
            Ok(ResultSet::Records(records)) => {
                self.last_results = records.clone();
                UiStatus::Showing(records)
            }
            Err(err) => UiStatus::Fault(err.to_string()),
        };
    }

    /// Leave the detail panel, back to the last card grid
    pub fn close_detail(&mut self) {
        if matches!(self.status, UiStatus::ShowingDetail(_)) {
            self.status = if self.last_results.is_empty() {
                UiStatus::Idle
            } else {
                UiStatus::Showing(self.last_results.clone())
            };
        }
    }

    /// Dismiss a status line
    pub fn dismiss(&mut self) {
        if self.status.is_message() {
            self.status = UiStatus::Idle;
        }
    }

    fn reset(&mut self) {
        self.status = UiStatus::Idle;
    }
}
