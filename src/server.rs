use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use tracing::{info, warn};

use crate::classifier::BuyClassifier;
use crate::config::AppConfig;
use crate::domain::TransferEvent;
use crate::notifier::NotifierHub;

pub const AUTH_HEADER: &str = "x-helius-auth";

pub struct AppState {
    pub config: AppConfig,
    pub classifier: BuyClassifier,
    pub notifier: NotifierHub,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(liveness))
        .route("/helius", post(handle_webhook))
        .with_state(state)
}

async fn liveness() -> &'static str {
    "Buy-bot alive"
}

/// Outcome of one event in a webhook batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// Qualifying buy, notification dispatched.
    Alerted,
    /// No tracked-mint purchase above the minimum.
    Ignored,
    /// Event could not be processed; later events are unaffected.
    Failed(String),
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<EventOutcome>,
}

impl BatchReport {
    pub fn alerted(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, EventOutcome::Alerted))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, EventOutcome::Failed(_)))
            .count()
    }
}

async fn handle_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> StatusCode {
    if let Some(secret) = &state.config.helius_secret {
        let presented = headers.get(AUTH_HEADER).and_then(|v| v.to_str().ok());
        if presented != Some(secret.as_str()) {
            warn!("Rejected webhook with missing or invalid {} header", AUTH_HEADER);
            return StatusCode::UNAUTHORIZED;
        }
    }

    let report = process_batch(&state, body).await;
    info!(
        "Processed webhook batch: {} events, {} alerted, {} failed",
        report.outcomes.len(),
        report.alerted(),
        report.failed()
    );

    // Helius retries on anything but success, so internal failures
    // still answer 200.
    StatusCode::OK
}

/// Run every event in the batch through filter -> classify -> notify.
/// A single object body counts as a one-element batch, and one bad
/// event never stops the rest.
pub async fn process_batch(state: &AppState, body: Value) -> BatchReport {
    let events = match body {
        Value::Array(items) => items,
        other => vec![other],
    };

    let mut report = BatchReport::default();
    for (index, raw) in events.into_iter().enumerate() {
        let outcome = process_event(state, raw).await;
        if let EventOutcome::Failed(reason) = &outcome {
            warn!("Event {} failed: {}", index, reason);
        }
        report.outcomes.push(outcome);
    }
    report
}

async fn process_event(state: &AppState, raw: Value) -> EventOutcome {
    let event: TransferEvent = match serde_json::from_value(raw) {
        Ok(event) => event,
        Err(e) => return EventOutcome::Failed(e.to_string()),
    };

    let Some(alert) = state.classifier.evaluate(&event) else {
        return EventOutcome::Ignored;
    };

    match state.notifier.send(&alert).await {
        Ok(()) => EventOutcome::Alerted,
        Err(e) => EventOutcome::Failed(e.to_string()),
    }
}
