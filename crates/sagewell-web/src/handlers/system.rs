//! Liveness probe.

use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::extract::ApiJson;
use crate::state::SharedState;

#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub passages: usize,
}

/// GET /health
pub async fn health(State(state): State<SharedState>) -> ApiJson<Health> {
    ApiJson(Health { status: "ok".to_string(), passages: state.corpus.len() })
}
