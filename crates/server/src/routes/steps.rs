use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use service::{derive_statuses, StepStatus};

use super::AppState;
use crate::errors::ApiError;
use crate::observability::STEPS_REQUESTS_TOTAL;

#[derive(Debug, Deserialize)]
pub struct StepsQuery {
    pub total: usize,
    #[serde(default)]
    pub current: usize,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StepsResponse {
    pub statuses: Vec<StepStatus>,
}

/// GET /api/steps
pub async fn step_statuses(
    State(state): State<AppState>,
    query: Result<Query<StepsQuery>, QueryRejection>,
) -> Result<Json<StepsResponse>, ApiError> {
    STEPS_REQUESTS_TOTAL.inc();
    let Query(q) = query?;
    if q.total > state.steps.max_steps {
        return Err(ApiError::BadRequest(format!(
            "total {} exceeds the maximum of {} steps",
            q.total, state.steps.max_steps
        )));
    }
    let current_status = match q.status.as_deref() {
        Some(raw) => raw.parse::<StepStatus>()?,
        None => StepStatus::default(),
    };
    Ok(Json(StepsResponse { statuses: derive_statuses(q.total, q.current, current_status) }))
}
