use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use configs::PaginationConfig;
use serde::{de, Deserialize, Deserializer};
use service::{pagination, PageRangeResult, PaginationError};
use tracing::debug;

use super::AppState;
use crate::errors::ApiError;
use crate::observability::PAGE_RANGE_REQUESTS_TOTAL;

#[derive(Debug, Deserialize)]
pub struct PageRangeQuery {
    #[serde(default)]
    pub total_items: u64,
    #[serde(default, deserialize_with = "saturating_int")]
    pub page_size: Option<i64>,
    #[serde(default, deserialize_with = "saturating_int")]
    pub current_page: Option<i64>,
}

/// Parse an integer, saturating values outside `i64` to its bounds so a
/// stale cursor still clamps instead of failing.
pub(crate) fn parse_saturating_i64(raw: &str) -> Option<i64> {
    let s = raw.trim();
    if let Ok(v) = s.parse::<i64>() {
        return Some(v);
    }
    let (negative, digits) = match s.strip_prefix('-') {
        Some(d) => (true, d),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i64::MIN } else { i64::MAX })
}

fn saturating_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    raw.map(|s| {
        parse_saturating_i64(&s)
            .ok_or_else(|| de::Error::custom(format!("expected an integer, got {s:?}")))
    })
    .transpose()
}

/// Resolve the requested page size against the configured policy.
fn resolve_page_size(raw: Option<i64>, cfg: &PaginationConfig) -> Result<u64, ApiError> {
    let Some(raw) = raw else {
        return Ok(cfg.default_page_size);
    };
    let size = u64::try_from(raw).map_err(|_| PaginationError::page_size(raw))?;
    if size > cfg.max_page_size {
        return Err(ApiError::BadRequest(format!(
            "page_size {size} exceeds the maximum of {}",
            cfg.max_page_size
        )));
    }
    Ok(size)
}

/// GET /api/page-range
pub async fn page_range(
    State(state): State<AppState>,
    query: Result<Query<PageRangeQuery>, QueryRejection>,
) -> Result<Json<PageRangeResult>, ApiError> {
    PAGE_RANGE_REQUESTS_TOTAL.inc();
    let Query(q) = query?;
    let page_size = resolve_page_size(q.page_size, &state.pagination)?;
    let result = pagination::compute(q.total_items, page_size, q.current_page.unwrap_or(1))?;
    debug!(
        total_items = q.total_items,
        page_size,
        current_page = result.current_page,
        total_pages = result.total_pages,
        "page range computed"
    );
    Ok(Json(result))
}
