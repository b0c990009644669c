use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};

use crate::errors::ApiError;

// Prometheus metrics (default registry)
pub static PAGE_RANGE_REQUESTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "pager_page_range_requests_total",
        "Total page range computations requested"
    )
    .expect("register page_range_requests_total")
});

pub static STEPS_REQUESTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "pager_steps_requests_total",
        "Total step status derivations requested"
    )
    .expect("register steps_requests_total")
});

pub static REJECTED_REQUESTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "pager_rejected_requests_total",
        "Total requests rejected with a client error"
    )
    .expect("register rejected_requests_total")
});

/// Force registration so every counter shows up in the first scrape.
pub fn init_metrics() {
    Lazy::force(&PAGE_RANGE_REQUESTS_TOTAL);
    Lazy::force(&STEPS_REQUESTS_TOTAL);
    Lazy::force(&REJECTED_REQUESTS_TOTAL);
}

/// Text exposition of the default registry.
pub fn render_metrics() -> Result<String, ApiError> {
    let encoder = TextEncoder::new();
    let mut buf = Vec::new();
    encoder
        .encode(&prometheus::gather(), &mut buf)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| ApiError::Internal(e.to_string()))
}
