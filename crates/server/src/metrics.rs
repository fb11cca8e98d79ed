//! Request counters exposed at `/metrics` in Prometheus text format.

use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

/// Page-data fetches by page and outcome (`ok` | `empty` | `error`).
pub static PAGE_FETCHES: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "site_page_fetches_total",
        "Page data fetches by page and outcome",
        &["page", "outcome"]
    )
    .expect("register page fetch counter")
});

/// Form submissions by form and outcome (`ok` | `rejected` | `failed`).
pub static FORM_SUBMITS: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "site_form_submits_total",
        "Form submissions by form and outcome",
        &["form", "outcome"]
    )
    .expect("register form submit counter")
});

pub async fn render() -> (StatusCode, String) {
    let metric_families = prometheus::gather();
    let mut buf = Vec::new();
    if let Err(e) = TextEncoder::new().encode(&metric_families, &mut buf) {
        return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
    }
    match String::from_utf8(buf) {
        Ok(body) => (StatusCode::OK, body),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}
