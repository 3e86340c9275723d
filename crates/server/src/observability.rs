use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

use crate::errors::ApiError;

// Prometheus metrics (default registry)
pub static STORE_OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "customer_locations_store_operations_total",
        "Store operations handled, by entity, operation and outcome",
        &["entity", "operation", "outcome"]
    )
    .expect("register store_operations_total")
});

pub fn record(entity: &str, operation: &str, outcome: &str) {
    STORE_OPERATIONS_TOTAL
        .with_label_values(&[entity, operation, outcome])
        .inc();
}

/// `map_err` adapter that counts a failed request before it is returned.
pub fn failed<E: Into<ApiError>>(
    entity: &'static str,
    operation: &'static str,
) -> impl FnOnce(E) -> ApiError {
    move |e| {
        let err = e.into();
        record(entity, operation, err.outcome());
        err
    }
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}
