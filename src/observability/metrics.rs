//! Backend request metrics.
//!
//! # Metrics
//! - `pokket_backend_requests_total` (counter): calls by endpoint and outcome

/// Outcome label for a backend call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    HttpError,
    TransportError,
}

impl Outcome {
    fn as_str(self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::HttpError => "http_error",
            Outcome::TransportError => "transport_error",
        }
    }
}

pub fn record_backend_request(endpoint: &'static str, outcome: Outcome) {
    metrics::counter!(
        "pokket_backend_requests_total",
        "endpoint" => endpoint,
        "outcome" => outcome.as_str()
    )
    .increment(1);
}
