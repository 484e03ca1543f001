//! Receive-payment helpers.
//!
//! The receive page renders a QR code; this module produces the payload it
//! encodes. Image rendering stays in the UI.

pub mod payment_request;

pub use payment_request::{payment_request_uri, PaymentRequestError};
