//! Domain types and logic shared across the ziranli backend crates.
//!
//! This crate has no internal dependencies so it can be used by both the
//! persistence layer and the API layer without cycles. It holds the shared
//! identifier/timestamp aliases, the domain error taxonomy, scan-key
//! decoding for the QR resolver, and the facet filter value type for
//! catalog queries.

pub mod error;
pub mod facet;
pub mod qr;
pub mod types;
