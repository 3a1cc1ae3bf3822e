//! Logging infrastructure
//!
//! Installs the global `tracing` subscriber. Diagnostics always go to
//! stderr so stdout stays free for user-facing output.

mod subscriber;

pub use subscriber::{TelemetryError, default_filter, init_tracing};
