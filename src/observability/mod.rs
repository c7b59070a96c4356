//! Observability helpers for the Slack client.

pub mod logging;

pub use logging::*;
