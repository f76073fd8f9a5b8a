//! Observability subsystem.
//!
//! Every subsystem emits `tracing` events with structured fields (network,
//! method, address); logging.rs installs the subscriber that renders them.

pub mod logging;

pub use logging::init_tracing;
