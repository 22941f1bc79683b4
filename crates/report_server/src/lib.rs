//! HTTP facade for the reporting engine.
//!
//! This crate exposes report rendering, embedded-image retrieval, and
//! report discovery over HTTP, delegating all substantive work to the
//! engine behind [`report_engine::ReportEngine`]. The facade's own logic
//! is limited to a single engine-initialization attempt at startup (with
//! graceful degradation when the engine is unavailable), translation of
//! request data into render descriptors, and translation of engine
//! outputs back into responses.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
