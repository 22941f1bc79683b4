//! Engine boundary for the report facade.
//!
//! The reporting engine proper is a pre-existing external program treated
//! as a black box. This crate owns the narrow interface the HTTP facade
//! consumes and everything around it:
//!
//! - [`ReportEngine`]: the trait the facade delegates to
//! - [`IntegrationConfig`]: the directory layout handed to the engine
//! - [`ProcessEngine`]: the shipped implementation, driving the configured
//!   renderer command as a subprocess
//! - [`discovery`]: report design enumeration

pub mod config;
pub mod discovery;
pub mod engine;
pub mod process;

pub use config::IntegrationConfig;
pub use engine::{validate_file_name, ReportEngine};
pub use process::ProcessEngine;
