//! # report_core: Foundation Types for the Report Facade
//!
//! ## Foundation Layer Role
//!
//! report_core is the bottom layer of the workspace, providing:
//! - The render-request descriptor and output formats (`types::render`)
//! - Report discovery records (`types::reference`)
//! - Error types: `EngineError`, `EngineInitError` (`types::error`)
//! - POST-body parameter parsing (`params`)
//!
//! ## Zero Dependency Principle
//!
//! The foundation layer has no dependencies on other report_* crates and no
//! async or I/O code, with minimal external dependencies:
//! - serde: Serialisation of the wire types
//! - thiserror: Error derivation
//!
//! ## Usage Examples
//!
//! ```rust
//! use report_core::params::parse_parameter_lines;
//! use report_core::types::{RenderFormat, RenderRequest};
//!
//! let mut request = RenderRequest::new("overview.rptdesign");
//! request.parameters = parse_parameter_lines("region=EMEA;year=2024");
//!
//! assert_eq!(request.format, RenderFormat::Html);
//! assert_eq!(request.output_file_name(), "overview.html");
//! assert_eq!(request.parameters["region"], "EMEA");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod params;
pub mod types;
