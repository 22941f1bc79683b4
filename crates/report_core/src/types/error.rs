//! Error types for the engine boundary.
//!
//! This module provides:
//! - `EngineInitError`: Failures while bringing the reporting engine up
//! - `EngineError`: Per-request rendering and file-access failures

use std::path::PathBuf;

use thiserror::Error;

/// Failures while bringing the reporting engine up.
///
/// Initialization is attempted once. A failure is logged and leaves the
/// facade permanently without an engine; callers do not retry.
#[derive(Debug, Error)]
pub enum EngineInitError {
    /// Report design directory is missing or not a directory.
    #[error("report directory {0} does not exist")]
    MissingReportDir(PathBuf),

    /// Output or image directory could not be prepared.
    #[error("failed to prepare output directory {dir}: {source}")]
    OutputDir {
        /// Directory that could not be created.
        dir: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// No renderer command is configured.
    #[error("no renderer command configured")]
    MissingRenderer,
}

/// Per-request engine failures.
///
/// The HTTP boundary folds every variant into the same 400 response; the
/// distinction exists for logs and tests, not for clients.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Report name does not resolve to a design file.
    #[error("report {0} is not a known report design")]
    UnknownReport(String),

    /// Report name contains path components and was rejected.
    #[error("invalid report name: {0}")]
    InvalidReportName(String),

    /// The renderer command could not be spawned.
    #[error("failed to launch renderer {command}: {source}")]
    RendererSpawn {
        /// Configured renderer command.
        command: String,
        /// Underlying spawn failure.
        #[source]
        source: std::io::Error,
    },

    /// The renderer ran but exited unsuccessfully.
    #[error("renderer exited with {status}: {stderr}")]
    RendererFailed {
        /// Renderer exit status.
        status: String,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// The renderer reported success but the output file is absent.
    #[error("rendered output {0} was not produced")]
    OutputMissing(String),

    /// Underlying file access failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
