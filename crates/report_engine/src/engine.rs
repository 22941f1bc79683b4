//! The narrow interface the facade consumes.

use async_trait::async_trait;
use report_core::types::{EngineError, RenderRequest, ReportReference};

use crate::config::IntegrationConfig;

/// Interface to the reporting engine.
///
/// Implementations own report compilation, rendering, parameter binding,
/// and output-file management. The facade limits itself to translating
/// HTTP requests into [`RenderRequest`] values and engine results back
/// into responses.
#[async_trait]
pub trait ReportEngine: Send + Sync {
    /// Directory layout the engine is operating with.
    fn integration_config(&self) -> &IntegrationConfig;

    /// Render a report for interactive viewing.
    ///
    /// Returns the output file name. On success the rendered file exists
    /// under the output directory, ready to be served.
    async fn view(&self, request: &RenderRequest) -> Result<String, EngineError>;

    /// Render a report without serving the result.
    ///
    /// Returns the output file name.
    async fn render(&self, request: &RenderRequest) -> Result<String, EngineError>;

    /// Enumerate the report designs available for rendering.
    fn report_references(&self) -> Result<Vec<ReportReference>, EngineError>;
}

/// Reject file names that could resolve outside the engine directories.
///
/// Names arrive as HTTP path parameters and are joined into engine-owned
/// directories; anything with path components is refused.
pub fn validate_file_name(name: &str) -> Result<(), EngineError> {
    if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(EngineError::InvalidReportName(name.to_string()));
    }
    Ok(())
}
