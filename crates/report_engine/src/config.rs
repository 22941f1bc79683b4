//! Directory layout and renderer command handed to the engine.

use std::path::PathBuf;

/// Directory layout and renderer command the engine operates with.
///
/// Report designs are read from `report_dir`; rendered output lands in
/// `output_dir`; embedded images go to [`IntegrationConfig::image_dir`]
/// beneath it, where the facade serves them from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrationConfig {
    /// Directory holding report design files.
    pub report_dir: PathBuf,
    /// Directory rendered output is written to.
    pub output_dir: PathBuf,
    /// External renderer command invoked per render.
    pub renderer_command: String,
}

impl IntegrationConfig {
    /// Create a configuration for the given directories and renderer.
    pub fn new(
        report_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        renderer_command: impl Into<String>,
    ) -> Self {
        Self {
            report_dir: report_dir.into(),
            output_dir: output_dir.into(),
            renderer_command: renderer_command.into(),
        }
    }

    /// Directory embedded images are written to and served from.
    pub fn image_dir(&self) -> PathBuf {
        self.output_dir.join("images")
    }
}
