//! Renderer subprocess integration.
//!
//! [`ProcessEngine`] drives the external renderer command configured in
//! [`IntegrationConfig`]: one invocation per render request, carrying the
//! format, output path, image directory, image base URL, parameters, and
//! the design-file path. The renderer's interior is opaque to this crate;
//! only its exit status and the files it leaves behind matter.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use report_core::types::{EngineError, EngineInitError, RenderRequest, ReportReference};

use crate::config::IntegrationConfig;
use crate::discovery;
use crate::engine::{validate_file_name, ReportEngine};

/// Engine implementation backed by an external renderer command.
pub struct ProcessEngine {
    config: IntegrationConfig,
}

impl ProcessEngine {
    /// One-time engine initialization.
    ///
    /// The report directory must already exist; the output and image
    /// directories are created. A failure here leaves the facade
    /// permanently without an engine — callers do not retry.
    pub fn bootstrap(config: IntegrationConfig) -> Result<Self, EngineInitError> {
        if config.renderer_command.is_empty() {
            return Err(EngineInitError::MissingRenderer);
        }
        if !config.report_dir.is_dir() {
            return Err(EngineInitError::MissingReportDir(config.report_dir.clone()));
        }
        std::fs::create_dir_all(&config.output_dir).map_err(|source| {
            EngineInitError::OutputDir {
                dir: config.output_dir.clone(),
                source,
            }
        })?;
        std::fs::create_dir_all(config.image_dir()).map_err(|source| {
            EngineInitError::OutputDir {
                dir: config.image_dir(),
                source,
            }
        })?;

        info!(report_dir = %config.report_dir.display(), "Report dir");
        info!(output_dir = %config.output_dir.display(), "Output dir");

        Ok(Self { config })
    }

    /// Resolve the design file for a request, rejecting unknown reports.
    fn design_path(&self, request: &RenderRequest) -> Result<PathBuf, EngineError> {
        validate_file_name(&request.report_name)?;
        let path = self.config.report_dir.join(&request.report_name);
        if !path.is_file() {
            return Err(EngineError::UnknownReport(request.report_name.clone()));
        }
        Ok(path)
    }

    async fn run_renderer(&self, request: &RenderRequest) -> Result<String, EngineError> {
        let design = self.design_path(request)?;
        let output_name = request.output_file_name();
        let output_path = self.config.output_dir.join(&output_name);

        let mut command = Command::new(&self.config.renderer_command);
        command
            .arg("--format")
            .arg(request.format.as_str())
            .arg("--output")
            .arg(&output_path)
            .arg("--image-dir")
            .arg(self.config.image_dir());
        if !request.image_base_url.is_empty() {
            command.arg("--image-base-url").arg(&request.image_base_url);
        }
        for (name, value) in &request.parameters {
            command.arg("-p").arg(format!("{name}={value}"));
        }
        command.arg(&design);

        debug!(
            report = %request.report_name,
            output = %output_path.display(),
            "Invoking renderer"
        );

        let output = command.output().await.map_err(|source| {
            EngineError::RendererSpawn {
                command: self.config.renderer_command.clone(),
                source,
            }
        })?;

        if !output.status.success() {
            return Err(EngineError::RendererFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output_name)
    }
}

#[async_trait]
impl ReportEngine for ProcessEngine {
    fn integration_config(&self) -> &IntegrationConfig {
        &self.config
    }

    async fn view(&self, request: &RenderRequest) -> Result<String, EngineError> {
        let output_name = self.run_renderer(request).await?;
        if !self.config.output_dir.join(&output_name).is_file() {
            return Err(EngineError::OutputMissing(output_name));
        }
        Ok(output_name)
    }

    async fn render(&self, request: &RenderRequest) -> Result<String, EngineError> {
        self.run_renderer(request).await
    }

    fn report_references(&self) -> Result<Vec<ReportReference>, EngineError> {
        discovery::scan_report_dir(&self.config.report_dir)
    }
}
