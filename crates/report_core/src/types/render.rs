//! Render-request descriptor and output formats.
//!
//! A [`RenderRequest`] is constructed per HTTP request, handed to the
//! reporting engine, and discarded once the response has been produced.
//! Nothing here is persisted.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Output formats understood by the reporting engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    /// HTML output, served inline by the facade.
    #[default]
    Html,
    /// PDF output.
    Pdf,
}

impl RenderFormat {
    /// Format token passed on the renderer command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderFormat::Html => "html",
            RenderFormat::Pdf => "pdf",
        }
    }

    /// File extension of the rendered output.
    pub fn extension(&self) -> &'static str {
        match self {
            RenderFormat::Html => "html",
            RenderFormat::Pdf => "pdf",
        }
    }

    /// Content type the rendered output is served with.
    pub fn content_type(&self) -> &'static str {
        match self {
            RenderFormat::Html => "text/html",
            RenderFormat::Pdf => "application/pdf",
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-request descriptor handed to the reporting engine.
///
/// Carries the report identifier, the requested output format, the base URL
/// the engine uses for embedded image links, and the report parameters.
/// Whether the identifier names an existing report design is enforced by the
/// engine, not by this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    /// Design file name as supplied by the caller.
    pub report_name: String,
    /// Requested output format.
    pub format: RenderFormat,
    /// Base URL the engine embeds for image links in the rendered output.
    pub image_base_url: String,
    /// Report parameter name to string value.
    pub parameters: HashMap<String, String>,
}

impl RenderRequest {
    /// Descriptor with the defaults: HTML output, no image base URL, no
    /// parameters.
    pub fn new(report_name: impl Into<String>) -> Self {
        Self {
            report_name: report_name.into(),
            format: RenderFormat::default(),
            image_base_url: String::new(),
            parameters: HashMap::new(),
        }
    }

    /// Set the output format.
    pub fn with_format(mut self, format: RenderFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the base URL for embedded image links.
    pub fn with_image_base_url(mut self, image_base_url: impl Into<String>) -> Self {
        self.image_base_url = image_base_url.into();
        self
    }

    /// Output file name the render produces: the design-file stem plus the
    /// format's extension.
    pub fn output_file_name(&self) -> String {
        let stem = self
            .report_name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(&self.report_name);
        format!("{}.{}", stem, self.format.extension())
    }
}
