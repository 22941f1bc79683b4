//! Report discovery records.

use serde::{Deserialize, Serialize};

/// Reference to one report design available for rendering.
///
/// The discovery endpoint serialises a list of these to JSON for client
/// consumption; `report_file_name` is the identifier clients pass back to
/// the render endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportReference {
    /// Design file name, including the design extension.
    pub report_file_name: String,
    /// Human-facing title derived from the design.
    pub title: String,
}

impl ReportReference {
    /// Create a reference for a design file.
    pub fn new(report_file_name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            report_file_name: report_file_name.into(),
            title: title.into(),
        }
    }
}
