//! Report design discovery.

use std::path::Path;

use report_core::types::{EngineError, ReportReference};

/// File extension of report design files.
pub const DESIGN_EXTENSION: &str = "rptdesign";

/// Scan `report_dir` for design files.
///
/// Non-design files and entries with non-UTF-8 names are skipped. The
/// result is sorted by file name so the discovery endpoint is stable.
pub fn scan_report_dir(report_dir: &Path) -> Result<Vec<ReportReference>, EngineError> {
    let mut references = Vec::new();
    for entry in std::fs::read_dir(report_dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some(DESIGN_EXTENSION) {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        let title = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(file_name);
        references.push(ReportReference::new(file_name, title));
    }
    references.sort_by(|a, b| a.report_file_name.cmp(&b.report_file_name));
    Ok(references)
}
