//! Report discovery endpoint.

use axum::extract::State;
use axum::response::Json;
use axum::routing::get;
use axum::Router;

use report_core::types::ReportReference;

use super::AppState;
use crate::error::FacadeError;

/// Build the discovery routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/report/config", get(get_report_config))
}

/// GET /report/config - The available report designs as a JSON array.
async fn get_report_config(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReportReference>>, FacadeError> {
    let engine = state.engine()?;
    let references = engine.report_references()?;
    Ok(Json(references))
}
