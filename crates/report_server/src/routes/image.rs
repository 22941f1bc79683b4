//! Embedded image retrieval.
//!
//! Rendered HTML links images back through
//! `GET /report/view/image/{file_name}`; this handler serves them raw
//! from the engine's image directory.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

use report_engine::validate_file_name;

use super::AppState;
use crate::error::FacadeError;

/// Build the image routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/report/view/image/{file_name}", get(get_image))
}

/// GET /report/view/image/{file_name} - Serve a rendered embedded image.
async fn get_image(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> Result<impl IntoResponse, FacadeError> {
    let engine = state.engine()?;
    validate_file_name(&file_name)?;

    let image_path = engine.integration_config().image_dir().join(&file_name);
    let bytes = tokio::fs::read(&image_path)
        .await
        .map_err(|_| FacadeError::ImageNotFound(image_path.display().to_string()))?;

    Ok(([(header::CONTENT_TYPE, content_type_for(&file_name))], bytes))
}

/// Content type from the image file extension.
fn content_type_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
