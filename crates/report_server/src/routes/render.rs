//! Report rendering endpoints.
//!
//! `GET /report/render/{file_name}` renders a report and serves the
//! resulting HTML inline. `POST /report/render/{file_name}` triggers a
//! render with parameters taken from the request body and returns an
//! empty 200. All substantive work happens in the engine; these handlers
//! only translate between HTTP and the render descriptor.

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;

use report_core::params;
use report_core::types::RenderRequest;

use super::AppState;
use crate::error::FacadeError;

/// Build the render routes
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/report/render/{file_name}",
        get(view_report_html).post(render_report_html),
    )
}

/// GET /report/render/{file_name} - Render a report and serve it as HTML.
async fn view_report_html(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, FacadeError> {
    let engine = state.engine()?;
    let request = default_render_request(&state, &file_name, &headers);

    let output_name = engine.view(&request).await?;
    let output_path = engine.integration_config().output_dir.join(&output_name);
    let content = tokio::fs::read_to_string(&output_path)
        .await
        .map_err(|source| FacadeError::OutputRead {
            name: output_name,
            source,
        })?;

    Ok(Html(content))
}

/// POST /report/render/{file_name} - Trigger a render with posted parameters.
///
/// The body is lines of `key=value` pairs separated by `;`.
async fn render_report_html(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
    headers: HeaderMap,
    body: String,
) -> Result<impl IntoResponse, FacadeError> {
    let engine = state.engine()?;
    let mut request = default_render_request(&state, &file_name, &headers);
    request
        .parameters
        .extend(params::parse_parameter_lines(&body));

    let output_name = engine.render(&request).await?;
    tracing::debug!(
        output = %engine.integration_config().output_dir.join(&output_name).display(),
        "Rendered report"
    );

    Ok((StatusCode::OK, [(header::CONTENT_TYPE, "text/html")], ""))
}

/// Descriptor with the facade defaults: HTML output, image links routed
/// back through this server.
fn default_render_request(state: &AppState, file_name: &str, headers: &HeaderMap) -> RenderRequest {
    RenderRequest::new(file_name).with_image_base_url(build_image_url(state, headers))
}

/// Base URL the engine embeds for image links, derived from the request's
/// Host header with the configured bind address as fallback.
fn build_image_url(state: &AppState, headers: &HeaderMap) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| state.config.socket_addr());
    format!("http://{host}/report/view/image")
}
