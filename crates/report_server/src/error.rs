//! Error translation at the HTTP boundary.
//!
//! Any failure while handling a report request is folded into a uniform
//! HTTP 400 whose body is an HTML fragment embedding the error message.
//! Requests that arrive while the engine never initialized are refused
//! with 503 before the engine is touched. No distinction is made between
//! client errors and engine-internal errors beyond that.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use report_core::types::EngineError;
use thiserror::Error;

/// Errors surfaced by the facade handlers.
#[derive(Debug, Error)]
pub enum FacadeError {
    /// Engine initialization failed at startup; requests are refused
    /// without touching the engine.
    #[error("Report server not initialized. Please check the server logs for further details.")]
    Uninitialized,

    /// The engine rejected or failed the request.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Requested image is not present in the image directory.
    #[error("Image {0} doesn't exist")]
    ImageNotFound(String),

    /// Rendered output could not be read back for serving.
    #[error("failed to read rendered output {name}: {source}")]
    OutputRead {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

impl FacadeError {
    fn status(&self) -> StatusCode {
        match self {
            FacadeError::Uninitialized => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for FacadeError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Error processing report");

        let body = format!(
            "<div style='font-family:sans-serif; padding:10px;'>\
             <h3>Unable to process report</h3>{}</div>",
            self
        );
        (self.status(), Html(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[test]
    fn test_engine_errors_map_to_400() {
        let err = FacadeError::Engine(EngineError::UnknownReport("ghost.rptdesign".to_string()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = FacadeError::ImageNotFound("chart.png".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_uninitialized_maps_to_503() {
        assert_eq!(
            FacadeError::Uninitialized.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn test_response_is_html_fragment_with_message() {
        let err = FacadeError::Engine(EngineError::UnknownReport("ghost.rptdesign".to_string()));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/html"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = std::str::from_utf8(&body).unwrap();
        assert!(body.contains("<h3>Unable to process report</h3>"));
        assert!(body.contains("ghost.rptdesign is not a known report design"));
    }

    #[tokio::test]
    async fn test_uninitialized_response_carries_fixed_message() {
        let response = FacadeError::Uninitialized.into_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = std::str::from_utf8(&body).unwrap();
        assert!(body.contains("Report server not initialized"));
    }
}
