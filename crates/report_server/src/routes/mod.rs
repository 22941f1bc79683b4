//! Route modules for the report server
//!
//! This module contains endpoint group-specific routers:
//! - render: Report rendering endpoints
//! - image: Embedded image retrieval
//! - discovery: Report reference listing
//! - health: Health check and monitoring endpoints

pub mod discovery;
pub mod health;
pub mod image;
pub mod render;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use report_engine::ReportEngine;

use crate::config::ServerConfig;
use crate::error::FacadeError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Engine handle; `None` when initialization failed at startup
    pub engine: Option<Arc<dyn ReportEngine>>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Arc<ServerConfig>, engine: Option<Arc<dyn ReportEngine>>) -> Self {
        Self {
            config,
            engine,
            start_time: std::time::Instant::now(),
        }
    }

    /// Engine handle, or the refusal every report endpoint returns while
    /// the engine never initialized.
    pub fn engine(&self) -> Result<&Arc<dyn ReportEngine>, FacadeError> {
        self.engine.as_ref().ok_or(FacadeError::Uninitialized)
    }
}

/// Build the main application router by merging all route modules
pub fn build_router(config: Arc<ServerConfig>, engine: Option<Arc<dyn ReportEngine>>) -> Router {
    let state = AppState::new(config, engine);

    Router::new()
        .merge(health::routes())
        .merge(render::routes())
        .merge(image::routes())
        .merge(discovery::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
