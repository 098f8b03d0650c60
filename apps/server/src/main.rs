// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RoomAI Server - Room redesign API.
//!
//! Serves the material picker and brokers design generation:
//!
//! - Rule-based material recommendations per surface and room type
//! - Photo uploads into a disk-backed store
//! - Design generation and room classification through an external AI
//!   service, or a local mock
//!
//! # Endpoints
//!
//! - `GET /api/v1/health` - Health check
//! - `GET /api/v1/materials?type=&roomType=` - Recommended materials (also at `/materials`)
//! - `GET /api/v1/materials/:id` - Single catalog entry
//! - `GET /api/v1/palettes` - Color palettes
//! - `POST /api/v1/upload` - Upload a room photo
//! - `GET /api/v1/uploads/:image_id` - Retrieve an uploaded photo
//! - `POST /api/v1/generate` - Generate a redesigned image
//! - `POST /api/v1/classify` - Detect the room type of a photo

use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use roomai_core::RecommendationEngine;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};

mod config;
mod error;
mod routes;
mod services;
mod types;

use config::Config;
use services::{DesignGenerator, UploadStore};

/// Headroom for multipart framing on top of the file size limit.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RecommendationEngine>,
    pub uploads: Arc<UploadStore>,
    pub generator: Arc<DesignGenerator>,
    pub config: Arc<Config>,
}

/// Build the router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_file_size_bytes() + MULTIPART_OVERHEAD_BYTES;
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    Router::new()
        // Root endpoint - API information
        .route("/", get(routes::health::info))
        .route("/api/v1/health", get(routes::health::check))
        // Material picker
        .route("/materials", get(routes::catalog::list_materials))
        .route("/api/v1/materials", get(routes::catalog::list_materials))
        .route("/api/v1/materials/:id", get(routes::catalog::get_material))
        .route("/api/v1/palettes", get(routes::catalog::list_palettes))
        // Uploads
        .route("/api/v1/upload", post(routes::uploads::upload_image))
        .route("/api/v1/uploads/:image_id", get(routes::uploads::get_image))
        // AI collaborators
        .route("/api/v1/generate", post(routes::design::generate))
        .route("/api/v1/classify", post(routes::design::classify))
        // Middleware
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info,tower_http=debug,roomai_server=debug".into());
    if std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json") {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).pretty().init();
    }

    let config = Config::from_env();

    tracing::info!(
        port = config.port,
        upload_dir = %config.upload_dir,
        max_file_size_mb = config.max_file_size_mb,
        use_local_mock = config.use_local_mock,
        "Starting RoomAI Server"
    );

    let engine = services::load_engine(config.materials_file.as_deref())
        .await
        .context("failed to build the recommendation engine")?;
    let uploads = UploadStore::new(&config.upload_dir).await;
    let generator = DesignGenerator::from_config(&config);

    let state = AppState {
        engine: Arc::new(engine),
        uploads: Arc::new(uploads),
        generator: Arc::new(generator),
        config: Arc::new(config.clone()),
    };

    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
