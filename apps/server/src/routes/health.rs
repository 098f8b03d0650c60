// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Health check endpoint.

use crate::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub service: &'static str,
    pub materials: usize,
    pub ai_mode: &'static str,
}

/// API information response.
#[derive(Debug, Serialize)]
pub struct ApiInfoResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub endpoints: Vec<EndpointInfo>,
}

/// Endpoint information.
#[derive(Debug, Serialize)]
pub struct EndpointInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

/// GET /api/v1/health - Health check endpoint.
pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        service: "roomai-server",
        materials: state.engine.catalog().len(),
        ai_mode: if state.generator.is_mock() { "mock" } else { "remote" },
    })
}

/// GET / - API information endpoint.
pub async fn info() -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse {
        service: "roomai-server",
        version: env!("CARGO_PKG_VERSION"),
        description: "Room redesign API with rule-based material recommendations",
        endpoints: vec![
            EndpointInfo {
                method: "GET",
                path: "/api/v1/health",
                description: "Health check endpoint",
            },
            EndpointInfo {
                method: "GET",
                path: "/api/v1/materials?type=&roomType=",
                description: "Materials recommended for a surface and room type",
            },
            EndpointInfo {
                method: "GET",
                path: "/api/v1/materials/:id",
                description: "Single catalog entry",
            },
            EndpointInfo {
                method: "GET",
                path: "/api/v1/palettes",
                description: "Color palettes",
            },
            EndpointInfo {
                method: "POST",
                path: "/api/v1/upload",
                description: "Upload a room photo (multipart field 'file')",
            },
            EndpointInfo {
                method: "GET",
                path: "/api/v1/uploads/:image_id",
                description: "Retrieve an uploaded photo",
            },
            EndpointInfo {
                method: "POST",
                path: "/api/v1/generate",
                description: "Generate a redesigned image with mask overlay",
            },
            EndpointInfo {
                method: "POST",
                path: "/api/v1/classify",
                description: "Detect the room type of a photo",
            },
        ],
    })
}
