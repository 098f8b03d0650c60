// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Material picker endpoints.

use crate::error::ApiError;
use crate::types::{ApiResponse, MaterialView, MaterialsQuery};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use roomai_core::{builtin_palettes, ColorPalette};

/// GET /api/v1/materials - Materials for a surface and room type.
///
/// `type` defaults to `flooring`; a missing `roomType` returns the full list
/// for the surface.
pub async fn list_materials(
    State(state): State<AppState>,
    Query(query): Query<MaterialsQuery>,
) -> Json<ApiResponse<Vec<MaterialView>>> {
    let result = state
        .engine
        .explain(&query.surface_type, query.room_type.as_deref());

    tracing::debug!(
        surface = %result.surface,
        room_type = %result.room_type,
        source = ?result.source,
        count = result.materials.len(),
        "Materials recommended"
    );
    if result.surface.is_unrecognized() {
        tracing::debug!(raw = %query.surface_type, "Unrecognized surface token, using floor list");
    }

    let data = result.materials.into_iter().map(MaterialView::from).collect();
    Json(ApiResponse::ok(data))
}

/// GET /api/v1/materials/:id - Single catalog entry.
pub async fn get_material(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MaterialView>>, ApiError> {
    state
        .engine
        .catalog()
        .get(&id)
        .map(|material| Json(ApiResponse::ok(MaterialView::from(material))))
        .ok_or_else(|| ApiError::NotFound(format!("Material not found: {}", id)))
}

/// GET /api/v1/palettes - Color palettes.
pub async fn list_palettes() -> Json<ApiResponse<Vec<ColorPalette>>> {
    Json(ApiResponse::ok(builtin_palettes()))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{get_json, test_app};
    use axum::http::StatusCode;
    use serde_json::Value;

    fn ids(body: &Value) -> Vec<&str> {
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["id"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_bathroom_walls() {
        let (app, _dir) = test_app().await;
        let (status, body) = get_json(&app, "/api/v1/materials?type=walls&roomType=bathroom").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(
            ids(&body),
            ["ceramic_wall_tile", "porcelain_wall_tile", "bathroom_mold_resistant_paint"]
        );

        let first = &body["data"][0];
        assert_eq!(first["name"], "Ceramic Wall Tile");
        assert_eq!(first["type"], "wall");
        assert_eq!(first["textureUrl"], "/images/materials/ceramic_wall.jpg");
    }

    #[tokio::test]
    async fn test_defaults_to_flooring_fallback() {
        let (app, _dir) = test_app().await;
        let (status, body) = get_json(&app, "/materials").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body).len(), 8);
        assert_eq!(ids(&body)[0], "porcelain_tile_matte_R10");
        assert!(body["data"]
            .as_array()
            .unwrap()
            .iter()
            .all(|m| m["type"] == "floor"));
    }

    #[tokio::test]
    async fn test_office_alias() {
        let (app, _dir) = test_app().await;
        let (_, aliased) = get_json(&app, "/api/v1/materials?type=walls&roomType=office").await;
        let (_, canonical) = get_json(&app, "/api/v1/materials?type=wall&roomType=home_office").await;
        assert_eq!(aliased, canonical);
    }

    #[tokio::test]
    async fn test_get_material() {
        let (app, _dir) = test_app().await;

        let (status, body) = get_json(&app, "/api/v1/materials/carpet_soft").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Soft Carpet");

        let (status, body) = get_json(&app, "/api/v1/materials/marble").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_palettes() {
        let (app, _dir) = test_app().await;
        let (status, body) = get_json(&app, "/api/v1/palettes").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 5);
        assert_eq!(body["data"][0]["name"], "Earthy Tones");
        assert_eq!(body["data"][0]["colors"][0], "#8B6F47");
    }
}
