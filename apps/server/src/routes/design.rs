// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Design generation and room classification endpoints.

use crate::error::ApiError;
use crate::routes::uploads::extract_file;
use crate::types::{ApiResponse, GenerateResponse, RoomClassification, RoomEditRequest};
use crate::AppState;
use axum::{
    extract::{Multipart, State},
    Json,
};
use roomai_core::{is_known_room_type, normalize_room_type, SurfaceMode};

/// POST /api/v1/generate - Apply material and color to an uploaded photo.
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<RoomEditRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    if request.image_id.trim().is_empty() {
        return Err(ApiError::MissingImageId);
    }

    let mode = SurfaceMode::from_str(&request.surface_mode)
        .ok_or_else(|| ApiError::InvalidSurfaceMode(request.surface_mode.clone()))?;

    let image = state
        .uploads
        .get(&request.image_id)
        .await?
        .ok_or_else(|| ApiError::ImageNotFound(request.image_id.clone()))?;

    if !request.selected_material.is_empty()
        && !state.engine.catalog().contains(&request.selected_material)
    {
        tracing::warn!(
            material = %request.selected_material,
            "Generation requested with a material outside the catalog"
        );
    }

    tracing::info!(
        image_id = %request.image_id,
        surface_mode = %mode,
        room_type = %request.room_type,
        room_area_m2 = request.room_area_m2,
        material = %request.selected_material,
        palette = %request.color_palette,
        "Generating design"
    );

    let response = state.generator.generate(&request, mode, image).await?;
    Ok(Json(response))
}

/// POST /api/v1/classify - Detect the room type shown in a photo.
pub async fn classify(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<RoomClassification>>, ApiError> {
    let file = extract_file(
        &mut multipart,
        state.config.max_file_size_bytes(),
        state.config.max_file_size_mb,
    )
    .await?;

    let mut classification = state.generator.classify(file.into()).await;
    // Classifiers may answer with UI vocabulary ("office"); hand back the canonical token
    classification.room_type = normalize_room_type(Some(&classification.room_type));

    tracing::info!(
        room_type = %classification.room_type,
        confidence = classification.confidence,
        known = is_known_room_type(&classification.room_type),
        "Room classified"
    );

    Ok(Json(ApiResponse::ok(classification)))
}
