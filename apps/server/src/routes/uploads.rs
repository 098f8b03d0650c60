// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Photo upload endpoints.

use crate::error::ApiError;
use crate::services::uploads::{StoredImage, UploadMeta};
use crate::types::UploadResponse;
use crate::AppState;
use axum::{
    body::Body,
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};
use bytes::Bytes;

/// File part of a multipart request.
#[derive(Debug)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl From<UploadedFile> for StoredImage {
    fn from(file: UploadedFile) -> Self {
        StoredImage {
            meta: UploadMeta {
                size: file.data.len(),
                file_name: file.file_name,
                content_type: file.content_type,
            },
            data: file.data,
        }
    }
}

/// Extract the `file` field from a multipart request, enforcing the size limit.
pub async fn extract_file(
    multipart: &mut Multipart,
    max_bytes: usize,
    max_mb: usize,
) -> Result<UploadedFile, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default();
        tracing::debug!(field_name = %field_name, "Processing multipart field");

        if field_name == "file" {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().map(str::to_string);
            let data = field.bytes().await?;

            if data.is_empty() {
                return Err(ApiError::MissingFile);
            }
            if data.len() > max_bytes {
                return Err(ApiError::FileTooLarge { max_mb });
            }

            tracing::debug!(size = data.len(), file_name = %file_name, "Extracted file from multipart");
            return Ok(UploadedFile {
                file_name,
                content_type,
                data,
            });
        }
    }

    tracing::warn!("No 'file' field found in multipart request");
    Err(ApiError::MissingFile)
}

/// POST /api/v1/upload - Store a room photo.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let file = extract_file(
        &mut multipart,
        state.config.max_file_size_bytes(),
        state.config.max_file_size_mb,
    )
    .await?;

    let image_id = state
        .uploads
        .put(&file.file_name, file.content_type.as_deref(), &file.data)
        .await?;

    tracing::info!(image_id = %image_id, size = file.data.len(), "Upload stored");

    Ok(Json(UploadResponse {
        success: true,
        image_url: format!("/api/v1/uploads/{}", image_id),
        image_id,
    }))
}

/// GET /api/v1/uploads/:image_id - Serve an uploaded photo.
pub async fn get_image(
    State(state): State<AppState>,
    Path(image_id): Path<String>,
) -> Result<Response, ApiError> {
    let image = state
        .uploads
        .get(&image_id)
        .await?
        .ok_or_else(|| ApiError::ImageNotFound(image_id.clone()))?;

    let content_type = image
        .meta
        .content_type
        .unwrap_or_else(|| "application/octet-stream".to_string());

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, image.data.len())
        .body(Body::from(image.data))
        .map_err(|e| ApiError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{multipart_request, send, test_app};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_upload_then_fetch() {
        let (app, _dir) = test_app().await;

        let (status, body) = send(
            &app,
            multipart_request("/api/v1/upload", "file", "room.jpg", b"jpeg-bytes"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let image_id = body["imageId"].as_str().unwrap();
        let image_url = body["imageUrl"].as_str().unwrap();
        assert_eq!(image_url, format!("/api/v1/uploads/{}", image_id));

        let response = crate::test_support::get_raw(&app, image_url).await;
        assert_eq!(response.0, StatusCode::OK);
        assert_eq!(response.1.as_ref(), b"jpeg-bytes");
    }

    #[tokio::test]
    async fn test_upload_without_file_field() {
        let (app, _dir) = test_app().await;
        let (status, body) = send(
            &app,
            multipart_request("/api/v1/upload", "photo", "room.jpg", b"jpeg-bytes"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MISSING_FILE");
    }

    #[tokio::test]
    async fn test_upload_empty_file() {
        let (app, _dir) = test_app().await;
        let (status, body) = send(
            &app,
            multipart_request("/api/v1/upload", "file", "room.jpg", b""),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No file uploaded");
    }

    #[tokio::test]
    async fn test_upload_too_large() {
        let (app, _dir) = test_app().await;
        let limit = 1024 * 1024;

        // Just over the file limit, still inside the body limit
        let (status, body) = send(
            &app,
            multipart_request("/api/v1/upload", "file", "room.jpg", &vec![0u8; limit + 1]),
        )
        .await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["code"], "FILE_TOO_LARGE");

        // Past the body limit, rejected while streaming
        let (status, body) = send(
            &app,
            multipart_request("/api/v1/upload", "file", "room.jpg", &vec![0u8; 3 * limit]),
        )
        .await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["code"], "FILE_TOO_LARGE");
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_unknown_image() {
        let (app, _dir) = test_app().await;
        let (status, _) = crate::test_support::get_raw(&app, "/api/v1/uploads/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
