// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Design generation and room classification.
//!
//! Both are delegated to external AI services. In mock mode fixed answers
//! are returned so the UI can be developed without those services.

use crate::config::Config;
use crate::error::ApiError;
use crate::services::uploads::StoredImage;
use crate::types::{GenerateResponse, RoomClassification, RoomEditRequest};
use reqwest::multipart::{Form, Part};
use roomai_core::SurfaceMode;
use serde_json::{Map, Value};

/// Room type assumed when classification is unavailable.
const DEFAULT_ROOM_TYPE: &str = "living_room";

/// Mock or remote generator, chosen at startup.
#[derive(Debug, Clone)]
pub enum DesignGenerator {
    Mock,
    Remote(RemoteAiClient),
}

impl DesignGenerator {
    pub fn from_config(config: &Config) -> Self {
        if config.use_local_mock {
            return DesignGenerator::Mock;
        }

        if config.segmentation_api_url.is_none() {
            tracing::warn!("AI_SEGMENTATION_URL not set; generation requests will fail");
        }
        if config.room_classifier_api_url.is_none() {
            tracing::warn!("AI_ROOM_CLASSIFIER_URL not set; classification returns the default room type");
        }

        DesignGenerator::Remote(RemoteAiClient::new(
            config.segmentation_api_url.clone(),
            config.room_classifier_api_url.clone(),
        ))
    }

    pub fn is_mock(&self) -> bool {
        matches!(self, DesignGenerator::Mock)
    }

    /// Render the requested edit onto an uploaded image.
    pub async fn generate(
        &self,
        request: &RoomEditRequest,
        mode: SurfaceMode,
        image: StoredImage,
    ) -> Result<GenerateResponse, ApiError> {
        match self {
            DesignGenerator::Mock => Ok(mock_generation(request, mode)),
            DesignGenerator::Remote(client) => client.generate(request, mode, image).await,
        }
    }

    /// Guess the room type shown in an image. Never fails.
    pub async fn classify(&self, image: StoredImage) -> RoomClassification {
        match self {
            DesignGenerator::Mock => RoomClassification {
                room_type: DEFAULT_ROOM_TYPE.to_string(),
                confidence: 0.95,
            },
            DesignGenerator::Remote(client) => match client.classify(image).await {
                Ok(classification) => classification,
                Err(e) => {
                    tracing::warn!(error = %e, "Room classification failed, using default");
                    RoomClassification {
                        room_type: DEFAULT_ROOM_TYPE.to_string(),
                        confidence: 0.5,
                    }
                }
            },
        }
    }
}

fn mock_generation(request: &RoomEditRequest, mode: SurfaceMode) -> GenerateResponse {
    let mut metadata = Map::new();
    metadata.insert("surfaceMode".into(), Value::from(mode.as_str()));
    metadata.insert("roomType".into(), Value::from(request.room_type.as_str()));
    metadata.insert("material".into(), Value::from(request.selected_material.as_str()));
    metadata.insert("color".into(), Value::from(request.selected_color.as_str()));
    metadata.insert("processingTime".into(), Value::from("2.5s"));

    GenerateResponse {
        success: true,
        result_image_url: Some("/images/mock-result.jpg".to_string()),
        mask_url: Some("/images/mock-mask.png".to_string()),
        metadata: Some(metadata),
        error_message: None,
    }
}

/// HTTP client for the segmentation and classifier services.
#[derive(Debug, Clone)]
pub struct RemoteAiClient {
    segmentation_url: Option<String>,
    classifier_url: Option<String>,
    http: reqwest::Client,
}

impl RemoteAiClient {
    pub fn new(segmentation_url: Option<String>, classifier_url: Option<String>) -> Self {
        Self {
            segmentation_url,
            classifier_url,
            http: reqwest::Client::new(),
        }
    }

    fn image_part(image: StoredImage) -> Part {
        Part::bytes(image.data.to_vec()).file_name(image.meta.file_name)
    }

    async fn generate(
        &self,
        request: &RoomEditRequest,
        mode: SurfaceMode,
        image: StoredImage,
    ) -> Result<GenerateResponse, ApiError> {
        let url = self
            .segmentation_url
            .as_deref()
            .ok_or_else(|| ApiError::Upstream("Segmentation service not configured".into()))?;

        let form = Form::new()
            .part("image", Self::image_part(image))
            .text("surfaceMode", mode.as_str())
            .text("roomType", request.room_type.clone())
            .text("material", request.selected_material.clone())
            .text("color", request.selected_color.clone());

        let resp = self.http.post(url).multipart(form).send().await?;

        if !resp.status().is_success() {
            return Err(ApiError::Upstream(format!(
                "Segmentation service returned status {}",
                resp.status()
            )));
        }

        let body: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Upstream(format!("Invalid response format: {e}")))?;

        tracing::info!(success = body.success, "Design generated");
        Ok(body)
    }

    async fn classify(&self, image: StoredImage) -> Result<RoomClassification, ApiError> {
        let url = self
            .classifier_url
            .as_deref()
            .ok_or_else(|| ApiError::Upstream("Room classifier not configured".into()))?;

        let form = Form::new().part("image", Self::image_part(image));
        let resp = self.http.post(url).multipart(form).send().await?;

        if !resp.status().is_success() {
            return Err(ApiError::Upstream(format!(
                "Room classifier returned status {}",
                resp.status()
            )));
        }

        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::uploads::UploadMeta;
    use bytes::Bytes;

    /// Local stand-in for an AI service that always fails.
    async fn failing_service() -> String {
        let app = axum::Router::new().route(
            "/",
            axum::routing::post(|| async { axum::http::StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        format!("http://{}/", addr)
    }

    fn image() -> StoredImage {
        StoredImage {
            meta: UploadMeta {
                file_name: "room.jpg".into(),
                content_type: None,
                size: 3,
            },
            data: Bytes::from_static(b"img"),
        }
    }

    #[tokio::test]
    async fn test_mock_generation() {
        let request = RoomEditRequest {
            image_id: "id".into(),
            room_type: "kitchen".into(),
            selected_material: "ceramic_wall_tile".into(),
            selected_color: "#9CA3AF".into(),
            ..Default::default()
        };

        let response = DesignGenerator::Mock
            .generate(&request, SurfaceMode::Walls, image())
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.result_image_url.as_deref(), Some("/images/mock-result.jpg"));
        assert_eq!(response.mask_url.as_deref(), Some("/images/mock-mask.png"));

        let metadata = response.metadata.unwrap();
        assert_eq!(metadata["surfaceMode"], "walls");
        assert_eq!(metadata["roomType"], "kitchen");
        assert_eq!(metadata["material"], "ceramic_wall_tile");
        assert_eq!(metadata["processingTime"], "2.5s");
    }

    #[tokio::test]
    async fn test_mock_classification() {
        let classification = DesignGenerator::Mock.classify(image()).await;
        assert_eq!(classification.room_type, "living_room");
        assert_eq!(classification.confidence, 0.95);
    }

    #[tokio::test]
    async fn test_unconfigured_remote() {
        let remote = DesignGenerator::Remote(RemoteAiClient::new(None, None));
        assert!(!remote.is_mock());

        let err = remote
            .generate(&RoomEditRequest::default(), SurfaceMode::Both, image())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Upstream(_)));

        // Classification degrades to the default instead of failing
        let classification = remote.classify(image()).await;
        assert_eq!(classification.room_type, "living_room");
        assert_eq!(classification.confidence, 0.5);
    }

    #[tokio::test]
    async fn test_remote_error_status() {
        let url = failing_service().await;
        let remote = DesignGenerator::Remote(RemoteAiClient::new(Some(url.clone()), Some(url)));

        let err = remote
            .generate(&RoomEditRequest::default(), SurfaceMode::Walls, image())
            .await
            .unwrap_err();
        assert!(matches!(&err, ApiError::Upstream(message) if message.contains("500")));
        assert_eq!(
            err.status_and_code(),
            (axum::http::StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR")
        );

        let classification = remote.classify(image()).await;
        assert_eq!(classification.room_type, "living_room");
        assert_eq!(classification.confidence, 0.5);
    }
}
