// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Disk-backed upload store using cacache.
//!
//! Every upload gets a fresh v4 UUID. The bytes live under `upload:{id}`
//! and a small JSON record under `upload:{id}:meta`.

use crate::error::ApiError;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Descriptive data kept next to an uploaded image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadMeta {
    pub file_name: String,
    pub content_type: Option<String>,
    pub size: usize,
}

/// An uploaded image read back from the store.
#[derive(Debug, Clone)]
pub struct StoredImage {
    pub meta: UploadMeta,
    pub data: Bytes,
}

/// Upload store rooted at a directory.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Create a store in the specified directory.
    pub async fn new(dir: &str) -> Self {
        let path = PathBuf::from(dir);

        if let Err(e) = tokio::fs::create_dir_all(&path).await {
            tracing::warn!(
                error = %e,
                path = %path.display(),
                "Failed to create upload directory"
            );
        }

        Self { dir: path }
    }

    fn data_key(id: &Uuid) -> String {
        format!("upload:{}", id)
    }

    fn meta_key(id: &Uuid) -> String {
        format!("upload:{}:meta", id)
    }

    /// Store an image and return its new identifier.
    pub async fn put(
        &self,
        file_name: &str,
        content_type: Option<&str>,
        data: &[u8],
    ) -> Result<String, ApiError> {
        let id = Uuid::new_v4();
        let meta = UploadMeta {
            file_name: sanitize_file_name(file_name),
            content_type: content_type.map(str::to_string),
            size: data.len(),
        };

        cacache::write(&self.dir, Self::data_key(&id), data).await?;
        cacache::write(&self.dir, Self::meta_key(&id), serde_json::to_vec(&meta)?).await?;

        tracing::debug!(image_id = %id, size = data.len(), file_name = %meta.file_name, "Stored upload");
        Ok(id.to_string())
    }

    /// Read an image back. Ids that are not UUIDs are simply not found.
    pub async fn get(&self, image_id: &str) -> Result<Option<StoredImage>, ApiError> {
        let Ok(id) = Uuid::parse_str(image_id) else {
            return Ok(None);
        };

        let data = match cacache::read(&self.dir, Self::data_key(&id)).await {
            Ok(data) => data,
            Err(cacache::Error::EntryNotFound(_, _)) => return Ok(None),
            Err(e) => return Err(ApiError::Storage(e.to_string())),
        };

        let meta = match cacache::read(&self.dir, Self::meta_key(&id)).await {
            Ok(raw) => serde_json::from_slice(&raw)?,
            // Bytes without a record are still usable
            Err(cacache::Error::EntryNotFound(_, _)) => UploadMeta {
                file_name: format!("{}.jpg", id),
                content_type: None,
                size: data.len(),
            },
            Err(e) => return Err(ApiError::Storage(e.to_string())),
        };

        Ok(Some(StoredImage {
            meta,
            data: Bytes::from(data),
        }))
    }
}

/// Keep only the final path component of a client-supplied name.
fn sanitize_file_name(name: &str) -> String {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();
    if base.is_empty() {
        "upload".to_string()
    } else {
        base.to_string()
    }
}
