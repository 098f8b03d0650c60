// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Server configuration loaded from environment variables.

use std::path::PathBuf;
use std::str::FromStr;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on.
    pub port: u16,
    /// Directory for the upload store.
    pub upload_dir: String,
    /// Maximum upload size in MB.
    pub max_file_size_mb: usize,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Answer generation and classification locally instead of calling the AI services.
    pub use_local_mock: bool,
    /// Endpoint of the segmentation / design generation service.
    pub segmentation_api_url: Option<String>,
    /// Endpoint of the room classification service.
    pub room_classifier_api_url: Option<String>,
    /// Optional JSON catalog replacing the embedded materials and rules.
    pub materials_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            port: env_or("PORT", 8080),
            upload_dir: std::env::var("UPLOAD_DIR").unwrap_or_else(|_| {
                // Docker images ship /app/uploads; local dev keeps files next to the server
                if std::path::Path::new("/.dockerenv").exists() {
                    "/app/uploads".into()
                } else {
                    std::env::current_dir()
                        .ok()
                        .and_then(|dir| dir.join(".uploads").to_str().map(|s| s.to_string()))
                        .unwrap_or_else(|| "./.uploads".into())
                }
            }),
            max_file_size_mb: env_or("MAX_FILE_SIZE_MB", 10),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 120),
            use_local_mock: env_or("AI_USE_LOCAL_MOCK", true),
            segmentation_api_url: env_opt("AI_SEGMENTATION_URL"),
            room_classifier_api_url: env_opt("AI_ROOM_CLASSIFIER_URL"),
            materials_file: env_opt("MATERIALS_FILE").map(PathBuf::from),
        }
    }

    /// Upload size limit in bytes.
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }
}

/// Parse a variable, falling back to `default` when unset or malformed.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Non-empty variable value.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
