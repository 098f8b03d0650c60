// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request types for the API.

use serde::Deserialize;

/// Query string of the materials endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialsQuery {
    /// Raw surface token (`walls`, `flooring`, ...).
    #[serde(rename = "type", default = "default_surface_type")]
    pub surface_type: String,

    /// Raw room type; absent selects the fallback list.
    #[serde(default)]
    pub room_type: Option<String>,
}

fn default_surface_type() -> String {
    "flooring".to_string()
}

/// Parameters of a design generation request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomEditRequest {
    /// Identifier returned by the upload endpoint.
    pub image_id: String,
    /// `walls`, `floors` or `both`; validated by the handler.
    pub surface_mode: String,
    /// Room floor area in square meters.
    pub room_area_m2: f64,
    pub room_type: String,
    /// Material id picked from the recommendations.
    pub selected_material: String,
    /// Hex color picked from a palette.
    pub selected_color: String,
    /// Palette category the color came from.
    pub color_palette: String,
}

impl Default for RoomEditRequest {
    fn default() -> Self {
        Self {
            image_id: String::new(),
            surface_mode: "both".to_string(),
            room_area_m2: 0.0,
            room_type: "living_room".to_string(),
            selected_material: String::new(),
            selected_color: String::new(),
            color_palette: String::new(),
        }
    }
}
