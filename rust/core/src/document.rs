// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serializable catalog configuration
//!
//! Lets a deployment replace the embedded tables with a JSON (or any serde
//! format) document:
//!
//! ```json
//! {
//!   "materials": [
//!     { "id": "oak", "name": "Oak", "surface": "floor", "textureUrl": "/oak.jpg" }
//!   ],
//!   "rules": { "bedroom": { "floor": ["oak"] } }
//! }
//! ```
//!
//! The document is validated once, when converted into an engine.

use crate::catalog::{Material, MaterialCatalog};
use crate::engine::RecommendationEngine;
use crate::error::{Error, Result};
use crate::rules::{Rule, RuleTable};
use crate::surface::SurfaceKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One catalog entry as written in configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialEntry {
    pub id: String,
    pub name: String,
    pub surface: SurfaceKind,
    pub texture_url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rooms: Vec<String>,
}

/// Catalog plus rules: `rules[room][surface] = [material ids]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub materials: Vec<MaterialEntry>,
    #[serde(default)]
    pub rules: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl CatalogDocument {
    /// Snapshot of the embedded tables, useful as a template for custom files.
    pub fn builtin() -> Self {
        let engine = RecommendationEngine::builtin();
        let materials = engine
            .catalog()
            .iter()
            .map(|m| MaterialEntry {
                id: m.id.clone(),
                name: m.name.clone(),
                surface: m.surface_kind,
                texture_url: m.texture_url.clone(),
                rooms: m.rooms.clone(),
            })
            .collect();

        let mut rules: BTreeMap<String, BTreeMap<String, Vec<String>>> = BTreeMap::new();
        for room in engine.rules().room_types() {
            for kind in [SurfaceKind::Wall, SurfaceKind::Floor] {
                if let Some(ids) = engine.rules().lookup(room, &kind.into()) {
                    rules
                        .entry(room.to_string())
                        .or_default()
                        .insert(kind.as_str().to_string(), ids.to_vec());
                }
            }
        }

        Self { materials, rules }
    }

    /// Validate and build an engine.
    ///
    /// Fails on malformed catalog entries and unknown surface keys. Rule ids
    /// missing from the catalog are accepted; see
    /// [`RecommendationEngine::dangling_ids`].
    pub fn into_engine(self) -> Result<RecommendationEngine> {
        let materials = self
            .materials
            .into_iter()
            .map(|entry| Material {
                id: entry.id,
                name: entry.name,
                surface_kind: entry.surface,
                texture_url: entry.texture_url,
                rooms: entry.rooms,
            })
            .collect();
        let catalog = MaterialCatalog::new(materials)?;

        let mut rules = Vec::new();
        for (room_type, by_surface) in self.rules {
            for (surface, ids) in by_surface {
                let kind = SurfaceKind::from_str(&surface).ok_or_else(|| Error::UnknownSurface {
                    room_type: room_type.clone(),
                    surface: surface.clone(),
                })?;
                rules.push(Rule {
                    room_type: room_type.clone(),
                    surface: kind,
                    allowed_material_ids: ids,
                });
            }
        }

        Ok(RecommendationEngine::new(catalog, RuleTable::from_rules(rules)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_document_round_trip() {
        let engine = CatalogDocument::builtin().into_engine().unwrap();
        let builtin = RecommendationEngine::builtin();

        assert_eq!(engine.catalog().len(), builtin.catalog().len());
        assert_eq!(engine.rules().len(), builtin.rules().len());
        assert_eq!(
            engine.recommend("walls", Some("living_room")),
            builtin.recommend("walls", Some("living_room"))
        );
    }

    #[test]
    fn test_unknown_surface_rejected() {
        let mut document = CatalogDocument::default();
        document
            .rules
            .entry("attic".into())
            .or_default()
            .insert("ceiling".into(), vec![]);

        let err = document.into_engine().unwrap_err();
        assert_eq!(
            err,
            Error::UnknownSurface {
                room_type: "attic".into(),
                surface: "ceiling".into()
            }
        );
    }
}
