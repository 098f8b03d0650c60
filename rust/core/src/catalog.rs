// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Material catalog
//!
//! Registry of every material the UI can show, keyed by id. Declaration
//! order is preserved because fallback lists are emitted in that order.

use crate::error::{Error, Result};
use crate::surface::SurfaceKind;
use rustc_hash::FxHashMap;

/// A material that can be applied to a wall or floor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Material {
    /// Unique catalog key (e.g., "porcelain_tile_matte_R10").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Surface this material covers.
    pub surface_kind: SurfaceKind,
    /// Texture image reference served to the UI.
    pub texture_url: String,
    /// Optional restriction: when non-empty, the material only appears in
    /// fallback lists for these room types.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rooms: Vec<String>,
}

impl Material {
    /// Create an unrestricted material.
    pub fn new(id: &str, name: &str, surface_kind: SurfaceKind, texture_url: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            surface_kind,
            texture_url: texture_url.to_string(),
            rooms: Vec::new(),
        }
    }

    /// Restrict the material to the given room types.
    pub fn with_rooms<I, S>(mut self, rooms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rooms = rooms.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the material may be offered for `room_type`.
    ///
    /// Unrestricted materials apply everywhere. A blank room type carries no
    /// context to filter by, so restrictions are not applied either.
    pub fn applies_to(&self, room_type: &str) -> bool {
        self.rooms.is_empty()
            || room_type.trim().is_empty()
            || self.rooms.iter().any(|room| room == room_type)
    }
}

/// Read-only material registry.
#[derive(Debug, Clone, Default)]
pub struct MaterialCatalog {
    materials: Vec<Material>,
    index: FxHashMap<String, usize>,
}

impl MaterialCatalog {
    /// Build a catalog, rejecting empty ids, empty names and duplicate ids.
    pub fn new(materials: Vec<Material>) -> Result<Self> {
        let mut index = FxHashMap::default();
        index.reserve(materials.len());

        for (position, material) in materials.iter().enumerate() {
            if material.id.is_empty() {
                return Err(Error::EmptyMaterialId { index: position });
            }
            if material.name.trim().is_empty() {
                return Err(Error::EmptyMaterialName {
                    id: material.id.clone(),
                });
            }
            if index.insert(material.id.clone(), position).is_some() {
                return Err(Error::DuplicateMaterial {
                    id: material.id.clone(),
                });
            }
        }

        Ok(Self { materials, index })
    }

    /// The embedded catalog shipped with the application.
    pub fn builtin() -> Self {
        let materials: Vec<Material> = BUILTIN_MATERIALS
            .iter()
            .map(|&(id, name, kind, texture)| {
                Material::new(id, name, kind, &format!("/images/materials/{}", texture))
            })
            .collect();

        let index = materials
            .iter()
            .enumerate()
            .map(|(position, material)| (material.id.clone(), position))
            .collect();

        Self { materials, index }
    }

    /// Look up a material by id.
    pub fn get(&self, id: &str) -> Option<&Material> {
        self.index.get(id).map(|&position| &self.materials[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All materials in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }

    /// Materials of one surface kind, in declaration order.
    pub fn of_kind(&self, kind: SurfaceKind) -> impl Iterator<Item = &Material> {
        self.materials.iter().filter(move |m| m.surface_kind == kind)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

// (id, display name, surface, texture file)
const BUILTIN_MATERIALS: &[(&str, &str, SurfaceKind, &str)] = &[
    // Floor
    ("porcelain_tile_matte_R10", "Porcelain Tile (Matte, R10)", SurfaceKind::Floor, "porcelain_tile.jpg"),
    ("safety_vinyl_EN13845", "Safety Vinyl (EN 13845)", SurfaceKind::Floor, "vinyl_safety.jpg"),
    ("ceramic_floor_matte", "Ceramic Floor (Matte)", SurfaceKind::Floor, "ceramic_floor.jpg"),
    ("granite_floor_textured", "Granite (Textured)", SurfaceKind::Floor, "granite_textured.jpg"),
    ("natural_stone_floor_textured", "Natural Stone (Textured)", SurfaceKind::Floor, "natural_stone.jpg"),
    ("engineered_wood_matte", "Engineered Wood (Matte)", SurfaceKind::Floor, "engineered_wood.jpg"),
    ("laminate_AC4_matte", "Laminate (AC4, Matte)", SurfaceKind::Floor, "laminate_ac4.jpg"),
    ("carpet_soft", "Soft Carpet", SurfaceKind::Floor, "carpet_soft.jpg"),
    // Wall
    ("ceramic_wall_tile", "Ceramic Wall Tile", SurfaceKind::Wall, "ceramic_wall.jpg"),
    ("porcelain_wall_tile", "Porcelain Wall Tile", SurfaceKind::Wall, "porcelain_wall.jpg"),
    ("bathroom_mold_resistant_paint", "Mold-Resistant Bathroom Paint", SurfaceKind::Wall, "paint_mold_resistant.jpg"),
    ("satin_washable_paint", "Satin Washable Paint", SurfaceKind::Wall, "paint_satin.jpg"),
    ("matte_washable_paint", "Matte Washable Paint", SurfaceKind::Wall, "paint_matte.jpg"),
    ("decorative_stone_wall", "Decorative Stone Wall", SurfaceKind::Wall, "decorative_stone.jpg"),
    ("wallpaper", "Wallpaper", SurfaceKind::Wall, "wallpaper.jpg"),
    ("wood_wall_panels", "Wood Wall Panels", SurfaceKind::Wall, "wood_panels.jpg"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = MaterialCatalog::builtin();
        assert_eq!(catalog.len(), 16);
        assert_eq!(catalog.of_kind(SurfaceKind::Floor).count(), 8);
        assert_eq!(catalog.of_kind(SurfaceKind::Wall).count(), 8);

        let carpet = catalog.get("carpet_soft").unwrap();
        assert_eq!(carpet.name, "Soft Carpet");
        assert_eq!(carpet.texture_url, "/images/materials/carpet_soft.jpg");
        assert!(catalog.get("marble").is_none());
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let catalog = MaterialCatalog::builtin();
        let materials: Vec<Material> = catalog.iter().cloned().collect();
        assert!(MaterialCatalog::new(materials).is_ok());
    }

    #[test]
    fn test_declaration_order() {
        let catalog = MaterialCatalog::builtin();
        let first_walls: Vec<&str> = catalog
            .of_kind(SurfaceKind::Wall)
            .take(2)
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(first_walls, ["ceramic_wall_tile", "porcelain_wall_tile"]);
    }

    #[test]
    fn test_rejects_duplicates() {
        let result = MaterialCatalog::new(vec![
            Material::new("tile", "Tile", SurfaceKind::Floor, "/t.jpg"),
            Material::new("tile", "Tile again", SurfaceKind::Wall, "/t.jpg"),
        ]);
        assert_eq!(result.unwrap_err(), Error::DuplicateMaterial { id: "tile".into() });
    }

    #[test]
    fn test_rejects_empty_fields() {
        let result = MaterialCatalog::new(vec![Material::new("", "Tile", SurfaceKind::Floor, "")]);
        assert_eq!(result.unwrap_err(), Error::EmptyMaterialId { index: 0 });

        let result = MaterialCatalog::new(vec![Material::new("tile", " ", SurfaceKind::Floor, "")]);
        assert!(matches!(result, Err(Error::EmptyMaterialName { .. })));
    }

    #[test]
    fn test_room_restriction() {
        let tile = Material::new("tile", "Tile", SurfaceKind::Floor, "")
            .with_rooms(["kitchen", "bathroom"]);
        assert!(tile.applies_to("kitchen"));
        assert!(!tile.applies_to("bedroom"));
        assert!(tile.applies_to(""));

        let open = Material::new("wood", "Wood", SurfaceKind::Floor, "");
        assert!(open.applies_to("bedroom"));
    }
}
