// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room/surface rule table
//!
//! Each rule lists the materials allowed on one surface of one room type,
//! in the order the rule author wants them displayed. The built-in table
//! encodes building-code style constraints: wet rooms get slip-rated floors
//! and moisture-resistant walls, circulation areas get hard-wearing floors.

use crate::catalog::MaterialCatalog;
use crate::surface::{Surface, SurfaceKind};
use rustc_hash::FxHashMap;

/// Allowed materials for one (room type, surface) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub room_type: String,
    pub surface: SurfaceKind,
    /// Display order is significant.
    pub allowed_material_ids: Vec<String>,
}

impl Rule {
    pub fn new(room_type: &str, surface: SurfaceKind, allowed: &[&str]) -> Self {
        Self {
            room_type: room_type.to_string(),
            surface,
            allowed_material_ids: allowed.iter().map(|id| id.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct SurfaceRules {
    wall: Option<Vec<String>>,
    floor: Option<Vec<String>>,
}

impl SurfaceRules {
    fn get(&self, kind: SurfaceKind) -> Option<&Vec<String>> {
        match kind {
            SurfaceKind::Wall => self.wall.as_ref(),
            SurfaceKind::Floor => self.floor.as_ref(),
        }
    }

    fn slot(&mut self, kind: SurfaceKind) -> &mut Option<Vec<String>> {
        match kind {
            SurfaceKind::Wall => &mut self.wall,
            SurfaceKind::Floor => &mut self.floor,
        }
    }
}

/// A rule id that does not resolve in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingId {
    pub room_type: String,
    pub surface: SurfaceKind,
    pub material_id: String,
}

/// Immutable lookup from (room type, surface) to allowed material ids.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rooms: FxHashMap<String, SurfaceRules>,
}

impl RuleTable {
    /// Build a table from rules. A later rule for the same room and surface
    /// replaces the earlier one.
    pub fn from_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = Rule>,
    {
        let mut rooms: FxHashMap<String, SurfaceRules> = FxHashMap::default();
        for rule in rules {
            *rooms
                .entry(rule.room_type)
                .or_default()
                .slot(rule.surface) = Some(rule.allowed_material_ids);
        }
        Self { rooms }
    }

    /// The embedded rule table shipped with the application.
    pub fn builtin() -> Self {
        Self::from_rules(BUILTIN_RULES.iter().flat_map(|&(room, floor, wall)| {
            [
                Rule::new(room, SurfaceKind::Floor, floor),
                Rule::new(room, SurfaceKind::Wall, wall),
            ]
        }))
    }

    /// Allowed ids for a room type and surface.
    ///
    /// Absent when the room has no entry, when the room has no rule for the
    /// surface, or when the surface token is unrecognized.
    pub fn lookup(&self, room_type: &str, surface: &Surface) -> Option<&[String]> {
        let kind = match surface {
            Surface::Wall => SurfaceKind::Wall,
            Surface::Floor => SurfaceKind::Floor,
            Surface::Other(_) => return None,
        };
        self.rooms
            .get(room_type)
            .and_then(|rules| rules.get(kind))
            .map(Vec::as_slice)
    }

    /// Room types with at least one rule, sorted.
    pub fn room_types(&self) -> Vec<&str> {
        let mut rooms: Vec<&str> = self.rooms.keys().map(String::as_str).collect();
        rooms.sort_unstable();
        rooms
    }

    /// Number of (room, surface) rules.
    pub fn len(&self) -> usize {
        self.rooms
            .values()
            .map(|rules| usize::from(rules.wall.is_some()) + usize::from(rules.floor.is_some()))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rule ids that the catalog cannot resolve, sorted by room then surface.
    ///
    /// Queries drop these silently; this lets the caller report the drift.
    pub fn dangling_ids(&self, catalog: &MaterialCatalog) -> Vec<DanglingId> {
        let mut dangling = Vec::new();
        for room in self.room_types() {
            let Some(rules) = self.rooms.get(room) else {
                continue;
            };
            for kind in [SurfaceKind::Wall, SurfaceKind::Floor] {
                let Some(ids) = rules.get(kind) else {
                    continue;
                };
                dangling.extend(ids.iter().filter(|id| !catalog.contains(id)).map(|id| {
                    DanglingId {
                        room_type: room.to_string(),
                        surface: kind,
                        material_id: id.clone(),
                    }
                }));
            }
        }
        dangling
    }
}

// (room type, floor materials, wall materials)
const BUILTIN_RULES: &[(&str, &[&str], &[&str])] = &[
    (
        "bathroom",
        &["porcelain_tile_matte_R10", "safety_vinyl_EN13845", "ceramic_floor_matte", "granite_floor_textured"],
        &["ceramic_wall_tile", "porcelain_wall_tile", "bathroom_mold_resistant_paint"],
    ),
    (
        "kitchen",
        &["porcelain_tile_matte_R10", "granite_floor_textured", "safety_vinyl_EN13845", "ceramic_floor_matte"],
        &["ceramic_wall_tile", "porcelain_wall_tile", "satin_washable_paint"],
    ),
    (
        "entrance_hall",
        &["granite_floor_textured", "porcelain_tile_matte_R10", "safety_vinyl_EN13845", "natural_stone_floor_textured"],
        &["satin_washable_paint", "matte_washable_paint", "decorative_stone_wall"],
    ),
    (
        "living_room",
        &["engineered_wood_matte", "laminate_AC4_matte", "porcelain_tile_matte_R10", "natural_stone_floor_textured"],
        &["matte_washable_paint", "wallpaper", "decorative_stone_wall", "wood_wall_panels"],
    ),
    (
        "dining_room",
        &["porcelain_tile_matte_R10", "laminate_AC4_matte", "engineered_wood_matte", "granite_floor_textured"],
        &["matte_washable_paint", "satin_washable_paint", "wallpaper"],
    ),
    (
        "bedroom",
        &["carpet_soft", "engineered_wood_matte", "laminate_AC4_matte", "porcelain_tile_matte_R10"],
        &["matte_washable_paint", "wallpaper", "wood_wall_panels"],
    ),
    (
        "home_office",
        &["laminate_AC4_matte", "engineered_wood_matte", "porcelain_tile_matte_R10", "safety_vinyl_EN13845"],
        &["matte_washable_paint", "satin_washable_paint", "wood_wall_panels"],
    ),
];
