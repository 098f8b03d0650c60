// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Recommendation engine
//!
//! Answers "which materials may be shown for this surface in this room".
//! The answer comes from the rule table when a rule exists, otherwise from
//! the full catalog list for the surface kind.

use crate::catalog::{Material, MaterialCatalog};
use crate::normalize::{normalize_room_type, normalize_surface};
use crate::rules::{DanglingId, RuleTable};
use crate::surface::Surface;
use rustc_hash::FxHashSet;

/// Where the ids of a recommendation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationSource {
    /// A rule matched the room type and surface.
    Rule,
    /// No usable rule; all materials of the surface kind were offered.
    Fallback,
}

/// Ordered, deduplicated materials for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation<'a> {
    pub surface: Surface,
    pub room_type: String,
    pub source: RecommendationSource,
    pub materials: Vec<&'a Material>,
}

impl Recommendation<'_> {
    pub fn ids(&self) -> Vec<&str> {
        self.materials.iter().map(|m| m.id.as_str()).collect()
    }
}

/// Immutable catalog + rule table pair.
///
/// Holds no interior mutability, so one instance can be shared across
/// request handlers behind an `Arc`.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: MaterialCatalog,
    rules: RuleTable,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RecommendationEngine {
    pub fn new(catalog: MaterialCatalog, rules: RuleTable) -> Self {
        Self { catalog, rules }
    }

    /// Engine over the embedded catalog and rule table.
    pub fn builtin() -> Self {
        Self::new(MaterialCatalog::builtin(), RuleTable::builtin())
    }

    pub fn catalog(&self) -> &MaterialCatalog {
        &self.catalog
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Rule ids missing from the catalog.
    pub fn dangling_ids(&self) -> Vec<DanglingId> {
        self.rules.dangling_ids(&self.catalog)
    }

    /// Materials for a raw UI surface token and optional raw room type.
    pub fn recommend(&self, raw_surface: &str, raw_room_type: Option<&str>) -> Vec<&Material> {
        self.explain(raw_surface, raw_room_type).materials
    }

    /// Same as [`recommend`](Self::recommend), keeping the normalized inputs
    /// and which branch produced the list.
    pub fn explain(&self, raw_surface: &str, raw_room_type: Option<&str>) -> Recommendation<'_> {
        let surface = normalize_surface(raw_surface);
        let room_type = normalize_room_type(raw_room_type);

        let rule_ids = if room_type.trim().is_empty() {
            None
        } else {
            self.rules
                .lookup(&room_type, &surface)
                .filter(|ids| !ids.is_empty())
        };

        let (source, materials) = match rule_ids {
            Some(ids) => (
                RecommendationSource::Rule,
                self.resolve(ids.iter().map(String::as_str)),
            ),
            None => {
                let fallback = self
                    .catalog
                    .of_kind(surface.fallback_kind())
                    .filter(|material| material.applies_to(&room_type))
                    .map(|material| material.id.as_str());
                (RecommendationSource::Fallback, self.resolve(fallback))
            }
        };

        Recommendation {
            surface,
            room_type,
            source,
            materials,
        }
    }

    /// Map ids through the catalog, skipping unknown ids and repeats.
    fn resolve<'a, I>(&'a self, ids: I) -> Vec<&'a Material>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        ids.into_iter()
            .filter(|id| seen.insert(*id))
            .filter_map(|id| self.catalog.get(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rule;
    use crate::surface::SurfaceKind;

    fn ids(materials: &[&Material]) -> Vec<String> {
        materials.iter().map(|m| m.id.clone()).collect()
    }

    #[test]
    fn test_rule_branch() {
        let engine = RecommendationEngine::builtin();
        let result = engine.explain("flooring", Some("kitchen"));
        assert_eq!(result.source, RecommendationSource::Rule);
        assert_eq!(result.surface, Surface::Floor);
        assert_eq!(
            result.ids(),
            ["porcelain_tile_matte_R10", "granite_floor_textured", "safety_vinyl_EN13845", "ceramic_floor_matte"]
        );
    }

    #[test]
    fn test_blank_room_type_uses_fallback() {
        let engine = RecommendationEngine::builtin();
        for room in [None, Some(""), Some("   ")] {
            let result = engine.explain("walls", room);
            assert_eq!(result.source, RecommendationSource::Fallback);
            assert_eq!(result.materials.len(), 8);
        }
    }

    #[test]
    fn test_unrecognized_surface_defaults_to_floor() {
        let engine = RecommendationEngine::builtin();
        let result = engine.explain("walls_misspelled", Some("bathroom"));
        assert_eq!(result.source, RecommendationSource::Fallback);
        assert!(result
            .materials
            .iter()
            .all(|m| m.surface_kind == SurfaceKind::Floor));
        assert_eq!(result.materials.len(), 8);
    }

    #[test]
    fn test_missing_ids_are_dropped() {
        let engine = RecommendationEngine::new(
            MaterialCatalog::builtin(),
            RuleTable::from_rules([Rule::new(
                "kitchen",
                SurfaceKind::Wall,
                &["terrazzo", "ceramic_wall_tile", "glass_mosaic", "wallpaper"],
            )]),
        );
        let result = engine.recommend("walls", Some("kitchen"));
        assert_eq!(ids(&result), ["ceramic_wall_tile", "wallpaper"]);
        assert_eq!(engine.dangling_ids().len(), 2);
    }

    #[test]
    fn test_all_ids_missing_yields_empty_rule_result() {
        // The rule exists and is non-empty, so no fallback happens even though
        // nothing resolves.
        let engine = RecommendationEngine::new(
            MaterialCatalog::builtin(),
            RuleTable::from_rules([Rule::new("kitchen", SurfaceKind::Wall, &["terrazzo"])]),
        );
        let result = engine.explain("walls", Some("kitchen"));
        assert_eq!(result.source, RecommendationSource::Rule);
        assert!(result.materials.is_empty());
    }

    #[test]
    fn test_empty_rule_uses_fallback() {
        let engine = RecommendationEngine::new(
            MaterialCatalog::builtin(),
            RuleTable::from_rules([Rule::new("kitchen", SurfaceKind::Wall, &[])]),
        );
        let result = engine.explain("walls", Some("kitchen"));
        assert_eq!(result.source, RecommendationSource::Fallback);
        assert_eq!(result.materials.len(), 8);
    }

    #[test]
    fn test_duplicate_rule_ids_collapse() {
        let engine = RecommendationEngine::new(
            MaterialCatalog::builtin(),
            RuleTable::from_rules([Rule::new(
                "bedroom",
                SurfaceKind::Floor,
                &["carpet_soft", "laminate_AC4_matte", "carpet_soft"],
            )]),
        );
        let result = engine.recommend("flooring", Some("bedroom"));
        assert_eq!(ids(&result), ["carpet_soft", "laminate_AC4_matte"]);
    }

    #[test]
    fn test_empty_catalog() {
        let engine = RecommendationEngine::new(MaterialCatalog::default(), RuleTable::builtin());
        assert!(engine.recommend("flooring", Some("bathroom")).is_empty());
        assert!(engine.recommend("walls", None).is_empty());
    }

    #[test]
    fn test_fallback_honours_room_restrictions() {
        let catalog = MaterialCatalog::new(vec![
            Material::new("oak", "Oak", SurfaceKind::Floor, "/oak.jpg"),
            Material::new("rubber", "Rubber", SurfaceKind::Floor, "/rubber.jpg").with_rooms(["garage"]),
            Material::new("cork", "Cork", SurfaceKind::Floor, "/cork.jpg"),
        ])
        .unwrap();
        let engine = RecommendationEngine::new(catalog, RuleTable::default());

        assert_eq!(ids(&engine.recommend("flooring", Some("garage"))), ["oak", "rubber", "cork"]);
        assert_eq!(ids(&engine.recommend("flooring", Some("studio"))), ["oak", "cork"]);
        assert_eq!(ids(&engine.recommend("flooring", None)), ["oak", "rubber", "cork"]);
    }
}
