// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # RoomAI Core
//!
//! Rule-based material recommendations for room redesign.
//!
//! ## Overview
//!
//! Given a surface (wall or floor) and a room type, the engine returns the
//! materials that may be offered for it, in the order a domain expert chose:
//!
//! - **Normalization**: UI tokens such as `walls`, `flooring`, `office` are
//!   mapped onto the canonical vocabulary
//! - **Rule table**: `(room type, surface) → ordered material ids`
//! - **Catalog**: `id → material` display attributes
//! - **Fallback**: rooms without a rule get every material of the surface
//!   kind, in catalog order
//!
//! ## Quick Start
//!
//! ```rust
//! use roomai_core::RecommendationEngine;
//!
//! let engine = RecommendationEngine::builtin();
//!
//! let walls = engine.recommend("walls", Some("bathroom"));
//! let ids: Vec<&str> = walls.iter().map(|m| m.id.as_str()).collect();
//! assert_eq!(
//!     ids,
//!     ["ceramic_wall_tile", "porcelain_wall_tile", "bathroom_mold_resistant_paint"]
//! );
//!
//! // Unknown rooms fall back to the whole floor list
//! assert_eq!(engine.recommend("flooring", Some("garage")).len(), 8);
//! ```
//!
//! Queries are pure and total: any string input yields a (possibly empty)
//! list, never an error. The engine is immutable once built and can be
//! shared between threads without locking.
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization for public types and [`CatalogDocument`]
//!   loading

pub mod catalog;
#[cfg(feature = "serde")]
pub mod document;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod palette;
pub mod rules;
pub mod surface;

pub use catalog::{Material, MaterialCatalog};
#[cfg(feature = "serde")]
pub use document::{CatalogDocument, MaterialEntry};
pub use engine::{Recommendation, RecommendationEngine, RecommendationSource};
pub use error::{Error, Result};
pub use normalize::{is_known_room_type, normalize_room_type, normalize_surface, KNOWN_ROOM_TYPES};
pub use palette::{builtin_palettes, ColorPalette};
pub use rules::{DanglingId, Rule, RuleTable};
pub use surface::{Surface, SurfaceKind, SurfaceMode};
