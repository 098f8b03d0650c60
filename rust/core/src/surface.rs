// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Surface vocabulary
//!
//! Three related types live here:
//!
//! - [`SurfaceKind`]: the closed set of surfaces a material can cover.
//! - [`Surface`]: the normalized form of a raw surface token coming from the
//!   UI. Unrecognized tokens are carried through instead of rejected.
//! - [`SurfaceMode`]: which surfaces a generation request edits.

use std::fmt;

/// Kind of surface a material applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SurfaceKind {
    Wall,
    Floor,
}

impl SurfaceKind {
    /// Parse the canonical token (`"wall"` or `"floor"`).
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "wall" => Some(SurfaceKind::Wall),
            "floor" => Some(SurfaceKind::Floor),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SurfaceKind::Wall => "wall",
            SurfaceKind::Floor => "floor",
        }
    }
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A normalized surface token.
///
/// `Other` holds the lower-cased raw token when it is neither `wall` nor
/// `floor`. Rule lookups use the token text verbatim, so an `Other` never
/// matches a rule and always lands on the fallback list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Surface {
    Wall,
    Floor,
    Other(String),
}

impl Surface {
    /// Token text used as the rule-table sub-key.
    pub fn as_str(&self) -> &str {
        match self {
            Surface::Wall => "wall",
            Surface::Floor => "floor",
            Surface::Other(token) => token,
        }
    }

    /// Surface kind used when picking the fallback list.
    ///
    /// Only the literal `wall` token maps to walls; everything else,
    /// including unrecognized tokens, is treated as floor.
    pub fn fallback_kind(&self) -> SurfaceKind {
        match self {
            Surface::Wall => SurfaceKind::Wall,
            Surface::Floor | Surface::Other(_) => SurfaceKind::Floor,
        }
    }

    /// Returns true if the token is not part of the canonical vocabulary.
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Surface::Other(_))
    }
}

impl From<SurfaceKind> for Surface {
    fn from(kind: SurfaceKind) -> Self {
        match kind {
            SurfaceKind::Wall => Surface::Wall,
            SurfaceKind::Floor => Surface::Floor,
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which surfaces a redesign request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SurfaceMode {
    Walls,
    Floors,
    #[default]
    Both,
}

impl SurfaceMode {
    /// Parse a mode token. Matching is exact, as the UI sends fixed values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "walls" => Some(SurfaceMode::Walls),
            "floors" => Some(SurfaceMode::Floors),
            "both" => Some(SurfaceMode::Both),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SurfaceMode::Walls => "walls",
            SurfaceMode::Floors => "floors",
            SurfaceMode::Both => "both",
        }
    }
}

impl fmt::Display for SurfaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
