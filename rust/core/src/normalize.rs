// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! UI vocabulary normalization
//!
//! The picker UI speaks in plurals (`walls`, `flooring`) and short room
//! names (`office`, `entrance`). Rules are keyed by canonical tokens. Both
//! functions are total: every input maps to something.

use crate::surface::Surface;

/// Canonical room types known to the built-in rule table.
pub const KNOWN_ROOM_TYPES: [&str; 7] = [
    "bathroom",
    "kitchen",
    "entrance_hall",
    "living_room",
    "dining_room",
    "bedroom",
    "home_office",
];

/// Map a raw surface token onto the engine vocabulary.
///
/// `walls` and `flooring` are UI aliases. Anything else is lower-cased and
/// passed through; `wall` and `floor` are already canonical.
pub fn normalize_surface(raw: &str) -> Surface {
    let lowered = raw.to_lowercase();
    match lowered.as_str() {
        "walls" | "wall" => Surface::Wall,
        "flooring" | "floor" => Surface::Floor,
        _ => Surface::Other(lowered),
    }
}

/// Map a raw room type onto the rule-table vocabulary.
///
/// Absent input becomes the empty string. No trimming is applied, so a
/// whitespace-only value stays whitespace and triggers the fallback later.
pub fn normalize_room_type(raw: Option<&str>) -> String {
    let lowered = raw.unwrap_or_default().to_lowercase();
    match lowered.as_str() {
        "office" => "home_office".to_string(),
        "entrance" | "entrance_hall" => "entrance_hall".to_string(),
        _ => lowered,
    }
}

/// Returns true for one of the seven canonical room types.
pub fn is_known_room_type(room_type: &str) -> bool {
    KNOWN_ROOM_TYPES.contains(&room_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_aliases() {
        assert_eq!(normalize_surface("walls"), Surface::Wall);
        assert_eq!(normalize_surface("WALLS"), Surface::Wall);
        assert_eq!(normalize_surface("wall"), Surface::Wall);
        assert_eq!(normalize_surface("flooring"), Surface::Floor);
        assert_eq!(normalize_surface("Floor"), Surface::Floor);
    }

    #[test]
    fn test_surface_pass_through() {
        assert_eq!(normalize_surface("Ceiling"), Surface::Other("ceiling".into()));
        // Plural "floors" is not an alias
        assert_eq!(normalize_surface("floors"), Surface::Other("floors".into()));
        assert_eq!(normalize_surface(""), Surface::Other(String::new()));
    }

    #[test]
    fn test_room_type_aliases() {
        assert_eq!(normalize_room_type(Some("office")), "home_office");
        assert_eq!(normalize_room_type(Some("Office")), "home_office");
        assert_eq!(normalize_room_type(Some("entrance")), "entrance_hall");
        assert_eq!(normalize_room_type(Some("ENTRANCE_HALL")), "entrance_hall");
        assert_eq!(normalize_room_type(Some("Living_Room")), "living_room");
    }

    #[test]
    fn test_room_type_absent_and_unknown() {
        assert_eq!(normalize_room_type(None), "");
        assert_eq!(normalize_room_type(Some("  ")), "  ");
        assert_eq!(normalize_room_type(Some("Garage")), "garage");
        assert!(!is_known_room_type("garage"));
        assert!(is_known_room_type("home_office"));
    }
}
