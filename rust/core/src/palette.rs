// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Built-in color palettes offered next to the material picker.

/// A named set of hex colors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorPalette {
    pub name: String,
    pub category: String,
    /// `#RRGGBB` strings, darkest first.
    pub colors: Vec<String>,
}

const BUILTIN_PALETTES: &[(&str, &str, [&str; 4])] = &[
    ("Earthy Tones", "earthy", ["#8B6F47", "#A0826D", "#B89968", "#D4A574"]),
    ("Neutral", "neutral", ["#9CA3AF", "#D1D5DB", "#E5E7EB", "#F3F4F6"]),
    ("Cool Gray", "cool", ["#475569", "#64748B", "#94A3B8", "#CBD5E1"]),
    ("Nature Inspired", "nature", ["#15803D", "#22C55E", "#86EFAC", "#DCFCE7"]),
    ("Luxury", "luxury", ["#6B21A8", "#9333EA", "#D8B4FE", "#F3E8FF"]),
];

/// The palettes shipped with the application, in display order.
pub fn builtin_palettes() -> Vec<ColorPalette> {
    BUILTIN_PALETTES
        .iter()
        .map(|(name, category, colors)| ColorPalette {
            name: name.to_string(),
            category: category.to_string(),
            colors: colors.iter().map(|c| c.to_string()).collect(),
        })
        .collect()
}
