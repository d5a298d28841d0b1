//! Deterministic country → color assignment.
//!
//! Countries covered by the corpus have fixed colors; every other label is
//! hashed into a small fallback palette so it keeps the same color across
//! runs, pages and machines.
//!
//! ```
//! use chart_palette::palette::country_color;
//!
//! assert_eq!(country_color(Some("Togo")), "#ef4444");
//! assert_eq!(country_color(None), "#06b6d4");
//! ```

use crate::contrast::text_color_for_bg;
use crate::hash::djb2;
use serde::{Deserialize, Serialize};

/// Fixed colors for known countries. Lookup is exact and case-sensitive.
pub const KNOWN_COUNTRY_COLORS: [(&str, &str); 5] = [
    ("Togo", "#ef4444"),          // red
    ("Burkina Faso", "#3b82f6"),  // blue
    ("Benin", "#22c55e"),         // green
    ("Côte d'Ivoire", "#f59e0b"), // amber
    ("Niger", "#8b5cf6"),         // purple
];

/// Palette for labels not in [`KNOWN_COUNTRY_COLORS`]. Entry 0 is also the
/// color of an empty label.
pub const FALLBACK_COUNTRY_COLORS: [&str; 5] = [
    "#06b6d4", // cyan
    "#ec4899", // pink
    "#84cc16", // lime
    "#f97316", // orange
    "#6366f1", // indigo
];

/// Fixed color of a known country, if any.
pub fn known_color(key: &str) -> Option<&'static str> {
    KNOWN_COUNTRY_COLORS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, color)| *color)
}

/// Index into [`FALLBACK_COUNTRY_COLORS`] for an (already trimmed) key.
pub fn fallback_index(key: &str) -> usize {
    djb2(key) as usize % FALLBACK_COUNTRY_COLORS.len()
}

/// Stable color for a country label.
///
/// `None` and blank labels get the first fallback color. Surrounding
/// whitespace is ignored; nothing else is normalized.
pub fn country_color(label: Option<&str>) -> &'static str {
    let key = label.unwrap_or_default().trim();
    if key.is_empty() {
        return FALLBACK_COUNTRY_COLORS[0];
    }
    known_color(key).unwrap_or_else(|| FALLBACK_COUNTRY_COLORS[fallback_index(key)])
}

/// A label with its background color and matching text color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    pub label: String,
    pub background: String,
    pub text: String,
}

/// Build the swatch for one label.
pub fn swatch_for(label: &str) -> Swatch {
    let background = country_color(Some(label));
    Swatch {
        label: label.to_string(),
        background: background.to_string(),
        text: text_color_for_bg(background).to_string(),
    }
}

/// Swatches for several labels, in input order.
pub fn swatches<S: AsRef<str>>(labels: &[S]) -> Vec<Swatch> {
    labels.iter().map(|l| swatch_for(l.as_ref())).collect()
}
