use chart_palette::contrast::{BLACK, WHITE};
use chart_palette::hash::djb2;
use chart_palette::palette::{FALLBACK_COUNTRY_COLORS, KNOWN_COUNTRY_COLORS};
use chart_palette::{country_color, text_color_for_bg};

#[test]
fn known_countries_get_fixed_colors() {
    assert_eq!(country_color(Some("Togo")), "#ef4444");
    assert_eq!(country_color(Some("Benin")), "#22c55e");
    for (name, color) in KNOWN_COUNTRY_COLORS {
        assert_eq!(country_color(Some(name)), color);
    }
}

#[test]
fn missing_or_empty_labels_get_first_fallback() {
    assert_eq!(country_color(Some("")), "#06b6d4");
    assert_eq!(country_color(None), "#06b6d4");
    assert_eq!(country_color(None), FALLBACK_COUNTRY_COLORS[0]);
}

#[test]
fn unknown_labels_are_reproducible() {
    let key = "Unknown Country";
    let expected = FALLBACK_COUNTRY_COLORS[(djb2(key) % 5) as usize];
    assert_eq!(country_color(Some(key)), expected);
    assert_eq!(country_color(Some(key)), "#84cc16");
    assert_eq!(country_color(Some(key)), country_color(Some(key)));
}

#[test]
fn hash_is_stable() {
    // Pinned values: must not change between releases or platforms.
    assert_eq!(djb2(""), 5381);
    assert_eq!(djb2("Unknown Country"), 1_656_399_877);
    assert_eq!(djb2("Ghana"), 208_035_236);
}

#[test]
fn contrast_examples() {
    assert_eq!(text_color_for_bg("#ffffff"), BLACK);
    assert_eq!(text_color_for_bg("#000000"), WHITE);
    assert_eq!(text_color_for_bg("#fff"), text_color_for_bg("#ffffff"));
    assert_eq!(text_color_for_bg("xyz"), "#ffffff");
    assert_eq!(text_color_for_bg("#FFFFFF"), BLACK);
}

#[test]
fn every_palette_color_gets_white_text() {
    // All palette entries are mid/dark tones (luminance < 0.5).
    for (_, c) in KNOWN_COUNTRY_COLORS {
        assert_eq!(text_color_for_bg(c), WHITE, "{c}");
    }
    for c in FALLBACK_COUNTRY_COLORS {
        assert_eq!(text_color_for_bg(c), WHITE, "{c}");
    }
}

#[test]
fn functions_are_idempotent() {
    for label in ["Niger", " Niger ", "Sénégal", ""] {
        let a = country_color(Some(label));
        assert_eq!(a, country_color(Some(label)));
        assert_eq!(text_color_for_bg(a), text_color_for_bg(a));
    }
}
