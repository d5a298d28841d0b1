use chart_palette::palette::swatches;
use chart_palette::viz::{DEFAULT_WIDTH, MIN_WIDTH, plot_swatches};
use tempfile::tempdir;

#[test]
fn renders_svg_swatch_sheet() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("swatches.svg");
    let sw = swatches(&["Togo", "Burkina Faso", "Mali"]);
    plot_swatches(&sw, &path, DEFAULT_WIDTH).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Burkina Faso"));
    assert!(svg.contains("Mali"));
    assert!(svg.to_lowercase().contains("#ef4444"));
}

#[test]
fn rejects_empty_input_and_non_svg() {
    let dir = tempdir().unwrap();
    assert!(plot_swatches(&[], dir.path().join("a.svg"), DEFAULT_WIDTH).is_err());
    let sw = swatches(&["Togo"]);
    let err = plot_swatches(&sw, dir.path().join("a.png"), DEFAULT_WIDTH).unwrap_err();
    assert!(err.to_string().contains("svg"));
}

#[test]
fn rejects_widths_without_room_for_a_swatch() {
    let dir = tempdir().unwrap();
    let sw = swatches(&["Togo"]);
    let path = dir.path().join("w.svg");
    assert!(plot_swatches(&sw, &path, 0).is_err());
    assert!(plot_swatches(&sw, &path, MIN_WIDTH - 1).is_err());
    assert!(plot_swatches(&sw, &path, u32::MAX).is_err());
    assert!(plot_swatches(&sw, &path, MIN_WIDTH).is_ok());
}
