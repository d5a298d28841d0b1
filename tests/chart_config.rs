use chart_palette::chart::{Theme, config_for_payload, payload_property};
use chart_palette::{ChartConfig, ChartContext, TooltipPayload};
use serde_json::json;
use tempfile::tempdir;

fn payload(v: serde_json::Value) -> TooltipPayload {
    TooltipPayload::from_value(v).unwrap()
}

#[test]
fn load_config_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chart.json");
    std::fs::write(
        &path,
        r##"{
            "Togo": { "label": "Togo", "color": "#ef4444", "icon": "flag" },
            "count": { "label": "Articles", "theme": { "light": "#111111", "dark": "#eeeeee" } }
        }"##,
    )
    .unwrap();

    let cfg = ChartConfig::load(&path).unwrap();
    assert_eq!(cfg.len(), 2);
    assert_eq!(cfg.get("Togo").unwrap().icon.as_deref(), Some("flag"));
    assert_eq!(cfg.get("count").unwrap().color_for(Theme::Dark), Some("#eeeeee"));
}

#[test]
fn load_reports_missing_file() {
    let dir = tempdir().unwrap();
    let err = ChartConfig::load(dir.path().join("nope.json")).unwrap_err();
    assert!(format!("{err:#}").contains("nope.json"));
}

#[test]
fn tooltip_resolution_through_context() {
    let cfg = ChartConfig::from_labels(&["Togo", "Benin"]);
    let ctx = ChartContext::new(cfg);

    // LayerChart-style payload: series name sits in the nested row.
    let p = payload(json!({ "value": 42, "payload": { "country": "Benin", "month": "2021-03" } }));
    let item = ctx.item_for_payload(&p, "country").unwrap();
    assert_eq!(item.color_for(Theme::Light), Some("#22c55e"));
    assert_eq!(payload_property(&p, "value"), Some(&json!(42)));
    assert_eq!(payload_property(&p, "month"), Some(&json!("2021-03")));

    let p = payload(json!({ "name": "Togo", "value": 3 }));
    assert!(config_for_payload(ctx.config(), &p, "Togo").is_some());
    assert!(config_for_payload(ctx.config(), &p, "Mali").is_none());
}

#[test]
fn css_for_country_chart() {
    let css = ChartConfig::from_labels(&["Togo", "Niger"]).style_css("countries").unwrap();
    assert!(css.starts_with("[data-chart=countries] {"));
    assert!(css.contains(".dark [data-chart=countries] {"));
    assert_eq!(css.matches("--color-Togo: #ef4444;").count(), 2);
    assert_eq!(css.matches("--color-Niger: #8b5cf6;").count(), 2);
}
