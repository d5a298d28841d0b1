//! Chart configuration: series key → display metadata (label, icon, colors),
//! plus tooltip payload lookups.
//!
//! Tooltip payloads come from charting code as loosely-typed JSON objects.
//! Instead of probing properties ad hoc, the config key for a payload is
//! resolved through an explicit, ordered list of [`LabelKeyStrategy`]s.

use crate::palette::country_color;
use anyhow::{Context, Result};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartConfigError {
    #[error("item config sets both `color` and `theme`")]
    ColorAndTheme,
    #[error("invalid chart config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Color scheme a chart is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// All themes, in the order style blocks are emitted.
pub const THEMES: [Theme; 2] = [Theme::Light, Theme::Dark];

impl Theme {
    /// CSS selector prefix that activates the theme.
    pub fn selector_prefix(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => ".dark",
        }
    }
}

/// One color per theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub light: String,
    pub dark: String,
}

impl ThemeColors {
    pub fn get(&self, theme: Theme) -> &str {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }
}

/// Either a single color or one color per theme, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesColor {
    Fixed(String),
    Themed(ThemeColors),
}

/// Display metadata of one series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawItemConfig", into = "RawItemConfig")]
pub struct ItemConfig {
    pub label: Option<String>,
    /// Icon identifier; rendering it is up to the front-end.
    pub icon: Option<String>,
    pub color: Option<SeriesColor>,
}

// Wire form: `color` and `theme` are sibling keys.
#[derive(Serialize, Deserialize)]
struct RawItemConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<ThemeColors>,
}

impl TryFrom<RawItemConfig> for ItemConfig {
    type Error = ChartConfigError;

    fn try_from(raw: RawItemConfig) -> Result<Self, Self::Error> {
        let color = match (raw.color, raw.theme) {
            (Some(_), Some(_)) => return Err(ChartConfigError::ColorAndTheme),
            (Some(c), None) => Some(SeriesColor::Fixed(c)),
            (None, Some(t)) => Some(SeriesColor::Themed(t)),
            (None, None) => None,
        };
        Ok(Self {
            label: raw.label,
            icon: raw.icon,
            color,
        })
    }
}

impl From<ItemConfig> for RawItemConfig {
    fn from(item: ItemConfig) -> Self {
        let (color, theme) = match item.color {
            Some(SeriesColor::Fixed(c)) => (Some(c), None),
            Some(SeriesColor::Themed(t)) => (None, Some(t)),
            None => (None, None),
        };
        Self {
            label: item.label,
            icon: item.icon,
            color,
            theme,
        }
    }
}

impl ItemConfig {
    /// Color to use under `theme`: the themed entry, else the fixed color.
    pub fn color_for(&self, theme: Theme) -> Option<&str> {
        match &self.color {
            Some(SeriesColor::Themed(t)) => Some(t.get(theme)),
            Some(SeriesColor::Fixed(c)) => Some(c),
            None => None,
        }
    }
}

/// Series key → [`ItemConfig`], in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartConfig {
    items: Vec<(String, ItemConfig)>,
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config where each label gets its country color.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        let mut config = Self::new();
        for label in labels {
            let label = label.as_ref();
            config.insert(
                label,
                ItemConfig {
                    label: Some(label.to_string()),
                    icon: None,
                    color: Some(SeriesColor::Fixed(country_color(Some(label)).to_string())),
                },
            );
        }
        config
    }

    pub fn from_json_str(s: &str) -> Result<Self, ChartConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read a JSON chart config from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading chart config {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("parsing chart config {}", path.display()))
    }

    /// Insert or replace; a replaced key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, item: ItemConfig) {
        let key = key.into();
        match self.items.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = item,
            None => self.items.push((key, item)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ItemConfig> {
        self.items.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ItemConfig)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// CSS custom properties (`--color-<key>`) for every colored series,
    /// one rule block per theme, scoped to `[data-chart=<chart_id>]`.
    ///
    /// Returns `None` when no series has a color.
    pub fn style_css(&self, chart_id: &str) -> Option<String> {
        if !self.items.iter().any(|(_, item)| item.color.is_some()) {
            return None;
        }
        let blocks: Vec<String> = THEMES
            .iter()
            .map(|&theme| {
                let scope = format!("[data-chart={chart_id}]");
                let selector = match theme.selector_prefix() {
                    "" => scope,
                    prefix => format!("{prefix} {scope}"),
                };
                let vars: Vec<String> = self
                    .iter()
                    .filter_map(|(key, item)| {
                        item.color_for(theme)
                            .map(|c| format!("  --color-{}: {};", css_ident(key), c))
                    })
                    .collect();
                format!("{selector} {{\n{}\n}}", vars.join("\n"))
            })
            .collect();
        Some(blocks.join("\n"))
    }
}

// Custom-property names cannot hold spaces or punctuation.
fn css_ident(key: &str) -> String {
    key.chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
        .collect()
}

impl Serialize for ChartConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len()))?;
        for (k, v) in &self.items {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ChartConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ConfigVisitor;

        impl<'de> Visitor<'de> for ConfigVisitor {
            type Value = ChartConfig;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a map of series keys to item configs")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut config = ChartConfig::new();
                while let Some((key, item)) = access.next_entry::<String, ItemConfig>()? {
                    config.insert(key, item);
                }
                Ok(config)
            }
        }

        deserializer.deserialize_map(ConfigVisitor)
    }
}

/// A tooltip payload: a JSON object with optional `value`, `name`, `key` and
/// a nested `payload` object, plus whatever else the chart library adds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TooltipPayload(Map<String, Value>);

impl TooltipPayload {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// `None` unless `value` is a JSON object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn value(&self) -> Option<&Value> {
        self.0.get("value")
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn key(&self) -> Option<&str> {
        self.0.get("key").and_then(Value::as_str)
    }

    /// The nested `payload` object, if present and an object.
    pub fn nested(&self) -> Option<&Map<String, Value>> {
        self.0.get("payload").and_then(Value::as_object)
    }
}

/// Look `key` up on the payload itself, then on its nested payload.
pub fn payload_property<'a>(payload: &'a TooltipPayload, key: &str) -> Option<&'a Value> {
    payload
        .get(key)
        .or_else(|| payload.nested().and_then(|n| n.get(key)))
}

/// One way of deriving the config key for a tooltip payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKeyStrategy {
    /// `payload.key` equals the requested key.
    KeyField,
    /// `payload.name` equals the requested key.
    NameField,
    /// `payload[key]` is a string; use that string.
    DirectString,
    /// `payload.payload[key]` is a string; use that string.
    NestedString,
}

impl LabelKeyStrategy {
    /// Strategies in the order they are tried.
    pub const ORDER: [LabelKeyStrategy; 4] = [
        LabelKeyStrategy::KeyField,
        LabelKeyStrategy::NameField,
        LabelKeyStrategy::DirectString,
        LabelKeyStrategy::NestedString,
    ];

    pub fn resolve<'a>(self, payload: &'a TooltipPayload, key: &'a str) -> Option<&'a str> {
        match self {
            LabelKeyStrategy::KeyField => (payload.key() == Some(key)).then_some(key),
            LabelKeyStrategy::NameField => (payload.name() == Some(key)).then_some(key),
            LabelKeyStrategy::DirectString => payload.get(key).and_then(Value::as_str),
            LabelKeyStrategy::NestedString => payload
                .nested()
                .and_then(|n| n.get(key))
                .and_then(Value::as_str),
        }
    }
}

/// Config key for `payload`: the first strategy that matches, else `key`.
pub fn resolve_label_key<'a>(payload: &'a TooltipPayload, key: &'a str) -> &'a str {
    LabelKeyStrategy::ORDER
        .iter()
        .find_map(|s| s.resolve(payload, key))
        .unwrap_or(key)
}

/// Item config for a tooltip payload, falling back to the entry for `key`.
pub fn config_for_payload<'c>(
    config: &'c ChartConfig,
    payload: &TooltipPayload,
    key: &str,
) -> Option<&'c ItemConfig> {
    let label_key = resolve_label_key(payload, key);
    config.get(label_key).or_else(|| config.get(key))
}

/// Chart-wide state shared with tooltip and legend code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartContext {
    config: ChartConfig,
}

impl ChartContext {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn item(&self, key: &str) -> Option<&ItemConfig> {
        self.config.get(key)
    }

    pub fn item_for_payload(&self, payload: &TooltipPayload, key: &str) -> Option<&ItemConfig> {
        config_for_payload(&self.config, payload, key)
    }
}
