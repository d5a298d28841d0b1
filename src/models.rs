use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One topic-modelled document, as exported by the modelling pipeline.
///
/// Every column is optional because pipeline stages add them incrementally.
/// Columns not listed here (e.g. `gemini_*` annotations) land in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicDoc {
    #[serde(default, deserialize_with = "de_opt_i64_from_any")]
    pub topic_id: Option<i64>,
    #[serde(default)]
    pub topic_prob: Option<f64>,
    #[serde(default)]
    pub topic_label: Option<String>,
    #[serde(default)]
    pub pub_date: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub newspaper: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub ocr_title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default, rename = "o:source")]
    pub o_source: Option<String>,
    #[serde(default)]
    pub sentiment_label: Option<String>,
    #[serde(default)]
    pub sentiment_score: Option<f64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Serde helper: topic ids arrive as integers, integral floats (`12.0`) or strings.
fn de_opt_i64_from_any<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct TopicIdVisitor;

    impl<'de> Visitor<'de> for TopicIdVisitor {
        type Value = Option<i64>;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "an integer topic id, an integral float, a numeric string, or null")
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v))
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            i64::try_from(v).map(Some).map_err(E::custom)
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if v.is_nan() {
                return Ok(None);
            }
            if v.fract() != 0.0 || !v.is_finite() {
                return Err(E::custom(format!("non-integral topic id {v}")));
            }
            Ok(Some(v as i64))
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<i64>().map(Some).map_err(E::custom)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, d: D) -> Result<Self::Value, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            d.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(TopicIdVisitor)
}

/// One entry of the topic list in `summary.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicEntry {
    pub id: i64,
    pub label: String,
    pub count: usize,
}

/// Contents of `summary.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSummary {
    pub total_docs: usize,
    /// Distinct topic ids before the minimum-count filter.
    pub unique_topics: usize,
    pub topics: Vec<TopicEntry>,
    pub ai_fields: Vec<String>,
}

/// Contents of `topics/{id}.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicDetail {
    pub id: i64,
    pub label: String,
    pub count: usize,
    pub avg_prob: f64,
    pub counts_by_country: BTreeMap<String, usize>,
    pub counts_by_month: BTreeMap<String, usize>,
    pub ai_fields: Vec<String>,
    pub docs: Vec<TopicDoc>,
}

/// Everything the topic explorer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicExport {
    pub summary: ExportSummary,
    pub topics: Vec<TopicDetail>,
}
