//! Shape topic-modelled documents into the static JSON consumed by the
//! topic-explorer charts: one summary plus one detail blob per topic.

use crate::models::{ExportSummary, TopicDetail, TopicDoc, TopicEntry, TopicExport};
use chrono::NaiveDate;
use log::debug;
use regex::Regex;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

/// Families of AI annotation columns, in priority order.
pub const AI_FIELD_PREFIXES: [&str; 2] = ["gemini", "chatgpt"];

static TOPIC_ID_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+_").expect("valid topic id regex"));

// Accepted date shapes, each with the chrono format and the suffix that
// completes it to a full date. Years are exactly four digits; chrono's `%Y`
// alone would also take `99`, `+2020` or ` 2020`.
static MONTH_FORMATS: LazyLock<Vec<(Regex, &'static str, &'static str)>> = LazyLock::new(|| {
    [
        (r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$", "%Y-%m-%d", ""),
        (r"^[0-9]{4}/[0-9]{1,2}/[0-9]{1,2}$", "%Y/%m/%d", ""),
        (r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}$", "%d/%m/%Y", ""),
        (r"^[0-9]{4}-[0-9]{1,2}$", "%Y-%m-%d", "-01"),
        (r"^[0-9]{4}$", "%Y-%m-%d", "-01-01"),
    ]
    .into_iter()
    .map(|(shape, fmt, suffix)| (Regex::new(shape).expect("valid date shape"), fmt, suffix))
    .collect()
});

/// Export limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Max docs kept per topic (highest `topic_prob` first).
    pub per_topic_docs: usize,
    /// Topics with fewer docs are left out.
    pub topic_min_count: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            per_topic_docs: 200,
            topic_min_count: 5,
        }
    }
}

/// Normalize a loosely formatted date to `YYYY-MM`, or `""` if unknown.
///
/// Accepted: `2020-05-17`, `2020/05/17`, `17/05/2020`, `2020-05`, `2020`,
/// and anything longer whose first 10 characters match one of those.
pub fn month_key(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }
    let len = date.chars().count();
    let head: String = if len >= 7 {
        date.chars().take(10).collect()
    } else {
        date.to_string()
    };

    let parsed = MONTH_FORMATS
        .iter()
        .filter(|(shape, _, _)| shape.is_match(&head))
        .find_map(|(_, fmt, suffix)| {
            NaiveDate::parse_from_str(&format!("{head}{suffix}"), fmt).ok()
        });
    if let Some(d) = parsed {
        return d.format("%Y-%m").to_string();
    }

    if len >= 7 && matches!(date.chars().nth(4), Some('-' | '/')) {
        return date.chars().take(7).collect::<String>().replace('/', "-");
    }
    String::new()
}

/// Turn a raw topic label like `91_pouytenga_sécurité_faib` into
/// `Pouytenga Sécurité Faib`.
pub fn clean_topic_label(label: &str) -> String {
    if label.is_empty() {
        return String::new();
    }
    let stripped = TOPIC_ID_PREFIX.replace(label, "");
    stripped
        .replace('_', " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// AI annotation columns present in `docs`: every extra field of the first
/// prefix family (see [`AI_FIELD_PREFIXES`]) that occurs at all, sorted.
pub fn ai_fields(docs: &[TopicDoc]) -> Vec<String> {
    let columns: BTreeSet<&str> = docs
        .iter()
        .flat_map(|d| d.extra.keys().map(String::as_str))
        .collect();
    for prefix in AI_FIELD_PREFIXES {
        let family = format!("{prefix}_");
        let found: Vec<String> = columns
            .iter()
            .filter(|c| c.starts_with(&family))
            .map(|c| c.to_string())
            .collect();
        if !found.is_empty() {
            return found;
        }
    }
    Vec::new()
}

/// Month of a document: `pub_date` when present, else `date`.
pub fn doc_month(doc: &TopicDoc) -> String {
    doc.pub_date
        .as_deref()
        .or(doc.date.as_deref())
        .map(month_key)
        .unwrap_or_default()
}

// Most frequent label; ties go to the smallest string.
fn modal_label<'a>(labels: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for l in labels {
        *counts.entry(l).or_default() += 1;
    }
    // BTreeMap iterates ascending, so `max_by` would pick the largest tie;
    // compare reversed keys to keep the smallest.
    counts
        .into_iter()
        .max_by(|(la, ca), (lb, cb)| ca.cmp(cb).then_with(|| lb.cmp(la)))
        .map(|(l, _)| l)
}

fn by_prob_desc(a: &TopicDoc, b: &TopicDoc) -> Ordering {
    match (a.topic_prob, b.topic_prob) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Build the summary and per-topic details.
pub fn build_export(docs: &[TopicDoc], opts: &ExportOptions) -> TopicExport {
    let fields = ai_fields(docs);

    let mut by_topic: BTreeMap<i64, Vec<&TopicDoc>> = BTreeMap::new();
    for d in docs {
        if let Some(id) = d.topic_id {
            by_topic.entry(id).or_default().push(d);
        }
    }
    let total_docs: usize = by_topic.values().map(Vec::len).sum();
    let unique_topics = by_topic.len();

    let mut ranked: Vec<(i64, &Vec<&TopicDoc>)> =
        by_topic.iter().map(|(id, ds)| (*id, ds)).collect();
    ranked.sort_by(|(ia, da), (ib, db)| db.len().cmp(&da.len()).then(ia.cmp(ib)));

    let mut entries = Vec::new();
    let mut details = Vec::new();
    for (id, topic_docs) in ranked {
        let count = topic_docs.len();
        if count < opts.topic_min_count {
            debug!("skipping topic {id}: {count} docs < {}", opts.topic_min_count);
            continue;
        }
        let label = modal_label(topic_docs.iter().filter_map(|d| d.topic_label.as_deref()))
            .map(clean_topic_label)
            .unwrap_or_else(|| format!("Topic {id}"));

        let mut top: Vec<&TopicDoc> = topic_docs.clone();
        top.sort_by(|a, b| by_prob_desc(a, b));
        top.truncate(opts.per_topic_docs);

        let mut counts_by_country: BTreeMap<String, usize> = BTreeMap::new();
        let mut counts_by_month: BTreeMap<String, usize> = BTreeMap::new();
        for d in &top {
            if let Some(c) = d.country.as_deref().filter(|c| !c.is_empty()) {
                *counts_by_country.entry(c.to_string()).or_default() += 1;
            }
            let m = doc_month(d);
            if !m.is_empty() {
                *counts_by_month.entry(m).or_default() += 1;
            }
        }
        let avg_prob = if top.is_empty() {
            0.0
        } else {
            top.iter().map(|d| d.topic_prob.unwrap_or(0.0)).sum::<f64>() / top.len() as f64
        };

        let kept_docs = top
            .into_iter()
            .map(|d| {
                let mut doc = d.clone();
                doc.extra.retain(|k, _| fields.contains(k));
                for f in &fields {
                    doc.extra.entry(f.clone()).or_insert(Value::Null);
                }
                doc
            })
            .collect();

        entries.push(TopicEntry {
            id,
            label: label.clone(),
            count,
        });
        details.push(TopicDetail {
            id,
            label,
            count,
            avg_prob,
            counts_by_country,
            counts_by_month,
            ai_fields: fields.clone(),
            docs: kept_docs,
        });
    }

    TopicExport {
        summary: ExportSummary {
            total_docs,
            unique_topics,
            topics: entries,
            ai_fields: fields,
        },
        topics: details,
    }
}
