use crate::models::{TopicDoc, TopicExport};
use crate::palette::Swatch;
use anyhow::{Context, Result};
use csv::WriterBuilder;
use log::info;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Save swatches as CSV with header.
pub fn save_swatches_csv<P: AsRef<Path>>(swatches: &[Swatch], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("label", "background", "text"))?;
    for s in swatches {
        wtr.serialize((&s.label, &s.background, &s.text))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save swatches as pretty JSON array.
pub fn save_swatches_json<P: AsRef<Path>>(swatches: &[Swatch], path: P) -> Result<()> {
    write_pretty_json(swatches, path.as_ref())
}

/// Read a JSON array of topic documents.
pub fn load_docs<P: AsRef<Path>>(path: P) -> Result<Vec<TopicDoc>> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let docs: Vec<TopicDoc> =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    info!("loaded {} docs from {}", docs.len(), path.display());
    Ok(docs)
}

/// Write `summary.json` and `topics/{id}.json` under `out_dir`.
/// Returns the written paths, summary first.
pub fn write_export<P: AsRef<Path>>(export: &TopicExport, out_dir: P) -> Result<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    let topics_dir = out_dir.join("topics");
    fs::create_dir_all(&topics_dir)
        .with_context(|| format!("creating {}", topics_dir.display()))?;

    let mut written = Vec::with_capacity(export.topics.len() + 1);
    let summary_path = out_dir.join("summary.json");
    write_pretty_json(&export.summary, &summary_path)?;
    info!("wrote {}", summary_path.display());
    written.push(summary_path);

    for topic in &export.topics {
        let path = topics_dir.join(format!("{}.json", topic.id));
        write_pretty_json(topic, &path)?;
        info!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

fn write_pretty_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let mut f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let s = serde_json::to_string_pretty(value)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
