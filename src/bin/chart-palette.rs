use anyhow::{Context, Result};
use chart_palette::chart::{ChartConfig, TooltipPayload, config_for_payload};
use chart_palette::topics::{ExportOptions, build_export};
use chart_palette::{country_color, palette, storage, text_color_for_bg, viz};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "chart-palette",
    version,
    about = "Country colors, text contrast, chart configs & topic exports for topic-explorer charts"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the background and text color for each label.
    Color {
        /// Country labels (quote labels with spaces).
        #[arg(required = true)]
        labels: Vec<String>,
    },
    /// Print the readable text color for each hex background.
    Contrast {
        #[arg(required = true)]
        colors: Vec<String>,
    },
    /// Build swatches for a list of labels (and optionally save or plot them).
    Swatches(SwatchArgs),
    /// Print the per-theme CSS variables of a chart config.
    Css {
        /// Chart config JSON file.
        #[arg(long)]
        config: PathBuf,
        /// Chart id used in the `[data-chart=...]` selector.
        #[arg(long, default_value = "chart")]
        id: String,
    },
    /// Resolve the config entry for a tooltip payload.
    Tooltip {
        /// Chart config JSON file.
        #[arg(long)]
        config: PathBuf,
        /// Tooltip payload JSON file (an object).
        #[arg(long)]
        payload: PathBuf,
        /// Series key to resolve.
        #[arg(long)]
        key: String,
    },
    /// Export topic documents to summary.json and topics/{id}.json.
    Topics(TopicArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct SwatchArgs {
    /// Labels separated by comma or semicolon (e.g., "Togo,Benin;Mali")
    #[arg(short, long)]
    labels: String,
    /// Save swatches to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Render a swatch sheet to the given .svg path.
    #[arg(long)]
    plot: Option<PathBuf>,
    /// Width of the swatch sheet.
    #[arg(long, default_value_t = viz::DEFAULT_WIDTH)]
    width: u32,
}

#[derive(Args, Debug)]
struct TopicArgs {
    /// JSON array of topic-modelled documents.
    #[arg(long)]
    input: PathBuf,
    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,
    /// Max docs per topic to include.
    #[arg(long, default_value_t = ExportOptions::default().per_topic_docs)]
    per_topic_docs: usize,
    /// Drop topics with fewer docs.
    #[arg(long, default_value_t = ExportOptions::default().topic_min_count)]
    topic_min_count: usize,
}

fn parse_list(s: &str) -> Vec<String> {
    s.split([',', ';'])
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Color { labels } => {
            for label in labels {
                let bg = country_color(Some(label.as_str()));
                println!("{}\t{}\t{}", label, bg, text_color_for_bg(bg));
            }
            Ok(())
        }
        Command::Contrast { colors } => {
            for c in colors {
                println!("{}\t{}", c, text_color_for_bg(&c));
            }
            Ok(())
        }
        Command::Swatches(args) => cmd_swatches(args),
        Command::Css { config, id } => {
            let cfg = ChartConfig::load(&config)?;
            if let Some(css) = cfg.style_css(&id) {
                println!("{css}");
            }
            Ok(())
        }
        Command::Tooltip {
            config,
            payload,
            key,
        } => {
            let cfg = ChartConfig::load(&config)?;
            let text = std::fs::read_to_string(&payload)
                .with_context(|| format!("reading {}", payload.display()))?;
            let value: serde_json::Value = serde_json::from_str(&text)
                .with_context(|| format!("parsing {}", payload.display()))?;
            let payload = TooltipPayload::from_value(value)
                .ok_or_else(|| anyhow::anyhow!("tooltip payload must be a JSON object"))?;
            let item = config_for_payload(&cfg, &payload, &key);
            println!("{}", serde_json::to_string_pretty(&item)?);
            Ok(())
        }
        Command::Topics(args) => cmd_topics(args),
    }
}

fn cmd_swatches(args: SwatchArgs) -> Result<()> {
    let labels = parse_list(&args.labels);
    if labels.is_empty() {
        anyhow::bail!("--labels is empty");
    }
    let swatches = palette::swatches(&labels);

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_swatches_csv(&swatches, path)?,
            "json" => storage::save_swatches_json(&swatches, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved {} swatches to {}", swatches.len(), path.display());
    }

    if let Some(plot_path) = args.plot.as_ref() {
        viz::plot_swatches(&swatches, plot_path, args.width)?;
        eprintln!("Wrote swatch sheet to {}", plot_path.display());
    }

    if args.out.is_none() && args.plot.is_none() {
        for s in &swatches {
            println!("{}\t{}\t{}", s.label, s.background, s.text);
        }
    }
    Ok(())
}

fn cmd_topics(args: TopicArgs) -> Result<()> {
    let docs = storage::load_docs(&args.input)?;
    let opts = ExportOptions {
        per_topic_docs: args.per_topic_docs,
        topic_min_count: args.topic_min_count,
    };
    let export = build_export(&docs, &opts);
    let written = storage::write_export(&export, &args.out_dir)?;
    eprintln!(
        "Exported {} topics ({} files) to {}",
        export.topics.len(),
        written.len(),
        args.out_dir.display()
    );
    Ok(())
}
