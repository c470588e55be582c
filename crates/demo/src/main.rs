// File: crates/demo/src/main.rs
// Summary: `dashchart` CLI; renders JSON chart specs, CSV tables and built-in dashboard samples to SVG (PNG with `--features png`).

mod config;
mod csv_table;
mod samples;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dashchart_core::{adapt, build_rows, layout, write_svg, ChartKind, ChartSpec, Scene};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "dashchart")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render event dashboard charts from JSON specs or CSV tables")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: <config dir>/dashchart/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Theme preset (light, dark, slate); overrides the config file
    #[arg(long, global = true)]
    theme: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON chart spec
    Render {
        /// Path to the spec JSON
        spec: PathBuf,
        /// Output SVG path (default: <output dir>/<spec stem>.svg)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Also write a PNG next to the SVG
        #[arg(long)]
        png: bool,
    },

    /// Print the row table built from a spec as JSON
    Rows {
        spec: PathBuf,
    },

    /// Print the render tree built from a spec as JSON
    Tree {
        spec: PathBuf,
    },

    /// Build a spec from a CSV table (first column = categories) and render it
    FromCsv {
        /// Path to the CSV file
        csv: PathBuf,
        /// Chart kind: bar, line, area, pie, doughnut
        #[arg(short, long, default_value = "bar")]
        kind: String,
        /// Categories on the vertical axis (bar only)
        #[arg(long)]
        horizontal: bool,
        /// Fill the parent height instead of the fixed height
        #[arg(long)]
        fill: bool,
        /// Put the legend on the left
        #[arg(long)]
        legend_left: bool,
        /// Print the generated spec JSON instead of rendering
        #[arg(long)]
        print_spec: bool,
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[arg(long)]
        png: bool,
    },

    /// Render the built-in event dashboard samples
    Samples {
        #[arg(long)]
        png: bool,
        /// List sample names without rendering
        #[arg(long)]
        list: bool,
    },

    /// Print a commented default config file
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, config_path) = Config::resolve(cli.config.as_deref())?;
    if let Some(theme) = &cli.theme {
        config.render.theme = theme.clone();
    }
    init_tracing(&config.logging.level);
    match &config_path {
        Some(p) => info!("Loaded config from {}", p.display()),
        None => debug!("Using default config"),
    }

    match cli.command {
        Commands::Render { spec, out, png } => {
            let chart = load_spec(&spec)?;
            let out = out.unwrap_or_else(|| out_name(&config, &spec, None));
            render(&config, &chart, &out, png)?;
        }
        Commands::Rows { spec } => {
            let chart = load_spec(&spec)?;
            println!("{}", serde_json::to_string_pretty(&build_rows(&chart))?);
        }
        Commands::Tree { spec } => {
            let chart = load_spec(&spec)?;
            println!("{}", adapt(&chart).to_json_pretty()?);
        }
        Commands::FromCsv { csv, kind, horizontal, fill, legend_left, print_spec, out, png } => {
            let kind = ChartKind::from(kind);
            if !kind.is_supported() {
                tracing::warn!(kind = kind.as_str(), "unsupported kind; the chart will render a placeholder");
            }
            let file = std::fs::File::open(&csv).with_context(|| format!("opening {}", csv.display()))?;
            let chart = csv_table::spec_from_csv(file, kind, &config.csv.date_format)
                .with_context(|| format!("failed to load CSV '{}'", csv.display()))?
                .with_options(csv_table::csv_options(horizontal, fill, legend_left));
            info!("Loaded {} categories x {} series", chart.categories.len(), chart.series.len());

            if print_spec {
                println!("{}", chart.to_json_pretty()?);
            } else {
                let out = out.unwrap_or_else(|| out_name(&config, &csv, Some(chart.kind.as_str())));
                render(&config, &chart, &out, png)?;
            }
        }
        Commands::Samples { list: true, .. } => {
            for name in samples::names() {
                println!("{name}");
            }
        }
        Commands::Samples { png, list: false } => {
            for (name, chart) in samples::load_all()? {
                let out = config.out_dir().join(format!("sample_{name}.svg"));
                render(&config, &chart, &out, png)?;
            }
        }
        Commands::Config => print!("{}", config::generate_default_config()),
    }
    Ok(())
}

fn init_tracing(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_directives(level)));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Fallback filter when RUST_LOG is unset: the CLI and every library crate it drives.
fn log_directives(level: &str) -> String {
    ["dashchart", "dashchart_core", "dashchart_render_skia"]
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn load_spec(path: &Path) -> Result<ChartSpec> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let spec = ChartSpec::from_json(&text).with_context(|| format!("parsing {}", path.display()))?;
    debug!(kind = spec.kind.as_str(), categories = spec.categories.len(), series = spec.series.len(), "loaded spec");
    Ok(spec)
}

/// Produce output file name like target/out/<stem>[_<suffix>].svg
fn out_name(config: &Config, input: &Path, suffix: Option<&str>) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let file = match suffix {
        Some(s) => format!("{stem}_{s}.svg"),
        None => format!("{stem}.svg"),
    };
    config.out_dir().join(file)
}

fn render(config: &Config, spec: &ChartSpec, out_svg: &Path, png: bool) -> Result<()> {
    let scene = layout(&adapt(spec), &config.viewport(), &config.theme());
    write_svg(&scene, out_svg).with_context(|| format!("writing {}", out_svg.display()))?;
    println!("Wrote {}", out_svg.display());
    if png {
        let out_png = out_svg.with_extension("png");
        write_png(&scene, &out_png)?;
        println!("Wrote {}", out_png.display());
    }
    Ok(())
}

#[cfg(feature = "png")]
fn write_png(scene: &Scene, path: &Path) -> Result<()> {
    use dashchart_render_skia::{render_to_png, RasterOptions};
    render_to_png(scene, &RasterOptions::default(), path)
}

#[cfg(not(feature = "png"))]
fn write_png(_scene: &Scene, _path: &Path) -> Result<()> {
    anyhow::bail!("PNG output needs the `png` feature (cargo run -p dashchart-demo --features png)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_filter_covers_the_raster_crate() {
        let directives = log_directives("warn");
        assert_eq!(directives, "dashchart=warn,dashchart_core=warn,dashchart_render_skia=warn");
        assert!(tracing_subscriber::EnvFilter::try_new(&directives).is_ok());
    }

    #[test]
    fn default_output_names_follow_the_input_stem() {
        let config = Config::default();
        let out = out_name(&config, Path::new("data/sales.csv"), Some("bar"));
        assert_eq!(out, PathBuf::from("target/out/sales_bar.svg"));
        assert_eq!(out_name(&config, Path::new("x.json"), None), PathBuf::from("target/out/x.svg"));
    }

    #[test]
    fn samples_list_flag_parses_without_rendering() {
        let cli = Cli::try_parse_from(["dashchart", "samples", "--list"]).unwrap();
        assert!(matches!(cli.command, Commands::Samples { list: true, png: false }));
        assert!(samples::names().any(|n| n == "ticket_sales"));
    }
}
