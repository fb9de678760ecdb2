use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brickify::models::{AppConfig, SizeClass};
use brickify::services::{ConvertOptions, MosaicPipeline};

#[derive(Parser)]
#[command(name = "brickify")]
#[command(about = "Brickify - turn photos into brick mosaic grids")]
struct Cli {
    /// Path to config.yaml (falls back to CONFIG_FILE, then built-in defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an image into brick-color grids
    Convert {
        /// Input image (PNG, JPEG, ...) or a text file holding a base64 data URL
        #[arg(short, long)]
        input: PathBuf,

        /// Size class: "small" or "medium"
        #[arg(short, long, default_value = "medium")]
        size: String,

        /// Variant selector: 0 baseline, -1 all, 1..=2L a single variant
        #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
        selector: i32,

        /// Seed for reproducible balancing
        #[arg(long)]
        seed: Option<u64>,

        /// Write the JSON report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Save preview PNGs (also requires save_preview in config)
        #[arg(long)]
        save_preview: bool,
    },
    /// Print the effective configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));

    match cli.command {
        Some(Commands::Convert {
            input,
            size,
            selector,
            seed,
            output,
            save_preview,
        }) => run_convert_command(
            config_path.as_deref(),
            &input,
            &size,
            selector,
            seed,
            output.as_deref(),
            save_preview,
        ),
        Some(Commands::Config) => run_config_command(config_path.as_deref()),
        None => {
            run_status_command(config_path.as_deref());
            Ok(())
        }
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Convert one image and emit the JSON report
fn run_convert_command(
    config_path: Option<&Path>,
    input: &Path,
    size: &str,
    selector: i32,
    seed: Option<u64>,
    output: Option<&Path>,
    save_preview: bool,
) -> anyhow::Result<()> {
    init_tracing("brickify=info");

    let config = Arc::new(AppConfig::load_or_default(config_path)?);
    let pipeline = MosaicPipeline::new(config)?;

    let options = ConvertOptions {
        size: size.parse::<SizeClass>()?,
        selector,
        save_preview,
    };
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let report = match pipeline.convert_file(input, options, &mut rng) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(code = e.code(), error = %e, "Conversion failed");
            return Err(e.into());
        }
    };

    let json = serde_json::to_string_pretty(&report)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            tracing::info!(path = %path.display(), "Wrote report");
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// Print the effective configuration as YAML
fn run_config_command(config_path: Option<&Path>) -> anyhow::Result<()> {
    init_tracing("brickify=warn");

    let config = AppConfig::load_or_default(config_path)?;
    print!("{}", serde_yaml::to_string(&config)?);
    Ok(())
}

/// Show version, configuration source and usage hints
fn run_status_command(config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Brickify v{VERSION}");
    println!("Photo to brick mosaic converter\n");

    println!("Configuration:");
    match config_path {
        Some(path) if path.exists() => println!("  config = {}", path.display()),
        Some(path) => println!("  config = {} (missing, defaults apply)", path.display()),
        None => println!("  config = (built-in defaults)"),
    }

    match AppConfig::load_or_default(config_path) {
        Ok(config) => {
            for size in SizeClass::ALL {
                let spec = config.size(size);
                println!(
                    "  {size:<6} canvas {}px, block {}, budget {} per color",
                    spec.canvas, spec.block, spec.budget
                );
            }
            println!("  colors = {}", config.color_weights.len());
            println!("  contrast levels = {:?}", config.contrast_levels);
        }
        Err(e) => println!("  error: {e}"),
    }

    println!("\nUsage:");
    println!("  brickify convert --input photo.jpg [--size small|medium] [--selector N]");
    println!("  brickify config");
}
