#![deny(unsafe_code)]
//! CLI binary for the shape-scatter placement engine.
//!
//! Subcommands:
//! - `generate` — compose N non-overlapping shape canvases and write PNGs
//! - `shapes` — print the canonical shapes, their source files and crop boxes

mod error;

use clap::{ArgAction, Parser, Subcommand};
use error::CliError;
use shape_scatter_core::prng::seed_from_clock;
use shape_scatter_core::{BatchConfig, BatchDriver, PlacementParams, ShapeKind, Xorshift64};
use shape_scatter_io::{DirectorySource, PngExporter};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "shape-scatter",
    version,
    about = "Generate images with non-overlapping shapes"
)]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Raise log verbosity (-v debug, -vv trace). Without -v, RUST_LOG
    /// sets the filter when present; otherwise the level is info.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compose output images and write them as PNG files.
    Generate {
        /// Folder holding the four shape source images.
        #[arg(long)]
        input: PathBuf,

        /// Folder the output images are written to.
        #[arg(long)]
        output: PathBuf,

        /// Output image dimensions; width and height must match.
        #[arg(long, num_args = 2, value_names = ["WIDTH", "HEIGHT"], required = true)]
        dimensions: Vec<u32>,

        /// Number of output images to generate.
        #[arg(long)]
        num_images: usize,

        /// PRNG seed; drawn from the clock when omitted.
        #[arg(long)]
        seed: Option<u64>,

        /// Placement parameters as a JSON string
        /// (sprite_size, scale_min, scale_max, angle_max).
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// List the canonical shapes in scheduling order.
    Shapes,
}

/// Builds the log filter. An explicit `-v` raises the global level on top
/// of `rust_log`; without it `rust_log` is used as given.
fn log_filter(verbose: u8, rust_log: Option<&str>) -> EnvFilter {
    let level = match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    match rust_log {
        Some(directives) if verbose == 0 => EnvFilter::new(directives),
        Some(directives) => EnvFilter::new(directives).add_directive(level.into()),
        None => EnvFilter::default().add_directive(level.into()),
    }
}

fn init_logging(verbose: u8) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn build_config(
    dimensions: &[u32],
    num_images: usize,
    seed: Option<u64>,
    params: &str,
) -> Result<BatchConfig, CliError> {
    let (width, height) = match dimensions {
        [w, h] => (*w, *h),
        _ => return Err(CliError::Input("--dimensions takes WIDTH HEIGHT".into())),
    };
    if width != height {
        return Err(CliError::Input(format!(
            "invalid image size {width}x{height}: output images must be square"
        )));
    }
    let params: serde_json::Value = serde_json::from_str(params)
        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;

    let config = BatchConfig {
        canvas_width: width,
        canvas_height: height,
        num_images,
        seed: seed.unwrap_or_else(seed_from_clock),
        placement: PlacementParams::from_json(&params),
    };
    config.validate()?;
    Ok(config)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Shapes => {
            if cli.json {
                let shapes: Vec<_> = ShapeKind::ALL
                    .iter()
                    .map(|k| {
                        serde_json::json!({
                            "shape": k,
                            "file": k.file_name(),
                            "crop": k.crop(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&shapes)?);
            } else {
                println!("Shapes (scheduling order):");
                for k in ShapeKind::ALL {
                    let c = k.crop();
                    println!(
                        "  {:<13} {:<36} crop ({}, {}, {}, {})",
                        k.name(),
                        k.file_name(),
                        c.left,
                        c.top,
                        c.right,
                        c.bottom
                    );
                }
            }
        }
        Command::Generate {
            input,
            output,
            dimensions,
            num_images,
            seed,
            params,
        } => {
            let config = build_config(&dimensions, num_images, seed, &params)?;
            let seed = config.seed;
            tracing::info!(seed, input = %input.display(), output = %output.display(), "generating");

            let mut driver = BatchDriver::from_source(config, &DirectorySource::new(&input))?;
            let mut exporter = PngExporter::new(&output)?;
            let mut rng = Xorshift64::new(seed);
            let report = driver.run(&mut exporter, &mut rng)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for image in &report.images {
                    match (&image.destination, &image.export_error) {
                        (Some(dest), _) => {
                            eprintln!("image {}: {} shapes placed -> {dest}", image.index, image.placed())
                        }
                        (None, Some(err)) => {
                            eprintln!("image {}: export failed: {err}", image.index)
                        }
                        (None, None) => {}
                    }
                }
                eprintln!(
                    "generated {}/{} images ({}x{}, seed {seed})",
                    report.exported(),
                    report.images.len(),
                    report.canvas_side,
                    report.canvas_side
                );
            }

            let failed = report.images.len() - report.exported();
            if failed > 0 {
                return Err(CliError::Io(format!("{failed} image(s) could not be exported")));
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
