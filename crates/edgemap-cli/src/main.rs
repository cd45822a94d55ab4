use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use edgemap_core::GradientPlane;
use edgemap_filter::{SobelPlanes, min_max_normalize, sobel_edge_filter};
use edgemap_io::{PnmFormat, detect_format, read_graymap, write_graymap};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "edgemap", about = "Sobel gradient-magnitude edge filter for PGM graymaps")]
#[command(version)]
struct Cli {
    /// Input graymap file (plain P2 or raw P5)
    input: PathBuf,

    /// Number of filter passes to run for timing
    #[arg(default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    iterations: u32,

    /// Directory for the output graymaps
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let format = detect_format(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    let mut image = read_graymap(&cli.input)
        .with_context(|| format!("Failed to load {}", cli.input.display()))?;

    println!(
        "Loaded {}x{} graymap, maxval {}",
        image.width(),
        image.height(),
        image.max_gray()
    );
    debug!(format = format.magic(), iterations = cli.iterations);

    image.pad_border();

    // Time the filter passes only; I/O and normalization stay outside.
    let start = Instant::now();
    let mut planes: Option<SobelPlanes> = None;
    for _ in 0..cli.iterations {
        planes = Some(sobel_edge_filter(&image)?);
    }
    let elapsed = start.elapsed().as_secs_f64();
    let planes = planes.context("no filter pass ran")?;

    println!(
        "Sobel filter: {} passes in {:.6} s ({:.6} s per pass)",
        cli.iterations,
        elapsed,
        elapsed / f64::from(cli.iterations)
    );

    save_plane(&planes.magnitude, &cli.output_dir, "gradient.pgm", format)?;
    save_plane(&planes.gx, &cli.output_dir, "gradient_x.pgm", format)?;
    save_plane(&planes.gy, &cli.output_dir, "gradient_y.pgm", format)?;

    Ok(())
}

/// Normalize a plane onto the display range and write it out in the
/// input's graymap variant.
fn save_plane(
    plane: &GradientPlane,
    output_dir: &Path,
    name: &str,
    format: PnmFormat,
) -> Result<()> {
    let gray = min_max_normalize(plane)
        .to_gray(255)
        .context("normalized plane out of display range")?;

    let path = output_dir.join(name);
    write_graymap(&path, &gray, format)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Saved to {}", path.display());

    Ok(())
}
