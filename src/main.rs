// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use photobooth::constants::booth_limits;
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "photobooth")]
#[command(about = "Photobooth capture and strip compositing")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available filters
    Filters,

    /// List saved photos, newest first
    List {
        /// Directory to scan (default: ~/Pictures/photobooth)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Apply a filter and adjustments to a single photo
    Adjust {
        /// Input image file
        input: PathBuf,

        /// Output file or directory (default: ~/Pictures/photobooth)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Filter id (from 'filters')
        #[arg(short, long)]
        filter: Option<String>,

        /// Brightness percentage (0-200, 100 is neutral)
        #[arg(long, default_value = "100")]
        brightness: f32,

        /// Contrast percentage (0-200, 100 is neutral)
        #[arg(long, default_value = "100")]
        contrast: f32,

        /// Saturation percentage (0-200, 100 is neutral)
        #[arg(long, default_value = "100")]
        saturation: f32,

        /// Temperature (-100 to 100, 0 is neutral)
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        temperature: f32,

        /// Grain strength (0-100)
        #[arg(long, default_value = "0")]
        grain: f32,

        /// Fade strength (0-100)
        #[arg(long, default_value = "0")]
        fade: f32,

        /// Vignette strength (0-100)
        #[arg(long, default_value = "0")]
        vignette: f32,
    },

    /// Capture a single shot from a folder of source frames
    Snap {
        /// Directory of source frames
        source: PathBuf,

        /// Filter id (from 'filters')
        #[arg(short, long)]
        filter: Option<String>,

        /// Output directory (default: ~/Pictures/photobooth)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run a booth session and compose a strip
    Booth {
        /// Directory of source frames
        source: PathBuf,

        /// Number of shots to take (1-5)
        #[arg(short, long, default_value_t = booth_limits::SHOTS_DEFAULT)]
        shots: u32,

        /// Countdown seconds per shot (3, 5 or 10)
        #[arg(short, long)]
        timer: Option<u32>,

        /// Filter id (from 'filters')
        #[arg(short, long)]
        filter: Option<String>,

        /// Output directory (default: ~/Pictures/photobooth)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compose a strip from existing image files
    Strip {
        /// Input image files, in slot order
        inputs: Vec<PathBuf>,

        /// Number of strip cells (defaults to the number of inputs)
        #[arg(short, long)]
        shots: Option<u32>,

        /// Caption for the header band
        #[arg(short, long)]
        caption: Option<String>,

        /// Output file (default: ~/Pictures/photobooth/strip_TIMESTAMP.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=photobooth=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Filters => cli::list_filters(),
        Commands::List { dir } => cli::list_photos(dir),
        Commands::Adjust {
            input,
            output,
            filter,
            brightness,
            contrast,
            saturation,
            temperature,
            grain,
            fade,
            vignette,
        } => cli::adjust_photo(
            input,
            output,
            filter,
            brightness,
            contrast,
            saturation,
            temperature,
            grain,
            fade,
            vignette,
        ),
        Commands::Snap {
            source,
            filter,
            output,
        } => cli::snap(source, filter, output),
        Commands::Booth {
            source,
            shots,
            timer,
            filter,
            output,
        } => cli::run_booth(source, shots, timer, filter, output),
        Commands::Strip {
            inputs,
            shots,
            caption,
            output,
        } => cli::compose_strip_files(inputs, shots, caption, output),
    }
}
