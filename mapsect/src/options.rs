use clap::{Parser, Subcommand};
use section::MapScale;
use std::path::PathBuf;

/// Generate elevation cross-sections from digitized map measurements.
#[derive(Parser, Debug, Clone)]
pub struct Cli {
    /// Map scale, as a bare denominator ("50000") or ratio ("1:50000").
    #[arg(short, long, default_value = "1:50000")]
    pub scale: MapScale,

    /// Comma-separated on-map distances, in pixel units.
    #[arg(short, long, default_value = "0, 150, 300, 450")]
    pub distances: String,

    /// Comma-separated altitudes, in meters.
    #[arg(short, long, default_value = "600, 620, 640, 680")]
    pub altitudes: String,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the profile curve to stdout.
    Csv,

    /// Print the profile as JSON to stdout.
    Json,

    /// Plot to terminal.
    Plot,

    /// Render the profile to a PNG image.
    Render {
        /// Output file.
        #[arg(short, long, default_value = "profile.png")]
        out: PathBuf,
    },

    /// Print ascent and descent statistics for the profile.
    Stats,
}
