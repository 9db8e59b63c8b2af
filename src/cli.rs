use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kingfall_chess", version, about = "Two-player chess where taking the king wins")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play an interactive game on the terminal.
    Play {
        /// Resume from a saved game file.
        #[arg(long, conflicts_with = "position")]
        load: Option<PathBuf>,

        /// Start from a piece-placement field instead of the standard setup.
        #[arg(long)]
        position: Option<String>,

        /// Side to move with --position: `w` or `b`.
        #[arg(long, requires = "position", default_value = "w")]
        side: String,
    },
    /// Run seeded random playouts and print a summary.
    Playout {
        #[arg(long, default_value_t = 10)]
        games: u16,

        #[arg(long, default_value_t = 0)]
        seed: u64,

        #[arg(long, default_value_t = 300)]
        max_plies: u16,
    },
}
