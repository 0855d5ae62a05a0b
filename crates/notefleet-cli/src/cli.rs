//! CLI definition using clap

use clap::{Parser, Subcommand};
use notefleet_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "notefleet")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "In-memory notebook and delivery order tracker")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive notebook
    Notebook {
        /// First note id (overrides config)
        #[arg(long)]
        first_id: Option<u64>,
    },

    /// Run the interactive order tracker
    Logistics {
        /// TOML fleet definition (overrides config)
        #[arg(long)]
        fleet: Option<PathBuf>,

        /// Size of the numbered fleet (ignores any configured fleet file)
        #[arg(long, short = 'n', conflicts_with = "fleet")]
        vehicles: Option<u32>,

        /// First order id (overrides config)
        #[arg(long)]
        first_id: Option<u64>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default fleet size
        #[arg(long)]
        set_fleet_size: Option<u32>,

        /// Set default fleet file
        #[arg(long)]
        set_fleet_file: Option<PathBuf>,

        /// Forget the fleet file and use the numbered fleet
        #[arg(long)]
        clear_fleet_file: bool,

        /// Set the first order id
        #[arg(long)]
        set_first_order_id: Option<u64>,

        /// Set the first note id
        #[arg(long)]
        set_first_note_id: Option<u64>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
