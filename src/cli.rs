use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "bmc-inventory")]
#[command(about = "Vendor-neutral hardware inventory and health from BMC data")]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Collect the full device inventory
    Inventory {
        /// JSON capture of the controller reads
        #[arg(short, long)]
        source: PathBuf,

        /// Output format (json, yaml, or pretty)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Report the device health verdict and POST code
    Health {
        /// JSON capture of the controller reads
        #[arg(short, long)]
        source: PathBuf,

        /// Output format (json, yaml, or pretty)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Post the device inventory to a fleet-management API
    PostInventory {
        /// JSON capture of the controller reads
        #[arg(short, long)]
        source: PathBuf,

        /// API base URL, overrides the configured one
        #[arg(short, long)]
        url: Option<String>,
    },
}
