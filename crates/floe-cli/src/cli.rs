//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// Floe - versioned SQL migration deployment for data warehouses
#[derive(Parser, Debug)]
#[command(name = "floe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply discovered migrations against the warehouse
    Deploy(DeployArgs),

    /// Show the ordered execution plan without applying it
    Plan(PlanArgs),

    /// Extract object DDL from the warehouse into files
    Extract(ExtractArgs),
}

/// Arguments for the deploy command
#[derive(Args, Debug)]
pub struct DeployArgs {
    /// Migration root directory (overrides sql_paths from config)
    #[arg(short = 'd', long)]
    pub path: Option<String>,

    /// Read migration paths from a list file instead of walking a directory
    #[arg(long)]
    pub file_list: Option<String>,
}

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Migration root directory (overrides sql_paths from config)
    #[arg(short = 'd', long)]
    pub path: Option<String>,

    /// Read migration paths from a list file instead of walking a directory
    #[arg(long)]
    pub file_list: Option<String>,

    /// Write the flattened ordered path list to a file
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the extract command
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Directory to write extracted DDL into
    #[arg(short, long, default_value = "sql")]
    pub output_dir: String,

    /// Only extract these schemas (comma-separated, default: all)
    #[arg(short, long)]
    pub schemas: Option<String>,
}
