//! Command-line argument definition.

use clap::Parser;

/// lms-search - Live search over the courses and modules of an LMS
#[derive(Parser, Debug, Default)]
#[command(name = "lms-search")]
#[command(version)]
#[command(about = "Live search over the courses and modules of an LMS", long_about = None)]
pub struct Args {
    /// Base URL of the LMS REST API (overrides `api_base_url`)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Maximum number of results requested per search (overrides `search_limit`)
    #[arg(long)]
    pub limit: Option<u32>,

    /// Debounce window in milliseconds (overrides `debounce_ms`)
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Placeholder shown in the empty input (overrides `placeholder`)
    #[arg(long)]
    pub placeholder: Option<String>,

    /// Focus the input on start
    #[arg(long)]
    pub auto_focus: bool,

    /// Search for this term on start
    #[arg(short, long)]
    pub query: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}
