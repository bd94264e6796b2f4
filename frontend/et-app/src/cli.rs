use crate::Commands;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "et")]
#[command(about = "Personal expense tracker")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides api.base_url / ET_API_BASE_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}
