use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "pf")]
#[command(about = "Profile screen from the terminal: view, avatar upload, logout, account deletion")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
