use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;

#[derive(Parser)]
#[command(about = "In-memory hotel room inventory tracker", long_about = None)]
pub struct Cli {
    /// Read commands from this file instead of standard input
    #[arg(short, long, conflicts_with = "serve")]
    pub input: Option<PathBuf>,

    /// Serve POST /execute on this address instead of reading commands
    #[arg(short, long)]
    pub serve: Option<SocketAddr>,

    /// Log filter for stderr output, e.g. `info` or `hotel_inventory=debug`
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,
}
