use std::{
    fs::File,
    io::{self, BufReader},
    net::SocketAddr,
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use hotel_inventory::{run, server, Hotel, HotelConfig};
use tracing_subscriber::EnvFilter;

mod args;
use args::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let result = match cli.serve {
        Some(addr) => serve(addr),
        None => run_commands(&cli),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Fatal: {:?}", e);
            ExitCode::FAILURE
        }
    }
}

// Logs go to stderr, stdout carries only protocol responses
fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_commands(cli: &Cli) -> anyhow::Result<()> {
    let mut hotel = Hotel::new(&HotelConfig::default());
    let stdout = io::stdout().lock();

    match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening command file {}", path.display()))?;
            run(&mut hotel, BufReader::new(file), stdout)?;
        }
        None => run(&mut hotel, io::stdin().lock(), stdout)?,
    }

    Ok(())
}

fn serve(addr: SocketAddr) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start tokio runtime")?;

    runtime.block_on(server::serve(addr, HotelConfig::default()))
}
