//! Cycle MCP Server - Main Entry Point
//!
//! This is the main entry point for the cycle MCP server application.
//! The actual implementation is in the `cycle_mcp` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cycle_mcp::{Config, CycleServerHandler, logging};
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;

/// Cycle MCP Server - menstrual cycle and pregnancy tracking via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the tracker logs
    data_dir: PathBuf,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Default cycle length in days; overrides the config file
    #[arg(long)]
    cycle_length: Option<u32>,

    /// Default period length in days; overrides the config file
    #[arg(long)]
    period_length: Option<u32>,
}

impl Args {
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if let Some(days) = self.cycle_length {
            config.default_cycle_length = days;
        }
        if let Some(days) = self.period_length {
            config.default_period_length = days;
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();
    let config = args.resolve_config()?;
    logging::init_logging(&config.log_level)?;

    tracing::info!(data_dir = %args.data_dir.display(), "starting cycle MCP server");
    let handler = CycleServerHandler::new(&args.data_dir, config)?;
    serve_stdio(handler).await?;
    Ok(())
}
