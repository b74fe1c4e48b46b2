//! Nomad CLI Application
//!
//! Command-line interface and MCP server for the nomad trip planner.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, NomadMcpServer};
use nomad_core::TripPlannerBuilder;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let mut builder = TripPlannerBuilder::new();
    if let Some(path) = database_file {
        builder = builder.with_database_path(path);
    }
    let planner = builder
        .build()
        .await
        .context("Failed to initialize planner")?;

    let cli = || Cli::new(planner.clone(), TerminalRenderer::new(!no_color));

    info!("Nomad started");

    match command {
        Some(Itinerary { command }) => cli().handle_itinerary_command(command).await,
        Some(Place { command }) => cli().handle_place_command(command).await,
        Some(List { command }) => cli().handle_list_command(command).await,
        Some(Serve) => {
            info!("Starting Nomad MCP server");
            run_stdio_server(NomadMcpServer::new(planner.clone()))
                .await
                .context("MCP server failed")
        }
        None => cli().list_itineraries().await,
    }
}
