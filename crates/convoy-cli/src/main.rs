//! Convoy CLI Application
//!
//! Command-line interface and MCP server for the convoy trip planner.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, ServeArgs, trip_service};
use convoy_core::{TripPlannerBuilder, eld::FixedClock};
use log::info;
use mcp::{ConvoyMcpServer, run_stdio_server};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        policy_file,
        start,
        no_color,
        command,
    } = Args::parse();

    let mut builder = TripPlannerBuilder::new().with_policy_file(policy_file);
    if let Some(start) = start {
        builder = builder.with_clock(FixedClock::new(start));
    }
    let planner = builder.build().context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Convoy started");

    match command {
        Plan(args) => Cli::new(planner, renderer).plan(args),
        Route(args) => Cli::new(planner, renderer).route(args).await,
        Policy(args) => Cli::new(planner, renderer).policy(args),
        Serve(ServeArgs { nominatim_url }) => {
            info!("Starting Convoy MCP server");
            let service = trip_service(planner, None, &nominatim_url)?;
            run_stdio_server(ConvoyMcpServer::new(service))
                .await
                .context("MCP server failed")
        }
    }
}
