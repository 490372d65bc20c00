use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jiff::Zoned;

use crate::cli::{PlanArgs, PolicyArgs, RouteArgs, ServeArgs};

/// Trip planner for property-carrying drivers
///
/// Convoy plans the fuel stops, breaks and rests a trip needs under the
/// Hours-of-Service rules and generates the matching ELD log. It can plan
/// over a known distance, resolve a route between addresses first, or run
/// as an MCP (Model Context Protocol) server for AI assistants.
#[derive(Parser)]
#[command(version, about, name = "convoy")]
pub struct Args {
    /// Path to a JSON policy file. Defaults to
    /// $XDG_CONFIG_HOME/convoy/policy.json when it exists
    #[arg(long, global = true)]
    pub policy_file: Option<PathBuf>,

    /// Time the ELD log starts at, e.g. 2025-03-03T08:00[America/Chicago].
    /// Defaults to now
    #[arg(long, global = true)]
    pub start: Option<Zoned>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Convoy CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Plan a trip over a known distance
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// Resolve a route between addresses and plan the trip over it
    #[command(alias = "r")]
    Route(RouteArgs),
    /// Show the effective Hours-of-Service policy
    Policy(PolicyArgs),
    /// Start the MCP server
    Serve(ServeArgs),
}
