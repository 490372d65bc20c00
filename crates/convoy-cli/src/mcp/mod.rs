//! MCP server implementation for Convoy
//!
//! Exposes trip planning to AI assistants through the Model Context
//! Protocol. Tool results are the same markdown the CLI renders.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use convoy_core::TripService;
use log::{debug, error, info};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use tokio::signal::unix::{SignalKind, signal};

pub mod errors;
pub mod handlers;

pub use handlers::{McpResult, PlanTrip, RouteTrip};

/// MCP server for Convoy
#[derive(Clone)]
pub struct ConvoyMcpServer {
    service: Arc<TripService>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ConvoyMcpServer {
    /// Create a new Convoy MCP server
    pub fn new(service: TripService) -> Self {
        Self {
            service: Arc::new(service),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.service.clone())
    }

    #[tool(
        name = "plan_trip",
        description = "Plan a truck trip over a known distance in miles. Provide total_distance, pickup_location, dropoff_location and optionally current_cycle_used (hours already used in the current cycle, default 0). Returns the ordered stops (pickup, fuel stops, 30-minute breaks, 10-hour rests, dropoff) and the ELD duty-status log as markdown."
    )]
    async fn plan_trip(&self, params: Parameters<PlanTrip>) -> McpResult {
        self.handlers().plan_trip(params).await
    }

    #[tool(
        name = "route_trip",
        description = "Plan a truck trip between addresses. Geocodes current_location, pickup_location and dropoff_location, estimates the road distance current → pickup → dropoff, then plans stops and the ELD log over it. Fails if any address cannot be geocoded."
    )]
    async fn route_trip(&self, params: Parameters<RouteTrip>) -> McpResult {
        self.handlers().route_trip(params).await
    }

    #[tool(
        name = "show_policy",
        description = "Show the Hours-of-Service policy used for planning: rest and break thresholds, fuel interval, stop durations and average speed."
    )]
    async fn show_policy(&self) -> McpResult {
        self.handlers().show_policy().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for ConvoyMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "convoy".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Convoy plans truck trips under the property-carrying Hours-of-Service rules and generates the matching ELD log.

## Rules Applied
- A 30-minute break after 8 hours of driving since the last break or rest
- A 10-hour rest once 11 cycle hours are reached; hours already used count
- A fuel stop every 1,000 miles
- 1 hour on duty at pickup and at dropoff

## Tools
- `plan_trip`: plan over a known distance
- `route_trip`: resolve addresses to a route first, then plan
- `show_policy`: show the thresholds in effect

Log times start when the request is handled."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: ConvoyMcpServer) -> Result<()> {
    use rmcp::{ServiceExt, transport::stdio};

    info!("Starting Convoy MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
