//! MCP tool handlers implementation

use std::sync::Arc;

use convoy_core::{TripService, params as core};
use log::debug;
use rmcp::{
    ErrorData,
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types
///
/// `#[serde(transparent)]` passes deserialization straight through to the
/// wrapped core type, and the schema is the core type's own.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type PlanTrip = McpParams<core::PlanTrip>;
pub type RouteTrip = McpParams<core::RouteTrip>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    service: Arc<TripService>,
}

impl McpHandlers {
    pub fn new(service: Arc<TripService>) -> Self {
        Self { service }
    }

    pub async fn plan_trip(&self, Parameters(params): Parameters<PlanTrip>) -> McpResult {
        debug!("plan_trip: {params:?}");

        let trip = self
            .service
            .planner()
            .plan_trip(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to plan trip", &e))?;

        Ok(CallToolResult::success(vec![Content::text(trip.to_string())]))
    }

    pub async fn route_trip(&self, Parameters(params): Parameters<RouteTrip>) -> McpResult {
        debug!("route_trip: {params:?}");

        let trip = self
            .service
            .route_trip(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to route trip", &e))?;

        Ok(CallToolResult::success(vec![Content::text(trip.to_string())]))
    }

    pub async fn show_policy(&self) -> McpResult {
        let policy = self.service.planner().policy();
        Ok(CallToolResult::success(vec![Content::text(policy.to_string())]))
    }
}
