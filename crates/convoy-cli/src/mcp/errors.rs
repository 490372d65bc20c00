//! Error handling utilities for MCP server

use convoy_core::TripError;
use rmcp::ErrorData;

/// Helper to convert trip errors to MCP errors
///
/// Invalid input is the caller's fault and becomes `invalid_params`;
/// everything else is reported as an internal error.
pub fn to_mcp_error(message: &str, error: &TripError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_invalid_input() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}
