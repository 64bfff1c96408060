//! Error handling utilities for MCP server

use roadmap_core::RoadmapError;
use rmcp::ErrorData;

/// Converts advisor errors to MCP errors.
///
/// Errors caused by the caller's arguments become `invalid_params`;
/// everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &RoadmapError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        RoadmapError::InvalidInput { .. } | RoadmapError::CourseNotFound { .. } => {
            ErrorData::invalid_params(text, None)
        }
        _ => ErrorData::internal_error(text, None),
    }
}
