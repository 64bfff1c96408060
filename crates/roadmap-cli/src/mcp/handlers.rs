//! MCP tool handlers implementation

use roadmap_core::{
    display::{Courses, OperationStatus, RecommendResult},
    params as core, Advisor,
};
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types
///
/// Adds the `Deserialize` and `JsonSchema` impls the tool router needs while
/// passing the JSON straight through to the wrapped core type.
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

pub type Recommend = McpParams<core::Recommend>;
pub type UserId = McpParams<core::UserId>;
pub type ListCourses = McpParams<core::ListCourses>;
pub type ExplainScore = McpParams<core::ExplainScore>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(markdown: String) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(markdown)]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    advisor: Advisor,
}

impl McpHandlers {
    pub fn new(advisor: Advisor) -> Self {
        Self { advisor }
    }

    pub async fn recommend(&self, Parameters(params): Parameters<Recommend>) -> McpResult {
        debug!("recommend: {:?}", params);

        let params = params.as_ref();
        let trace = self
            .advisor
            .recommend_traced(params)
            .await
            .map_err(|e| to_mcp_error("Failed to build plan", &e))?;

        let result = RecommendResult::new(
            params.profile.user_id,
            trace.plan,
            params.profile.total_available_hours(),
        )
        .with_skipped(trace.skipped);
        text(result.to_string())
    }

    pub async fn show_plan(&self, Parameters(params): Parameters<UserId>) -> McpResult {
        debug!("show_plan: {:?}", params);

        let user_id = params.as_ref().user_id;
        let record = self
            .advisor
            .get_stored_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to load plan", &e))?;

        match record {
            Some(record) => text(record.to_string()),
            None => Ok(CallToolResult::error(vec![Content::text(
                OperationStatus::failure(format!(
                    "No plan stored for user {user_id}. Use 'recommend' to build one."
                ))
                .to_string(),
            )])),
        }
    }

    pub async fn list_courses(&self, Parameters(params): Parameters<ListCourses>) -> McpResult {
        debug!("list_courses: {:?}", params);

        let courses = self
            .advisor
            .list_courses(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list courses", &e))?;

        if courses.is_empty() {
            return text(Courses(courses).to_string());
        }
        text(format!("# Courses\n\n{}", Courses(courses)))
    }

    pub async fn explain_score(&self, Parameters(params): Parameters<ExplainScore>) -> McpResult {
        debug!("explain_score: {:?}", params);

        let inner = params.as_ref();
        let breakdown = self
            .advisor
            .explain_score(inner)
            .await
            .map_err(|e| to_mcp_error("Failed to score course", &e))?;

        text(format!(
            "# Course {} for user {}\n\n{breakdown}",
            inner.course_id, inner.profile.user_id
        ))
    }
}
