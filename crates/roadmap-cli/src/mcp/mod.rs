//! MCP server implementation for Roadmap
//!
//! Exposes the advisor operations as Model Context Protocol tools so AI
//! assistants can build and inspect learning plans.

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use roadmap_core::Advisor;
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{ExplainScore, ListCourses, McpResult, Recommend, UserId};

/// MCP server for Roadmap
#[derive(Clone)]
pub struct RoadmapMcpServer {
    advisor: Advisor,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl RoadmapMcpServer {
    pub fn new(advisor: Advisor) -> Self {
        Self {
            advisor,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.advisor.clone())
    }

    #[tool(
        name = "recommend",
        description = "Build a learning plan for a learner and save it as their current plan. Provide userId, targetDomain, currentLevel (Beginner, Intermediate or Advanced), interests (keywords matched against course tags), hoursPerWeek and deadlineWeeks. Returns the ordered plan with per-course hours and scores, plus the courses that were skipped and why (over budget or missing prerequisites)."
    )]
    async fn recommend(&self, params: Parameters<Recommend>) -> McpResult {
        self.handlers().recommend(params).await
    }

    #[tool(
        name = "show_plan",
        description = "Show the saved plan of a learner by userId, with its steps, hours and when it was built."
    )]
    async fn show_plan(&self, params: Parameters<UserId>) -> McpResult {
        self.handlers().show_plan(params).await
    }

    #[tool(
        name = "list_courses",
        description = "List catalog courses ordered by id. Optionally filter by exact domain and by level. Shows title, domain, level, duration, tags and prerequisite course ids."
    )]
    async fn list_courses(&self, params: Parameters<ListCourses>) -> McpResult {
        self.handlers().list_courses(params).await
    }

    #[tool(
        name = "explain_score",
        description = "Explain how one course scores for a learner profile: the weighted domain, level and interest terms, the intrinsic multiplier and the total. Use it to understand why a course ranked where it did."
    )]
    async fn explain_score(&self, params: Parameters<ExplainScore>) -> McpResult {
        self.handlers().explain_score(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for RoadmapMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "roadmap".to_string(),
                title: None,
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"Roadmap recommends courses and builds learning plans that fit a learner's time budget.

## Core Concepts
- **Courses** belong to a domain, have a level, a duration in hours, tags and prerequisite courses
- **Profiles** describe a learner: target domain, current level, interests, weekly hours and weeks until the deadline
- **Plans** are ordered lists of courses whose hours fit within hoursPerWeek × deadlineWeeks; a course only follows its prerequisites

## Workflow
1. Browse the catalog with `list_courses`
2. Build and save a plan with `recommend`
3. Review it later with `show_plan`
4. Use `explain_score` to see why a course ranked high or low"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: RoadmapMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Roadmap MCP server on stdio");
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
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
