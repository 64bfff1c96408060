//! Roadmap CLI Application
//!
//! Command-line interface and MCP server for the roadmap course
//! recommender.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, RoadmapMcpServer};
use renderer::TerminalRenderer;
use roadmap_core::{params::ListCourses, AdvisorBuilder, RoadmapConfig};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        config,
        backend,
        no_color,
        json,
        command,
    } = Args::parse();

    let config = match config {
        Some(path) => RoadmapConfig::load(&path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => RoadmapConfig::load_default().context("Failed to load configuration")?,
    };

    let serving = matches!(command, Some(Serve));
    let mut builder = AdvisorBuilder::new()
        .with_config(config)
        .with_database_path(database_file)
        .with_catalog_cache(serving);
    if let Some(backend) = backend {
        builder = builder.with_backend(backend);
    }
    let advisor = builder
        .build()
        .await
        .context("Failed to initialize advisor")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Roadmap started");

    match command {
        Some(Recommend(args)) => Cli::new(advisor, renderer, json).recommend(args).await,
        Some(Plan { command }) => {
            Cli::new(advisor, renderer, json)
                .handle_plan_command(command)
                .await
        }
        Some(Course { command }) => {
            Cli::new(advisor, renderer, json)
                .handle_course_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting Roadmap MCP server");
            run_stdio_server(RoadmapMcpServer::new(advisor))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(advisor, renderer, json)
                .list_courses(&ListCourses::default())
                .await
        }
    }
}
