use std::path::PathBuf;

use clap::{Parser, Subcommand};
use roadmap_core::Backend;

use crate::cli::{CourseCommands, PlanCommands, RecommendArgs};

/// Course recommender that builds learning plans within an hour budget
///
/// Roadmap scores the courses of a catalog against a learner profile and
/// greedily assembles an ordered plan that fits the learner's weekly hours
/// and deadline while respecting prerequisites. Plans are saved per learner.
/// It runs as a command-line tool or as an MCP (Model Context Protocol)
/// server for AI assistants.
#[derive(Parser)]
#[command(version, about, name = "roadmap")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/roadmap/roadmap.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to a JSON configuration file. Defaults to
    /// $XDG_CONFIG_HOME/roadmap/config.json when present
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Storage backend: sqlite or json. Overrides the configuration file
    #[arg(long, global = true)]
    pub backend: Option<Backend>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
///
/// - `recommend`: build and save a plan for a learner
/// - `plan`: inspect saved plans
/// - `course`: browse, import and score catalog courses
/// - `serve`: start the MCP server for AI assistant integration
#[derive(Subcommand)]
pub enum Commands {
    /// Build and save a learning plan
    #[command(alias = "r")]
    Recommend(RecommendArgs),
    /// Inspect saved plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Browse and manage the course catalog
    #[command(alias = "c")]
    Course {
        #[command(subcommand)]
        command: CourseCommands,
    },
    /// Start the MCP server
    Serve,
}
