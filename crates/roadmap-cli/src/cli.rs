//! Command-line argument wrappers and command handlers
//!
//! Argument structures carry the clap derives and convert into the core
//! parameter types with `From`, so `roadmap-core` stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Advisor
//! ```
//!
//! [`Cli`] runs the parsed commands against an [`Advisor`] and prints either
//! markdown through the [`TerminalRenderer`] or JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use roadmap_core::{
    display::{Courses, OperationStatus, RecommendResult},
    models::{Level, UserProfile},
    params::{ExplainScore, ImportCatalog, ListCourses, Recommend, UserId},
    Advisor, RoadmapError,
};
use serde::Serialize;

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================

/// Learner profile shared by `recommend` and `course score`
#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// Learner the plan belongs to
    #[arg(long, short = 'u')]
    pub user_id: u64,
    /// Target domain, e.g. "AI"
    #[arg(long, short = 'd')]
    pub domain: String,
    /// Current level: beginner, intermediate or advanced
    #[arg(long, short = 'l')]
    pub level: Level,
    /// Interests matched against course tags; repeat or separate with commas
    #[arg(long = "interest", short = 'i', value_delimiter = ',')]
    pub interests: Vec<String>,
    /// Study hours available per week
    #[arg(long)]
    pub hours_per_week: u32,
    /// Weeks until the deadline
    #[arg(long, short = 'w')]
    pub weeks: u32,
}

impl From<ProfileArgs> for UserProfile {
    fn from(val: ProfileArgs) -> Self {
        UserProfile {
            user_id: val.user_id,
            target_domain: val.domain,
            current_level: val.level,
            interests: val.interests,
            hours_per_week: val.hours_per_week,
            deadline_weeks: val.weeks,
        }
    }
}

/// Build a plan for a learner and save it
///
/// Courses outside the target domain (and its related domains) are ignored.
/// The plan is saved as the learner's current plan, replacing any earlier
/// one.
#[derive(Args)]
pub struct RecommendArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Also list the ranked courses that did not make it into the plan
    #[arg(long)]
    pub explain: bool,
}

impl From<RecommendArgs> for Recommend {
    fn from(val: RecommendArgs) -> Self {
        Recommend {
            profile: val.profile.into(),
        }
    }
}

/// Show the saved plan of a learner
#[derive(Args)]
pub struct ShowPlanArgs {
    /// Learner whose plan to show
    pub user_id: u64,
}

impl From<ShowPlanArgs> for UserId {
    fn from(val: ShowPlanArgs) -> Self {
        UserId {
            user_id: val.user_id,
        }
    }
}

/// List catalog courses
#[derive(Args)]
pub struct ListCoursesArgs {
    /// Only courses of this domain (exact match)
    #[arg(long, short = 'd')]
    pub domain: Option<String>,
    /// Only courses of this level
    #[arg(long, short = 'l')]
    pub level: Option<Level>,
}

impl From<ListCoursesArgs> for ListCourses {
    fn from(val: ListCoursesArgs) -> Self {
        ListCourses {
            domain: val.domain,
            level: val.level,
        }
    }
}

/// Import a JSON array of courses into the database catalog
///
/// Courses are upserted by id; a course's tags and prerequisites are
/// replaced by the imported ones.
#[derive(Args)]
pub struct ImportArgs {
    /// JSON file holding an array of courses
    pub file: PathBuf,
}

impl From<ImportArgs> for ImportCatalog {
    fn from(val: ImportArgs) -> Self {
        ImportCatalog {
            path: val.file.to_string_lossy().into_owned(),
        }
    }
}

/// Explain how one course scores for a learner
#[derive(Args)]
pub struct ScoreArgs {
    /// Course to score
    pub course_id: u64,

    #[command(flatten)]
    pub profile: ProfileArgs,
}

impl From<ScoreArgs> for ExplainScore {
    fn from(val: ScoreArgs) -> Self {
        ExplainScore {
            course_id: val.course_id,
            profile: val.profile.into(),
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Show the saved plan of a learner
    Show(ShowPlanArgs),
}

#[derive(Subcommand)]
pub enum CourseCommands {
    /// List catalog courses
    #[command(alias = "ls")]
    List(ListCoursesArgs),
    /// Import courses from a JSON file (SQLite backend only)
    Import(ImportArgs),
    /// Explain how a course scores for a learner
    Score(ScoreArgs),
}

// ============================================================================
// Command Handlers
// ============================================================================

/// Runs CLI commands against an advisor.
pub struct Cli {
    advisor: Advisor,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(advisor: Advisor, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            advisor,
            renderer,
            json,
        }
    }

    /// Prints `value` as JSON, or `markdown` through the renderer.
    fn emit<T: Serialize>(&self, value: &T, markdown: impl FnOnce() -> String) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
            Ok(())
        } else {
            self.renderer.render(&markdown())
        }
    }

    pub async fn recommend(&self, args: RecommendArgs) -> Result<()> {
        let explain = args.explain;
        let params: Recommend = args.into();
        let user_id = params.profile.user_id;
        let budget = params.profile.total_available_hours();

        let trace = self
            .advisor
            .recommend_traced(&params)
            .await
            .context("Failed to build plan")?;

        if explain {
            self.emit(&trace, || {
                RecommendResult::new(user_id, trace.plan.clone(), budget)
                    .with_skipped(trace.skipped.clone())
                    .to_string()
            })
        } else {
            self.emit(&trace.plan, || {
                RecommendResult::new(user_id, trace.plan.clone(), budget).to_string()
            })
        }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Show(args) => self.show_plan(&args.into()).await,
        }
    }

    async fn show_plan(&self, params: &UserId) -> Result<()> {
        let record = self
            .advisor
            .get_stored_plan(params)
            .await
            .context("Failed to load plan")?
            .ok_or(RoadmapError::PlanNotFound {
                user_id: params.user_id,
            })?;

        self.emit(&record, || record.to_string())
    }

    pub async fn handle_course_command(&self, command: CourseCommands) -> Result<()> {
        match command {
            CourseCommands::List(args) => self.list_courses(&args.into()).await,
            CourseCommands::Import(args) => self.import_courses(&args.into()).await,
            CourseCommands::Score(args) => self.explain_score(&args.into()).await,
        }
    }

    pub async fn list_courses(&self, params: &ListCourses) -> Result<()> {
        let courses = self
            .advisor
            .list_courses(params)
            .await
            .context("Failed to list courses")?;

        self.emit(&courses, || Courses(courses.clone()).to_string())
    }

    async fn import_courses(&self, params: &ImportCatalog) -> Result<()> {
        let count = self
            .advisor
            .import_catalog(params)
            .await
            .with_context(|| format!("Failed to import courses from {}", params.path))?;

        self.emit(&serde_json::json!({ "imported": count }), || {
            OperationStatus::success(format!("Imported {count} courses from {}", params.path))
                .to_string()
        })
    }

    async fn explain_score(&self, params: &ExplainScore) -> Result<()> {
        let breakdown = self
            .advisor
            .explain_score(params)
            .await
            .context("Failed to score course")?;

        self.emit(&breakdown, || {
            format!(
                "# Course {} for user {}\n\n{breakdown}",
                params.course_id, params.profile.user_id
            )
        })
    }
}
