//! Core library for the Roadmap learning-plan recommender.
//!
//! Given a learner profile and a course catalog, the recommender scores every
//! course in (or related to) the learner's target domain and greedily builds
//! an ordered plan that fits the learner's hour budget and respects course
//! prerequisites.
//!
//! # Layers
//!
//! - [`models`]: courses, profiles and plans with their JSON wire shape
//! - [`recommender`]: the pure scoring function and plan builder
//! - [`catalog`] and [`storage`]: where courses come from and plans go
//! - [`db`]: the SQLite schema and queries behind the SQLite providers
//! - [`advisor`]: the async facade used by the CLI and MCP server
//! - [`display`]: markdown formatting for terminal and MCP output
//!
//! # Quick Start
//!
//! ```rust
//! use roadmap_core::{
//!     models::{Course, Level, UserProfile},
//!     recommender::{make_plan, ScoringPolicy},
//! };
//!
//! let courses = vec![
//!     Course::new(1, "AI", Level::Beginner, 10).with_tags(["ml"]),
//!     Course::new(2, "AI", Level::Intermediate, 20).with_prerequisites([1]),
//! ];
//! let profile = UserProfile {
//!     user_id: 42,
//!     target_domain: "AI".to_string(),
//!     current_level: Level::Beginner,
//!     interests: vec!["ml".to_string()],
//!     hours_per_week: 10,
//!     deadline_weeks: 3,
//! };
//!
//! let plan = make_plan(&profile, &courses, &ScoringPolicy::default());
//! assert_eq!(plan.course_ids(), vec![1, 2]);
//! assert!(plan.check_invariants(&profile, &courses).is_ok());
//! println!("{plan}");
//! ```

pub mod advisor;
pub mod catalog;
pub mod config;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod recommender;
pub mod storage;

// Re-export commonly used types
pub use advisor::{Advisor, AdvisorBuilder};
pub use catalog::{Catalog, CatalogSnapshot, JsonCatalog, MemoryCatalog, SqliteCatalog};
pub use config::{Backend, RoadmapConfig, StorageConfig};
pub use db::Database;
pub use display::{Courses, LocalDateTime, OperationStatus, RecommendResult};
pub use error::{Result, RoadmapError};
pub use models::{Course, Level, Plan, PlanStep, StoredPlan, UserProfile};
pub use params::{ExplainScore, ImportCatalog, ListCourses, Recommend, UserId};
pub use recommender::{
    make_plan, make_plan_traced, match_score, score_breakdown, PlanTrace, ScoreBreakdown,
    ScoringPolicy, ScoringWeights, SkipReason, SkippedCourse,
};
pub use storage::{JsonPlanStore, MemoryPlanStore, PlanStore, SqlitePlanStore};
