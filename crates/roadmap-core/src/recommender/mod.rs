//! The recommendation engine: scoring and greedy plan construction.
//!
//! ```text
//! (profile, courses) ─▶ domain filter ─▶ match_score per course
//!                   ─▶ sort (score desc, id asc) ─▶ single greedy pass ─▶ Plan
//! ```
//!
//! Both stages are plain synchronous functions over borrowed, immutable
//! inputs. They hold no state between calls, so any number of threads may
//! plan concurrently over one shared catalog snapshot.
//!
//! # Example
//!
//! ```rust
//! use roadmap_core::{
//!     models::{Course, Level, UserProfile},
//!     recommender::{make_plan, ScoringPolicy},
//! };
//!
//! let profile = UserProfile {
//!     user_id: 1,
//!     target_domain: "AI".to_string(),
//!     current_level: Level::Beginner,
//!     interests: vec!["ml".to_string()],
//!     hours_per_week: 5,
//!     deadline_weeks: 2,
//! };
//! let courses = vec![
//!     Course::new(1, "AI", Level::Beginner, 6).with_tags(["ml"]),
//!     Course::new(2, "AI", Level::Beginner, 6),
//! ];
//!
//! let plan = make_plan(&profile, &courses, &ScoringPolicy::default());
//! assert_eq!(plan.course_ids(), vec![1]);
//! assert_eq!(plan.total_hours, 6);
//! ```

pub mod greedy;
pub mod policy;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use greedy::{
    make_plan, make_plan_traced, rank_candidates, PlanTrace, ScoredCourse, SkipReason,
    SkippedCourse,
};
pub use policy::{DomainAffinity, LevelCredit, LevelTable, ScoringPolicy, ScoringWeights};
pub use scoring::{interest_ratio, match_score, score_breakdown, ScoreBreakdown};
