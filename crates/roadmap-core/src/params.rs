//! Parameter structures for advisor operations.
//!
//! These structures are shared by every interface (CLI, MCP) and carry no
//! framework derives beyond serde. Interfaces wrap them with their own types
//! (clap `Args`, transparent MCP request wrappers) and convert with `From`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! With the `schema` feature enabled each structure also derives
//! `schemars::JsonSchema`, which the MCP server uses to describe its tools.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{Course, Level, UserProfile};

/// Parameters for building and saving a plan.
///
/// Serializes as the bare profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Recommend {
    /// Learner to plan for
    #[serde(flatten)]
    pub profile: UserProfile,
}

/// Parameters for operations keyed by a learner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserId {
    /// The learner whose plan to operate on
    pub user_id: u64,
}

/// Parameters for listing catalog courses.
///
/// Both filters are optional; an empty filter lists the whole catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListCourses {
    /// Only courses of exactly this domain
    #[serde(default)]
    pub domain: Option<String>,
    /// Only courses of this level
    #[serde(default)]
    pub level: Option<Level>,
}

impl ListCourses {
    /// Whether `course` passes both filters.
    pub fn matches(&self, course: &Course) -> bool {
        self.domain.as_deref().map_or(true, |d| course.domain == d)
            && self.level.map_or(true, |l| course.level == l)
    }
}

/// Parameters for explaining how one course scores for a learner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ExplainScore {
    /// Course to score
    pub course_id: u64,
    /// Learner to score it for
    #[serde(flatten)]
    pub profile: UserProfile,
}

/// Parameters for importing a JSON course list into the database catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ImportCatalog {
    /// Path of a JSON array of courses
    pub path: String,
}
