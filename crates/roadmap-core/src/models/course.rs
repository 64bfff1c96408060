//! Course model definition.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::Level;
use crate::error::{Result, RoadmapError};

/// Largest id that fits an SQLite `INTEGER` column.
pub const MAX_COURSE_ID: u64 = i64::MAX as u64;

fn default_intrinsic_score() -> f64 {
    1.0
}

/// A single catalog entry.
///
/// Courses are immutable once they are part of a catalog snapshot. The serde
/// shape matches the course payload exchanged with catalog files and HTTP
/// callers (`durationHours`, `prerequisiteCourseIds`, `score`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique, stable identifier
    pub id: u64,

    /// Human readable title
    #[serde(default)]
    pub title: String,

    /// Top-level subject category, e.g. "AI"
    pub domain: String,

    /// Difficulty tier
    pub level: Level,

    /// Cost of taking the course, in hours
    pub duration_hours: u32,

    /// Free-text keywords used for interest matching
    #[serde(default)]
    pub tags: Vec<String>,

    /// Courses that must be placed earlier in the same plan. Ids missing
    /// from the catalog make the course permanently unselectable.
    #[serde(default)]
    pub prerequisite_course_ids: Vec<u64>,

    /// Quality multiplier independent of any profile
    #[serde(rename = "score", default = "default_intrinsic_score")]
    pub intrinsic_score: f64,
}

impl Course {
    /// Creates a course with no tags, no prerequisites and a neutral
    /// intrinsic score.
    pub fn new(id: u64, domain: impl Into<String>, level: Level, duration_hours: u32) -> Self {
        Self {
            id,
            title: String::new(),
            domain: domain.into(),
            level,
            duration_hours,
            tags: Vec::new(),
            prerequisite_course_ids: Vec::new(),
            intrinsic_score: default_intrinsic_score(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_prerequisites(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.prerequisite_course_ids = ids.into_iter().collect();
        self
    }

    pub fn with_intrinsic_score(mut self, score: f64) -> Self {
        self.intrinsic_score = score;
        self
    }

    /// Rejects data that must never reach the recommender.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError::InvalidInput` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.id > MAX_COURSE_ID {
            return Err(RoadmapError::invalid_input("id")
                .with_reason(format!("course id {} exceeds {MAX_COURSE_ID}", self.id)));
        }
        if let Some(id) = self
            .prerequisite_course_ids
            .iter()
            .find(|&&id| id > MAX_COURSE_ID)
        {
            return Err(RoadmapError::invalid_input("prerequisiteCourseIds").with_reason(format!(
                "course {} requires id {id}, which exceeds {MAX_COURSE_ID}",
                self.id
            )));
        }
        if self.domain.trim().is_empty() {
            return Err(RoadmapError::invalid_input("domain").with_reason("must not be empty"));
        }
        if self.duration_hours == 0 {
            return Err(RoadmapError::invalid_input("durationHours")
                .with_reason(format!("course {} must take at least one hour", self.id)));
        }
        if !self.intrinsic_score.is_finite() || self.intrinsic_score < 0.0 {
            return Err(RoadmapError::invalid_input("score").with_reason(format!(
                "course {} has an invalid intrinsic score {}",
                self.id, self.intrinsic_score
            )));
        }
        Ok(())
    }

    /// Validates every course of a catalog and rejects repeated ids.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError::InvalidInput` for the first offending course.
    pub fn validate_catalog(courses: &[Course]) -> Result<()> {
        let mut seen: HashSet<u64> = HashSet::with_capacity(courses.len());
        for course in courses {
            course.validate()?;
            if !seen.insert(course.id) {
                return Err(RoadmapError::invalid_input("id")
                    .with_reason(format!("course {} appears more than once", course.id)));
            }
        }
        Ok(())
    }
}
