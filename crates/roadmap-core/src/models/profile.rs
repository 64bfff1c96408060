//! Learner profile definition.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Level;
use crate::error::{RoadmapError, Result};

/// What a learner wants and how much time they have.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Owner of the resulting plan
    pub user_id: u64,

    /// Domain the learner is aiming for
    pub target_domain: String,

    /// Current proficiency
    pub current_level: Level,

    /// Keywords matched against course tags; order is irrelevant
    #[serde(default)]
    pub interests: Vec<String>,

    /// Study hours available per week
    pub hours_per_week: u32,

    /// Number of weeks until the deadline
    pub deadline_weeks: u32,
}

impl UserProfile {
    /// Total hours the plan may consume.
    pub fn total_available_hours(&self) -> u64 {
        u64::from(self.hours_per_week) * u64::from(self.deadline_weeks)
    }

    /// Rejects profiles that the transport layer must not forward.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError::InvalidInput` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.target_domain.trim().is_empty() {
            return Err(RoadmapError::invalid_input("targetDomain").with_reason("must not be empty"));
        }
        if self.hours_per_week == 0 {
            return Err(RoadmapError::invalid_input("hoursPerWeek").with_reason("must be positive"));
        }
        if self.deadline_weeks == 0 {
            return Err(RoadmapError::invalid_input("deadlineWeeks").with_reason("must be positive"));
        }
        Ok(())
    }
}
