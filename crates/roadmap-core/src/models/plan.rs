//! Plan and plan step definitions.

use std::collections::{HashMap, HashSet};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Course, UserProfile};
use crate::error::{RoadmapError, Result};

/// One accepted course in a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlanStep {
    /// 1-based position in acceptance order
    #[serde(rename = "step")]
    pub sequence_number: u32,

    /// Accepted course
    pub course_id: u64,

    /// Hours copied from the course when it was accepted
    pub hours: u32,

    /// Why the course was selected
    #[serde(default)]
    pub note: String,
}

/// An ordered, budget-bounded learning plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Sum of `hours` over all steps
    pub total_hours: u64,

    /// Steps in acceptance order
    #[serde(default)]
    pub steps: Vec<PlanStep>,
}

impl Plan {
    /// Appends a step for `course` and keeps `total_hours` in sync.
    pub(crate) fn push(&mut self, course: &Course, note: String) {
        let sequence_number = self.steps.len() as u32 + 1;
        self.steps.push(PlanStep {
            sequence_number,
            course_id: course.id,
            hours: course.duration_hours,
            note,
        });
        self.total_hours += u64::from(course.duration_hours);
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Ids of the planned courses, in plan order.
    pub fn course_ids(&self) -> Vec<u64> {
        self.steps.iter().map(|step| step.course_id).collect()
    }

    /// Checks every structural guarantee a plan built for `profile` from
    /// `courses` must hold.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError::InvariantViolation` describing the first broken
    /// guarantee.
    pub fn check_invariants(&self, profile: &UserProfile, courses: &[Course]) -> Result<()> {
        let violation = |reason: String| Err(RoadmapError::InvariantViolation { reason });

        let sum: u64 = self.steps.iter().map(|step| u64::from(step.hours)).sum();
        if sum != self.total_hours {
            return violation(format!(
                "total hours {} differ from step sum {sum}",
                self.total_hours
            ));
        }

        let budget = profile.total_available_hours();
        if self.total_hours > budget {
            return violation(format!(
                "total hours {} exceed budget {budget}",
                self.total_hours
            ));
        }

        let by_id: HashMap<u64, &Course> = courses.iter().map(|c| (c.id, c)).collect();
        let mut placed: HashSet<u64> = HashSet::with_capacity(self.steps.len());

        for (index, step) in self.steps.iter().enumerate() {
            if step.sequence_number as usize != index + 1 {
                return violation(format!(
                    "step {} found at position {}",
                    step.sequence_number,
                    index + 1
                ));
            }

            let Some(course) = by_id.get(&step.course_id) else {
                return violation(format!("course {} is not in the catalog", step.course_id));
            };

            if step.hours != course.duration_hours {
                return violation(format!(
                    "course {} planned for {} hours but lasts {}",
                    course.id, step.hours, course.duration_hours
                ));
            }

            if let Some(missing) = course
                .prerequisite_course_ids
                .iter()
                .find(|id| !placed.contains(*id))
            {
                return violation(format!(
                    "course {} placed before its prerequisite {missing}",
                    course.id
                ));
            }

            if !placed.insert(step.course_id) {
                return violation(format!("course {} appears twice", step.course_id));
            }
        }

        Ok(())
    }
}

/// A plan as held by a plan store, keyed by its owner.
///
/// Serializes as the plan payload plus `userId` and `savedAt`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoredPlan {
    pub user_id: u64,

    /// When the plan was saved; absent in files written by older releases
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<Timestamp>,

    #[serde(flatten)]
    pub plan: Plan,
}

impl StoredPlan {
    /// Stamps `plan` for `user_id` with the current time.
    pub fn now(user_id: u64, plan: Plan) -> Self {
        Self {
            user_id,
            saved_at: Some(Timestamp::now()),
            plan,
        }
    }
}
