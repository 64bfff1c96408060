//! Display implementations for domain models.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    models::{Course, Level, Plan, StoredPlan},
    recommender::{PlanTrace, ScoreBreakdown, SkipReason},
};

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.title.is_empty() {
            writeln!(f, "### Course {}", self.id)?;
        } else {
            writeln!(f, "### {}. {}", self.id, self.title)?;
        }
        writeln!(f)?;
        writeln!(f, "- Domain: {}", self.domain)?;
        writeln!(f, "- Level: {}", self.level)?;
        writeln!(f, "- Duration: {} hours", self.duration_hours)?;
        if !self.tags.is_empty() {
            writeln!(f, "- Tags: {}", self.tags.join(", "))?;
        }
        if !self.prerequisite_course_ids.is_empty() {
            let ids: Vec<String> = self
                .prerequisite_course_ids
                .iter()
                .map(u64::to_string)
                .collect();
            writeln!(f, "- Prerequisites: {}", ids.join(", "))?;
        }
        if self.intrinsic_score != 1.0 {
            writeln!(f, "- Intrinsic score: {}", self.intrinsic_score)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return writeln!(f, "No courses fit this plan.");
        }

        writeln!(f, "| Step | Course | Hours | Note |")?;
        writeln!(f, "|-----:|-------:|------:|------|")?;
        for step in &self.steps {
            writeln!(
                f,
                "| {} | {} | {} | {} |",
                step.sequence_number, step.course_id, step.hours, step.note
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Total: {} hours", self.total_hours)
    }
}

impl fmt::Display for StoredPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Plan for user {}", self.user_id)?;
        writeln!(f)?;
        if let Some(saved_at) = &self.saved_at {
            writeln!(f, "- Saved: {}", LocalDateTime(saved_at))?;
            writeln!(f)?;
        }
        write!(f, "{}", self.plan)
    }
}

impl fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "| Term | Value |")?;
        writeln!(f, "|------|------:|")?;
        writeln!(f, "| Domain | {:.3} |", self.domain)?;
        writeln!(f, "| Level | {:.3} |", self.level)?;
        writeln!(f, "| Interest | {:.3} |", self.interest)?;
        writeln!(f, "| Multiplier | ×{:.3} |", self.multiplier)?;
        writeln!(f, "| **Total** | **{:.3}** |", self.total)
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OverBudget { needed, remaining } => {
                write!(f, "needs {needed} hours, {remaining} left")
            }
            Self::MissingPrerequisites { missing } => {
                let ids: Vec<String> = missing.iter().map(u64::to_string).collect();
                write!(f, "missing prerequisites {}", ids.join(", "))
            }
        }
    }
}

impl fmt::Display for PlanTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.plan)?;

        if !self.skipped.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Skipped")?;
            writeln!(f)?;
            for skipped in &self.skipped {
                writeln!(
                    f,
                    "- Course {} (score {:.3}): {}",
                    skipped.course_id, skipped.score, skipped.reason
                )?;
            }
        }

        Ok(())
    }
}
