//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::{models::Plan, recommender::SkippedCourse};

/// A freshly built plan together with the budget it was built against.
///
/// Optionally carries the candidates the builder skipped, for `--explain`
/// style output.
pub struct RecommendResult {
    pub user_id: u64,
    pub plan: Plan,
    pub budget: u64,
    pub skipped: Option<Vec<SkippedCourse>>,
}

impl RecommendResult {
    pub fn new(user_id: u64, plan: Plan, budget: u64) -> Self {
        Self {
            user_id,
            plan,
            budget,
            skipped: None,
        }
    }

    pub fn with_skipped(mut self, skipped: Vec<SkippedCourse>) -> Self {
        self.skipped = Some(skipped);
        self
    }
}

impl fmt::Display for RecommendResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Plan for user {}", self.user_id)?;
        writeln!(f)?;
        writeln!(
            f,
            "Using {} of {} hours across {} courses.",
            self.plan.total_hours,
            self.budget,
            self.plan.len()
        )?;
        writeln!(f)?;
        write!(f, "{}", self.plan)?;

        if let Some(skipped) = &self.skipped {
            writeln!(f)?;
            writeln!(f, "## Skipped")?;
            writeln!(f)?;
            if skipped.is_empty() {
                writeln!(f, "Every ranked course was accepted.")?;
            }
            for course in skipped {
                writeln!(
                    f,
                    "- Course {} (score {:.3}): {}",
                    course.course_id, course.score, course.reason
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommender::SkipReason;

    #[test]
    fn explains_skips_when_requested() {
        let plain = RecommendResult::new(1, Plan::default(), 12).to_string();
        assert!(!plain.contains("Skipped"));

        let explained = RecommendResult::new(1, Plan::default(), 12)
            .with_skipped(vec![SkippedCourse {
                course_id: 5,
                score: 0.5,
                reason: SkipReason::OverBudget {
                    needed: 20,
                    remaining: 12,
                },
            }])
            .to_string();
        assert!(explained.contains("## Skipped"));
        assert!(explained.contains("- Course 5 (score 0.500): needs 20 hours, 12 left"));
    }
}
