//! Single-pass constrained greedy plan construction.

use std::collections::HashSet;

use log::debug;
use serde::{Deserialize, Serialize};

use super::{match_score, ScoringPolicy};
use crate::models::{Course, Plan, UserProfile};

/// A candidate course paired with its score.
#[derive(Debug, Clone, Copy)]
pub struct ScoredCourse<'a> {
    pub score: f64,
    pub course: &'a Course,
}

/// Why a ranked candidate did not make it into the plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SkipReason {
    /// Accepting the course would exceed the learner's budget
    #[serde(rename_all = "camelCase")]
    OverBudget { needed: u32, remaining: u64 },
    /// Some prerequisites were not placed earlier in this plan
    #[serde(rename_all = "camelCase")]
    MissingPrerequisites { missing: Vec<u64> },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkippedCourse {
    pub course_id: u64,
    pub score: f64,
    pub reason: SkipReason,
}

/// A plan together with every candidate the selection pass passed over.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanTrace {
    pub plan: Plan,
    pub skipped: Vec<SkippedCourse>,
}

/// Filters `courses` to the learner's domain (and related domains), scores
/// them and orders them by score descending, ties broken by ascending
/// course id.
pub fn rank_candidates<'a>(
    profile: &UserProfile,
    courses: &'a [Course],
    policy: &ScoringPolicy,
) -> Vec<ScoredCourse<'a>> {
    let mut ranked: Vec<ScoredCourse<'a>> = courses
        .iter()
        .filter(|course| policy.affinity.admits(&course.domain, &profile.target_domain))
        .map(|course| ScoredCourse {
            score: match_score(course, profile, policy),
            course,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.course.id.cmp(&b.course.id))
    });

    ranked
}

/// Builds a plan for `profile` from `courses`.
///
/// The result always satisfies [`Plan::check_invariants`]. An empty
/// candidate set or a budget smaller than every candidate yields an empty
/// plan.
pub fn make_plan(profile: &UserProfile, courses: &[Course], policy: &ScoringPolicy) -> Plan {
    make_plan_traced(profile, courses, policy).plan
}

/// Same as [`make_plan`], also reporting each skipped candidate.
pub fn make_plan_traced(
    profile: &UserProfile,
    courses: &[Course],
    policy: &ScoringPolicy,
) -> PlanTrace {
    let budget = profile.total_available_hours();
    let ranked = rank_candidates(profile, courses, policy);

    let mut trace = PlanTrace::default();
    let mut accepted: HashSet<u64> = HashSet::with_capacity(ranked.len());

    for ScoredCourse { score, course } in ranked {
        let needed = course.duration_hours;
        let remaining = budget - trace.plan.total_hours;

        if u64::from(needed) > remaining {
            debug!(
                "skipping course {}: needs {needed}h, {remaining}h left",
                course.id
            );
            trace.skipped.push(SkippedCourse {
                course_id: course.id,
                score,
                reason: SkipReason::OverBudget { needed, remaining },
            });
            continue;
        }

        let missing: Vec<u64> = course
            .prerequisite_course_ids
            .iter()
            .copied()
            .filter(|id| !accepted.contains(id))
            .collect();
        if !missing.is_empty() {
            debug!(
                "skipping course {}: prerequisites {missing:?} not in plan",
                course.id
            );
            trace.skipped.push(SkippedCourse {
                course_id: course.id,
                score,
                reason: SkipReason::MissingPrerequisites { missing },
            });
            continue;
        }

        trace.plan.push(course, format!("Score: {score:.3}"));
        accepted.insert(course.id);
    }

    trace
}
