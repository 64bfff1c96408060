//! Tests for the recommender module.

use super::*;
use crate::models::{Course, Level, UserProfile};

fn profile(level: Level, interests: &[&str], hours_per_week: u32, deadline_weeks: u32) -> UserProfile {
    UserProfile {
        user_id: 1,
        target_domain: "AI".to_string(),
        current_level: level,
        interests: interests.iter().map(ToString::to_string).collect(),
        hours_per_week,
        deadline_weeks,
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_full_match_scores_one() {
    let policy = ScoringPolicy::default();
    let course = Course::new(1, "AI", Level::Beginner, 4).with_tags(["ml"]);
    let score = match_score(&course, &profile(Level::Beginner, &["ml"], 5, 2), &policy);
    assert_close(score, 1.0);
}

#[test]
fn test_breakdown_terms() {
    let policy = ScoringPolicy::default();
    let course = Course::new(1, "Data Science", Level::Intermediate, 4)
        .with_tags(["statistics", "python"]);
    let learner = profile(Level::Beginner, &["python", "rust"], 5, 2);

    let breakdown = score_breakdown(&course, &learner, &policy);
    assert_close(breakdown.domain, 0.15);
    assert_close(breakdown.level, 0.3 * 0.8);
    assert_close(breakdown.interest, 0.5 * 0.5);
    assert_close(breakdown.multiplier, 1.0);
    assert_close(breakdown.total, 0.15 + 0.24 + 0.25);
}

#[test]
fn test_unrelated_domain_gets_no_domain_credit() {
    let policy = ScoringPolicy::default();
    let course = Course::new(1, "Web", Level::Beginner, 4);
    let breakdown = score_breakdown(&course, &profile(Level::Beginner, &[], 5, 2), &policy);
    assert_close(breakdown.domain, 0.0);
    assert_close(breakdown.interest, 0.0);
    assert_close(breakdown.total, 0.3);
}

#[test]
fn test_intrinsic_score_multiplies_only_when_positive() {
    let policy = ScoringPolicy::default();
    let learner = profile(Level::Beginner, &[], 5, 2);
    let base = Course::new(1, "AI", Level::Beginner, 4);

    let doubled = base.clone().with_intrinsic_score(2.0);
    let zeroed = base.clone().with_intrinsic_score(0.0);

    let base_score = match_score(&base, &learner, &policy);
    assert_close(match_score(&doubled, &learner, &policy), base_score * 2.0);
    assert_close(match_score(&zeroed, &learner, &policy), base_score);
}

#[test]
fn test_interest_matching_is_two_way_substring_and_case_sensitive() {
    let tags = vec!["deep learning".to_string()];
    assert_close(interest_ratio(&["learning".to_string()], &tags), 1.0);
    assert_close(
        interest_ratio(&["deep learning with pytorch".to_string()], &tags),
        1.0,
    );
    assert_close(interest_ratio(&["Learning".to_string()], &tags), 0.0);
    assert_close(interest_ratio(&["ml".to_string()], &[]), 0.0);
}

#[test]
fn test_empty_interests_contribute_zero() {
    let policy = ScoringPolicy::default();
    let course = Course::new(1, "AI", Level::Beginner, 4).with_tags(["ml"]);
    let breakdown = score_breakdown(&course, &profile(Level::Beginner, &[], 5, 2), &policy);
    assert_close(breakdown.interest, 0.0);
    assert!(breakdown.total.is_finite());
}

#[test]
fn test_level_table_progression_rules() {
    let table = LevelTable::default();
    use Level::*;

    for level in Level::ALL {
        assert_close(table.credit(level, level), 1.0);
    }
    let ahead = table.credit(Beginner, Intermediate);
    let behind = table.credit(Intermediate, Beginner);
    let far = table.credit(Advanced, Beginner);
    assert!(ahead > behind, "moving ahead beats reviewing");
    assert!(behind > far);
    assert_close(table.credit(Beginner, Advanced), table.floor);
}

#[test]
fn test_level_table_is_data_driven() {
    let table = LevelTable {
        credits: vec![LevelCredit {
            user: Level::Beginner,
            course: Level::Advanced,
            credit: 0.9,
        }],
        floor: 0.0,
    };
    assert_close(table.credit(Level::Beginner, Level::Advanced), 0.9);
    assert_close(table.credit(Level::Beginner, Level::Beginner), 0.0);
}

#[test]
fn test_weight_presets_are_valid() {
    assert!(ScoringWeights::interest_weighted().validate().is_ok());
    assert!(ScoringWeights::domain_weighted().validate().is_ok());
    assert!(ScoringPolicy::default().validate().is_ok());
}

#[test]
fn test_weight_validation_rejects_inconsistent_schemes() {
    let mixed = ScoringWeights {
        domain: 0.4,
        cross_domain: 0.15,
        level: 0.3,
        interest: 0.5,
    };
    assert!(mixed.validate().is_err());

    let cross_too_high = ScoringWeights {
        cross_domain: 0.3,
        ..ScoringWeights::interest_weighted()
    };
    assert!(cross_too_high.validate().is_err());

    let negative = ScoringWeights {
        domain: -0.1,
        cross_domain: 0.0,
        level: 0.6,
        interest: 0.5,
    };
    assert!(negative.validate().is_err());
}

#[test]
fn test_level_table_validation() {
    let mut table = LevelTable::default();
    table.credits.push(LevelCredit {
        user: Level::Beginner,
        course: Level::Beginner,
        credit: 0.5,
    });
    assert!(table.validate().is_err());

    let out_of_range = LevelTable {
        credits: vec![],
        floor: 1.5,
    };
    assert!(out_of_range.validate().is_err());
}

#[test]
fn test_affinity_serializes_as_pairs() {
    let affinity = DomainAffinity::none()
        .with_pair("Data Science", "AI")
        .with_pair("Web", "Mobile");
    let json = serde_json::to_value(&affinity).unwrap();
    assert_eq!(
        json,
        serde_json::json!([["AI", "Data Science"], ["Mobile", "Web"]])
    );

    let parsed: DomainAffinity = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, affinity);
    assert!(parsed.related("Web", "Mobile"));
}

#[test]
fn test_affinity_ignores_self_pairs() {
    let affinity = DomainAffinity::none().with_pair("AI", "AI");
    assert_eq!(affinity, DomainAffinity::none());
    assert!(affinity.admits("AI", "AI"));
    assert!(!affinity.admits("Data Science", "AI"));
}

#[test]
fn test_rank_candidates_filters_and_orders() {
    let policy = ScoringPolicy::default();
    let courses = vec![
        Course::new(5, "Web", Level::Beginner, 1).with_tags(["ml"]),
        Course::new(4, "Data Science", Level::Beginner, 1),
        Course::new(3, "AI", Level::Beginner, 1),
        Course::new(2, "AI", Level::Beginner, 1).with_tags(["ml"]),
    ];
    let ranked = rank_candidates(&profile(Level::Beginner, &["ml"], 1, 1), &courses, &policy);
    let ids: Vec<u64> = ranked.iter().map(|c| c.course.id).collect();
    assert_eq!(ids, vec![2, 3, 4]);
}

#[test]
fn test_ties_break_by_ascending_id() {
    let policy = ScoringPolicy::default();
    let courses = vec![
        Course::new(9, "AI", Level::Beginner, 1),
        Course::new(3, "AI", Level::Beginner, 1),
        Course::new(6, "AI", Level::Beginner, 1),
    ];
    let plan = make_plan(&profile(Level::Beginner, &[], 10, 1), &courses, &policy);
    assert_eq!(plan.course_ids(), vec![3, 6, 9]);
}

#[test]
fn test_selection_continues_after_over_budget_course() {
    let policy = ScoringPolicy::default();
    let courses = vec![
        Course::new(1, "AI", Level::Beginner, 8).with_tags(["ml"]),
        Course::new(2, "AI", Level::Beginner, 20).with_tags(["ml"]),
        Course::new(3, "AI", Level::Beginner, 2),
    ];
    let trace = make_plan_traced(&profile(Level::Beginner, &["ml"], 5, 2), &courses, &policy);

    assert_eq!(trace.plan.course_ids(), vec![1, 3]);
    assert_eq!(trace.plan.total_hours, 10);
    assert_eq!(
        trace.skipped,
        vec![SkippedCourse {
            course_id: 2,
            score: trace.skipped[0].score,
            reason: SkipReason::OverBudget {
                needed: 20,
                remaining: 2
            },
        }]
    );
}

#[test]
fn test_prerequisite_must_be_placed_earlier_in_same_plan() {
    let policy = ScoringPolicy::default();
    // The dependent course outranks its prerequisite, so when it is reached
    // the prerequisite has not been placed yet.
    let courses = vec![
        Course::new(1, "AI", Level::Beginner, 2),
        Course::new(2, "AI", Level::Beginner, 2)
            .with_tags(["ml"])
            .with_prerequisites([1]),
    ];
    let trace = make_plan_traced(&profile(Level::Beginner, &["ml"], 10, 1), &courses, &policy);

    assert_eq!(trace.plan.course_ids(), vec![1]);
    assert_eq!(
        trace.skipped[0].reason,
        SkipReason::MissingPrerequisites { missing: vec![1] }
    );
}

#[test]
fn test_prerequisite_chain_accepted_in_score_order() {
    let policy = ScoringPolicy::default();
    let courses = vec![
        Course::new(1, "AI", Level::Beginner, 2).with_tags(["ml", "python"]),
        Course::new(2, "AI", Level::Beginner, 2)
            .with_tags(["ml"])
            .with_prerequisites([1]),
        Course::new(3, "AI", Level::Intermediate, 2).with_prerequisites([1, 2]),
    ];
    let learner = profile(Level::Beginner, &["ml", "python"], 10, 1);
    let plan = make_plan(&learner, &courses, &policy);

    assert_eq!(plan.course_ids(), vec![1, 2, 3]);
    assert!(plan.check_invariants(&learner, &courses).is_ok());
}

#[test]
fn test_notes_record_the_score() {
    let policy = ScoringPolicy::default();
    let courses = vec![Course::new(1, "AI", Level::Beginner, 2).with_tags(["ml"])];
    let plan = make_plan(&profile(Level::Beginner, &["ml"], 10, 1), &courses, &policy);
    assert_eq!(plan.steps[0].note, "Score: 1.000");
    assert_eq!(plan.steps[0].sequence_number, 1);
    assert_eq!(plan.steps[0].hours, 2);
}

#[test]
fn test_domain_weighted_policy_disables_cross_domain_credit_only() {
    let policy = ScoringPolicy {
        weights: ScoringWeights::domain_weighted(),
        ..ScoringPolicy::default()
    };
    let course = Course::new(1, "Data Science", Level::Beginner, 2);
    let learner = profile(Level::Beginner, &[], 10, 1);

    assert_close(score_breakdown(&course, &learner, &policy).domain, 0.0);
    // still a candidate through the affinity table
    assert_eq!(make_plan(&learner, &[course], &policy).course_ids(), vec![1]);
}
