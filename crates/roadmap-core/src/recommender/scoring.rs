//! Course/profile fitness scoring.

use serde::{Deserialize, Serialize};

use super::ScoringPolicy;
use crate::models::{Course, UserProfile};

/// The weighted terms that make up a score.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Weighted domain term (same-domain or cross-domain weight, or 0)
    pub domain: f64,
    /// Weighted level-progression term
    pub level: f64,
    /// Weighted interest/tag term
    pub interest: f64,
    /// Intrinsic multiplier applied to the sum (1.0 when the course has none)
    pub multiplier: f64,
    /// `(domain + level + interest) * multiplier`
    pub total: f64,
}

/// Scores how well `course` fits `profile`. Pure and total.
pub fn match_score(course: &Course, profile: &UserProfile, policy: &ScoringPolicy) -> f64 {
    score_breakdown(course, profile, policy).total
}

/// Computes every term of [`match_score`] separately.
pub fn score_breakdown(
    course: &Course,
    profile: &UserProfile,
    policy: &ScoringPolicy,
) -> ScoreBreakdown {
    let weights = &policy.weights;

    let domain = if course.domain == profile.target_domain {
        weights.domain
    } else if policy
        .affinity
        .related(&course.domain, &profile.target_domain)
    {
        weights.cross_domain
    } else {
        0.0
    };

    let level = weights.level * policy.levels.credit(profile.current_level, course.level);

    let interest = weights.interest * interest_ratio(&profile.interests, &course.tags);

    let multiplier = if course.intrinsic_score > 0.0 {
        course.intrinsic_score
    } else {
        1.0
    };

    ScoreBreakdown {
        domain,
        level,
        interest,
        multiplier,
        total: (domain + level + interest) * multiplier,
    }
}

/// Fraction of `interests` that match at least one of `tags`; 0 when there
/// are no interests.
///
/// An interest matches a tag when either string contains the other. The
/// comparison is case-sensitive.
///
/// ```rust
/// use roadmap_core::recommender::interest_ratio;
///
/// let tags = ["machine learning".to_string(), "python".to_string()];
/// let interests = ["learning".to_string(), "rust".to_string()];
/// assert_eq!(interest_ratio(&interests, &tags), 0.5);
/// assert_eq!(interest_ratio(&[], &tags), 0.0);
/// ```
pub fn interest_ratio(interests: &[String], tags: &[String]) -> f64 {
    if interests.is_empty() {
        return 0.0;
    }

    let matched = interests
        .iter()
        .filter(|interest| {
            tags.iter()
                .any(|tag| tag.contains(interest.as_str()) || interest.contains(tag.as_str()))
        })
        .count();

    matched as f64 / interests.len() as f64
}
