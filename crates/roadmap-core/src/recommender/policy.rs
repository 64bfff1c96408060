//! Tunable scoring policy: term weights, level progression credits and
//! cross-domain affinity.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, RoadmapError},
    models::Level,
};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Weights of the three score terms.
///
/// `domain + level + interest` must equal 1.0 so a fully matching course
/// scores 1.0 before its intrinsic multiplier. `cross_domain` replaces
/// `domain` for courses from a related domain and defaults to 0.0 when a
/// configuration leaves it out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoringWeights {
    pub domain: f64,
    #[serde(default)]
    pub cross_domain: f64,
    pub level: f64,
    pub interest: f64,
}

impl ScoringWeights {
    /// Interest-heavy scheme: the domain filter already narrows candidates,
    /// so relevance to the learner's interests dominates.
    pub fn interest_weighted() -> Self {
        Self {
            domain: 0.2,
            cross_domain: 0.15,
            level: 0.3,
            interest: 0.5,
        }
    }

    /// Domain-heavy scheme with no cross-domain credit.
    pub fn domain_weighted() -> Self {
        Self {
            domain: 0.4,
            cross_domain: 0.0,
            level: 0.3,
            interest: 0.3,
        }
    }

    /// # Errors
    ///
    /// Returns `RoadmapError::Configuration` when a weight is negative or not
    /// finite, when the base weights do not sum to 1.0, or when the
    /// cross-domain weight exceeds the same-domain weight.
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("domain", self.domain),
            ("crossDomain", self.cross_domain),
            ("level", self.level),
            ("interest", self.interest),
        ];
        if let Some((name, value)) = named.iter().find(|(_, w)| !w.is_finite() || *w < 0.0) {
            return Err(RoadmapError::configuration(format!(
                "weight '{name}' must be a non-negative number, got {value}"
            )));
        }

        let sum = self.domain + self.level + self.interest;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(RoadmapError::configuration(format!(
                "domain, level and interest weights must sum to 1.0, got {sum}"
            )));
        }

        if self.cross_domain > self.domain {
            return Err(RoadmapError::configuration(format!(
                "cross-domain weight {} exceeds domain weight {}",
                self.cross_domain, self.domain
            )));
        }

        Ok(())
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::interest_weighted()
    }
}

/// Credit for a course of level `course` taken by a learner at `user`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LevelCredit {
    pub user: Level,
    pub course: Level,
    pub credit: f64,
}

/// Level-progression table. Pairs without an entry earn `floor`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LevelTable {
    pub credits: Vec<LevelCredit>,
    pub floor: f64,
}

impl LevelTable {
    /// Credit in `[0, 1]` for the `(user, course)` pair.
    pub fn credit(&self, user: Level, course: Level) -> f64 {
        self.credits
            .iter()
            .find(|entry| entry.user == user && entry.course == course)
            .map_or(self.floor, |entry| entry.credit)
    }

    /// # Errors
    ///
    /// Returns `RoadmapError::Configuration` when a credit lies outside
    /// `[0, 1]` or a pair is listed twice.
    pub fn validate(&self) -> Result<()> {
        let in_range = |credit: f64| (0.0..=1.0).contains(&credit);

        if !in_range(self.floor) {
            return Err(RoadmapError::configuration(format!(
                "level floor credit must be within [0, 1], got {}",
                self.floor
            )));
        }

        let mut seen = BTreeSet::new();
        for entry in &self.credits {
            if !in_range(entry.credit) {
                return Err(RoadmapError::configuration(format!(
                    "level credit {} -> {} must be within [0, 1], got {}",
                    entry.user.as_str(),
                    entry.course.as_str(),
                    entry.credit
                )));
            }
            if !seen.insert((entry.user, entry.course)) {
                return Err(RoadmapError::configuration(format!(
                    "level credit {} -> {} is listed twice",
                    entry.user.as_str(),
                    entry.course.as_str()
                )));
            }
        }

        Ok(())
    }
}

impl Default for LevelTable {
    fn default() -> Self {
        use Level::*;

        let entry = |user, course, credit| LevelCredit {
            user,
            course,
            credit,
        };

        Self {
            credits: vec![
                entry(Beginner, Beginner, 1.0),
                entry(Intermediate, Intermediate, 1.0),
                entry(Advanced, Advanced, 1.0),
                // one step ahead
                entry(Beginner, Intermediate, 0.8),
                entry(Intermediate, Advanced, 0.8),
                // one step behind
                entry(Intermediate, Beginner, 0.4),
                entry(Advanced, Intermediate, 0.5),
                // two steps behind; two steps ahead falls to the floor
                entry(Advanced, Beginner, 0.2),
            ],
            floor: 0.1,
        }
    }
}

/// Symmetric "related domains" relation.
///
/// ```rust
/// use roadmap_core::recommender::DomainAffinity;
///
/// let affinity = DomainAffinity::none().with_pair("AI", "Data Science");
/// assert!(affinity.related("AI", "Data Science"));
/// assert!(affinity.related("Data Science", "AI"));
/// assert!(!affinity.related("AI", "Web"));
/// assert!(affinity.admits("AI", "AI"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<[String; 2]>", into = "Vec<[String; 2]>")]
pub struct DomainAffinity {
    pairs: BTreeSet<(String, String)>,
}

impl DomainAffinity {
    /// An empty relation: only exact domain matches are candidates.
    pub fn none() -> Self {
        Self::default()
    }

    /// Adds the unordered pair `a ↔ b`. Self-pairs are ignored.
    pub fn with_pair(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.insert(a.into(), b.into());
        self
    }

    fn insert(&mut self, a: String, b: String) {
        if a == b {
            return;
        }
        let pair = if a < b { (a, b) } else { (b, a) };
        self.pairs.insert(pair);
    }

    /// Whether two distinct domains are related.
    pub fn related(&self, a: &str, b: &str) -> bool {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        self.pairs
            .iter()
            .any(|(x, y)| x.as_str() == lo && y.as_str() == hi)
    }

    /// Whether a course from `course_domain` is a candidate for a learner
    /// targeting `target_domain`.
    pub fn admits(&self, course_domain: &str, target_domain: &str) -> bool {
        course_domain == target_domain || self.related(course_domain, target_domain)
    }
}

impl From<Vec<[String; 2]>> for DomainAffinity {
    fn from(pairs: Vec<[String; 2]>) -> Self {
        let mut affinity = Self::none();
        for [a, b] in pairs {
            affinity.insert(a, b);
        }
        affinity
    }
}

impl From<DomainAffinity> for Vec<[String; 2]> {
    fn from(affinity: DomainAffinity) -> Self {
        affinity.pairs.into_iter().map(|(a, b)| [a, b]).collect()
    }
}

/// Everything the scoring function and the plan builder are parameterized
/// by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringPolicy {
    #[serde(default)]
    pub weights: ScoringWeights,
    #[serde(default)]
    pub levels: LevelTable,
    #[serde(default = "default_affinity")]
    pub affinity: DomainAffinity,
}

fn default_affinity() -> DomainAffinity {
    DomainAffinity::none().with_pair("AI", "Data Science")
}

impl ScoringPolicy {
    /// # Errors
    ///
    /// Returns `RoadmapError::Configuration` from the first invalid part.
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        self.levels.validate()
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            levels: LevelTable::default(),
            affinity: default_affinity(),
        }
    }
}
