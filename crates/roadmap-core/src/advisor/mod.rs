//! Async service facade over the recommender, catalog and plan store.
//!
//! The [`Advisor`] is what the CLI and the MCP server talk to. It owns the
//! scoring policy and the two providers, and moves every blocking call
//! (database access, file I/O, planning) onto tokio's blocking pool:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  CLI / MCP      │    │    Advisor      │    │ Catalog +       │
//! │  (params)       │───▶│ (plan_ops,      │───▶│ PlanStore       │
//! │                 │    │  catalog_ops)   │    │ (SQLite / JSON) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use roadmap_core::{
//!     catalog::MemoryCatalog,
//!     models::{Course, Level, UserProfile},
//!     params::{Recommend, UserId},
//!     storage::MemoryPlanStore,
//!     AdvisorBuilder,
//! };
//!
//! # async fn example() -> roadmap_core::Result<()> {
//! let advisor = AdvisorBuilder::new()
//!     .with_catalog(MemoryCatalog::new(vec![
//!         Course::new(1, "AI", Level::Beginner, 6).with_tags(["ml"]),
//!     ]))
//!     .with_store(MemoryPlanStore::new())
//!     .build()
//!     .await?;
//!
//! let profile = UserProfile {
//!     user_id: 1,
//!     target_domain: "AI".to_string(),
//!     current_level: Level::Beginner,
//!     interests: vec!["ml".to_string()],
//!     hours_per_week: 5,
//!     deadline_weeks: 2,
//! };
//! let plan = advisor.recommend(&Recommend { profile }).await?;
//! assert_eq!(plan.course_ids(), vec![1]);
//!
//! let stored = advisor.get_plan(&UserId { user_id: 1 }).await?;
//! assert_eq!(stored, Some(plan));
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::{
    catalog::{read_validated, Catalog, CatalogSnapshot, SqliteCatalog},
    error::Result,
    models::Course,
    recommender::ScoringPolicy,
    storage::PlanStore,
};

pub mod builder;
pub mod catalog_ops;
pub mod plan_ops;


pub use builder::AdvisorBuilder;

/// Entry point for recommendation, plan and catalog operations.
///
/// Cloning is cheap; clones share the providers.
#[derive(Clone)]
pub struct Advisor {
    pub(crate) catalog: Arc<dyn Catalog>,
    pub(crate) store: Arc<dyn PlanStore>,
    pub(crate) policy: Arc<ScoringPolicy>,
    pub(crate) snapshot: Option<Arc<CatalogSnapshot>>,
    pub(crate) importer: Option<SqliteCatalog>,
}

impl Advisor {
    pub(crate) fn new(
        catalog: Arc<dyn Catalog>,
        store: Arc<dyn PlanStore>,
        policy: ScoringPolicy,
    ) -> Self {
        Self {
            catalog,
            store,
            policy: Arc::new(policy),
            snapshot: None,
            importer: None,
        }
    }

    /// The scoring policy every recommendation uses.
    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }
}

/// The courses to plan against: the cached snapshot when there is one,
/// otherwise a fresh read of the catalog. Blocking.
pub(crate) fn current_courses(
    catalog: &dyn Catalog,
    snapshot: Option<&CatalogSnapshot>,
) -> Result<Arc<[Course]>> {
    match snapshot {
        Some(snapshot) => Ok(snapshot.current()),
        None => Ok(read_validated(catalog)?.into()),
    }
}
