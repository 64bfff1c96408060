//! Plan persistence.
//!
//! A [`PlanStore`] keeps at most one plan per user; saving replaces whatever
//! was stored before. Three stores ship with the crate:
//!
//! - [`MemoryPlanStore`]: process-local map, used by tests
//! - [`JsonPlanStore`]: one `plan_<userId>.json` file per user
//! - [`SqlitePlanStore`]: the `plans` and `plan_steps` tables
//!
//! A client-server SQL store would implement the same trait.

use crate::{
    error::Result,
    models::{Plan, StoredPlan},
};

pub mod json;
pub mod memory;
pub mod sqlite;

pub use json::JsonPlanStore;
pub use memory::MemoryPlanStore;
pub use sqlite::SqlitePlanStore;

/// Persists and retrieves plans keyed by user id.
pub trait PlanStore: Send + Sync {
    /// Stores `record`, replacing any earlier plan of the same user.
    fn save(&self, record: &StoredPlan) -> Result<()>;

    /// Loads the stored record of `user_id`, if any.
    fn load(&self, user_id: u64) -> Result<Option<StoredPlan>>;

    /// Stores `plan` for `user_id`, stamped with the current time.
    fn save_plan(&self, user_id: u64, plan: &Plan) -> Result<()> {
        self.save(&StoredPlan::now(user_id, plan.clone()))
    }

    /// Loads the plan of `user_id` without its metadata.
    fn load_plan(&self, user_id: u64) -> Result<Option<Plan>> {
        Ok(self.load(user_id)?.map(|record| record.plan))
    }
}
