//! Plan store backed by the roadmap SQLite database.

use std::path::{Path, PathBuf};

use super::PlanStore;
use crate::{db::Database, error::Result, models::StoredPlan};

/// Stores plans in the `plans` and `plan_steps` tables.
#[derive(Debug, Clone)]
pub struct SqlitePlanStore {
    db_path: PathBuf,
}

impl SqlitePlanStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
        }
    }
}

impl PlanStore for SqlitePlanStore {
    fn save(&self, record: &StoredPlan) -> Result<()> {
        Database::new(&self.db_path)?.save_plan(record)
    }

    fn load(&self, user_id: u64) -> Result<Option<StoredPlan>> {
        Database::new(&self.db_path)?.load_plan(user_id)
    }
}
