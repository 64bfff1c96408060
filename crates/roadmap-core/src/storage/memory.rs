//! In-memory plan store.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use super::PlanStore;
use crate::{error::Result, models::StoredPlan};

/// Keeps plans in a map for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryPlanStore {
    plans: Mutex<HashMap<u64, StoredPlan>>,
}

impl MemoryPlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn plans(&self) -> MutexGuard<'_, HashMap<u64, StoredPlan>> {
        // a panic while holding the lock cannot leave a half-written entry
        self.plans
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PlanStore for MemoryPlanStore {
    fn save(&self, record: &StoredPlan) -> Result<()> {
        self.plans().insert(record.user_id, record.clone());
        Ok(())
    }

    fn load(&self, user_id: u64) -> Result<Option<StoredPlan>> {
        Ok(self.plans().get(&user_id).cloned())
    }
}
