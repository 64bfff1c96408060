//! Plan store writing one JSON file per user.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;

use super::PlanStore;
use crate::{
    error::{Result, RoadmapError},
    models::StoredPlan,
};

/// Stores each plan as pretty-printed JSON in `<dir>/plan_<userId>.json`.
///
/// The directory is created on the first save.
#[derive(Debug, Clone)]
pub struct JsonPlanStore {
    dir: PathBuf,
}

impl JsonPlanStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// File holding the plan of `user_id`.
    pub fn plan_path(&self, user_id: u64) -> PathBuf {
        self.dir.join(format!("plan_{user_id}.json"))
    }
}

impl PlanStore for JsonPlanStore {
    fn save(&self, record: &StoredPlan) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| RoadmapError::file_system(&self.dir, e))?;

        let path = self.plan_path(record.user_id);
        let json = serde_json::to_string_pretty(record)?;

        // write beside the target and rename so readers never see a partial file
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, json).map_err(|e| RoadmapError::file_system(&staging, e))?;
        fs::rename(&staging, &path).map_err(|e| RoadmapError::file_system(&path, e))?;

        debug!("Saved plan for user {} to {}", record.user_id, path.display());
        Ok(())
    }

    fn load(&self, user_id: u64) -> Result<Option<StoredPlan>> {
        let path = self.plan_path(user_id);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(RoadmapError::file_system(path, e)),
        };
        Ok(Some(serde_json::from_str(&text)?))
    }
}
