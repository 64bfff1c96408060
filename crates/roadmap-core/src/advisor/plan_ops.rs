//! Recommendation and plan operations for the Advisor.

use std::sync::Arc;

use log::info;
use tokio::task;

use super::{current_courses, Advisor};
use crate::{
    error::{Result, RoadmapError},
    models::{Plan, StoredPlan},
    params::{Recommend, UserId},
    recommender::{make_plan_traced, PlanTrace},
};

impl Advisor {
    /// Builds a plan for the profile and saves it as the learner's current
    /// plan.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError::InvalidInput` for a malformed profile, and any
    /// catalog or store error unchanged.
    pub async fn recommend(&self, params: &Recommend) -> Result<Plan> {
        Ok(self.recommend_traced(params).await?.plan)
    }

    /// Like [`Advisor::recommend`], also reporting every ranked course that
    /// was not accepted and why.
    pub async fn recommend_traced(&self, params: &Recommend) -> Result<PlanTrace> {
        let profile = params.profile.clone();
        profile.validate()?;

        let catalog = Arc::clone(&self.catalog);
        let store = Arc::clone(&self.store);
        let policy = Arc::clone(&self.policy);
        let snapshot = self.snapshot.clone();

        task::spawn_blocking(move || {
            let courses = current_courses(catalog.as_ref(), snapshot.as_deref())?;
            let trace = make_plan_traced(&profile, &courses, &policy);
            trace.plan.check_invariants(&profile, &courses)?;

            store.save_plan(profile.user_id, &trace.plan)?;
            info!(
                "Saved plan for user {}: {} courses, {} of {} hours",
                profile.user_id,
                trace.plan.len(),
                trace.plan.total_hours,
                profile.total_available_hours()
            );
            Ok::<_, RoadmapError>(trace)
        })
        .await
        .map_err(RoadmapError::join)?
    }

    /// Retrieves the saved plan of a learner.
    pub async fn get_plan(&self, params: &UserId) -> Result<Option<Plan>> {
        Ok(self.get_stored_plan(params).await?.map(|record| record.plan))
    }

    /// Retrieves the saved plan of a learner with its save time.
    pub async fn get_stored_plan(&self, params: &UserId) -> Result<Option<StoredPlan>> {
        let store = Arc::clone(&self.store);
        let user_id = params.user_id;

        task::spawn_blocking(move || store.load(user_id))
            .await
            .map_err(RoadmapError::join)?
    }
}
