//! Catalog operations for the Advisor.

use std::{path::PathBuf, sync::Arc};

use tokio::task;

use super::{current_courses, Advisor};
use crate::{
    catalog::read_validated,
    error::{Result, RoadmapError},
    models::Course,
    params::{ExplainScore, ImportCatalog, ListCourses},
    recommender::{score_breakdown, ScoreBreakdown},
};

impl Advisor {
    /// Lists catalog courses passing the filters, ordered by id.
    pub async fn list_courses(&self, params: &ListCourses) -> Result<Vec<Course>> {
        let catalog = Arc::clone(&self.catalog);
        let snapshot = self.snapshot.clone();
        let filter = params.clone();

        task::spawn_blocking(move || {
            let courses = current_courses(catalog.as_ref(), snapshot.as_deref())?;
            let mut matching: Vec<Course> = courses
                .iter()
                .filter(|course| filter.matches(course))
                .cloned()
                .collect();
            matching.sort_by_key(|course| course.id);
            Ok::<_, RoadmapError>(matching)
        })
        .await
        .map_err(RoadmapError::join)?
    }

    /// Scores one course for a profile, term by term.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError::CourseNotFound` if the catalog has no such
    /// course, `RoadmapError::InvalidInput` for a malformed profile.
    pub async fn explain_score(&self, params: &ExplainScore) -> Result<ScoreBreakdown> {
        params.profile.validate()?;

        let catalog = Arc::clone(&self.catalog);
        let snapshot = self.snapshot.clone();
        let policy = Arc::clone(&self.policy);
        let course_id = params.course_id;
        let profile = params.profile.clone();

        task::spawn_blocking(move || {
            let courses = current_courses(catalog.as_ref(), snapshot.as_deref())?;
            let course = courses
                .iter()
                .find(|course| course.id == course_id)
                .ok_or(RoadmapError::CourseNotFound { id: course_id })?;
            Ok::<_, RoadmapError>(score_breakdown(course, &profile, &policy))
        })
        .await
        .map_err(RoadmapError::join)?
    }

    /// Imports a JSON course list into the database catalog and returns the
    /// number of courses written.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError::Configuration` when the advisor has no database
    /// catalog to import into.
    pub async fn import_catalog(&self, params: &ImportCatalog) -> Result<usize> {
        let Some(importer) = self.importer.clone() else {
            return Err(RoadmapError::configuration(
                "catalog import requires the sqlite backend",
            ));
        };
        let path = PathBuf::from(&params.path);

        let count = task::spawn_blocking(move || importer.import_from_json(path))
            .await
            .map_err(RoadmapError::join)??;

        if self.snapshot.is_some() {
            self.refresh_catalog().await?;
        }
        Ok(count)
    }

    /// Re-reads the catalog into the cached snapshot, if caching is on.
    /// Returns the number of courses in the catalog.
    pub async fn refresh_catalog(&self) -> Result<usize> {
        let catalog = Arc::clone(&self.catalog);
        let snapshot = self.snapshot.clone();

        task::spawn_blocking(move || match snapshot {
            Some(snapshot) => snapshot.refresh(catalog.as_ref()),
            None => Ok(read_validated(catalog.as_ref())?.len()),
        })
        .await
        .map_err(RoadmapError::join)?
    }
}
