//! Catalog backed by the roadmap SQLite database.

use std::path::{Path, PathBuf};

use super::{json::read_courses, Catalog};
use crate::{db::Database, error::Result, models::Course};

/// Reads courses, tags and prerequisites from the database.
///
/// A fresh connection is opened per call, so the catalog can be shared
/// between threads.
#[derive(Debug, Clone)]
pub struct SqliteCatalog {
    db_path: PathBuf,
}

impl SqliteCatalog {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
        }
    }

    /// Upserts every course of the JSON array at `path`.
    ///
    /// The file is validated as a whole first; a single invalid course or
    /// repeated id aborts the import before anything is written. Returns the
    /// number of imported courses.
    pub fn import_from_json<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let courses = read_courses(path.as_ref())?;
        self.import(&courses)
    }

    /// Upserts `courses` in one transaction.
    pub fn import(&self, courses: &[Course]) -> Result<usize> {
        Course::validate_catalog(courses)?;
        let mut db = Database::new(&self.db_path)?;
        db.upsert_courses(courses)
    }
}

impl Catalog for SqliteCatalog {
    fn get_all(&self) -> Result<Vec<Course>> {
        Database::new(&self.db_path)?.list_courses()
    }
}
