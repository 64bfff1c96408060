//! Catalog backed by a JSON file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use super::Catalog;
use crate::{
    error::{Result, RoadmapError},
    models::Course,
};

/// Reads the catalog from a JSON array of courses on every call.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parses a JSON course array from `path`, rejecting invalid courses and
/// repeated ids.
pub(crate) fn read_courses(path: &Path) -> Result<Vec<Course>> {
    let text = fs::read_to_string(path).map_err(|e| RoadmapError::file_system(path, e))?;
    let courses: Vec<Course> = serde_json::from_str(&text)?;
    Course::validate_catalog(&courses)?;
    debug!("Read {} courses from {}", courses.len(), path.display());
    Ok(courses)
}

impl Catalog for JsonCatalog {
    fn get_all(&self) -> Result<Vec<Course>> {
        read_courses(&self.path)
    }
}
