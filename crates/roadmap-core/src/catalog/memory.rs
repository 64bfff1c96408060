//! In-memory catalog.

use super::Catalog;
use crate::{error::Result, models::Course};

/// A catalog over a fixed list of courses.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    courses: Vec<Course>,
}

impl MemoryCatalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }
}

impl From<Vec<Course>> for MemoryCatalog {
    fn from(courses: Vec<Course>) -> Self {
        Self::new(courses)
    }
}

impl Catalog for MemoryCatalog {
    fn get_all(&self) -> Result<Vec<Course>> {
        Ok(self.courses.clone())
    }
}
