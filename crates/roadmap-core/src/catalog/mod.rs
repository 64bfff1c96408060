//! Course catalog providers.
//!
//! A [`Catalog`] hands out the complete list of available courses. The
//! recommender never talks to a provider directly: the advisor fetches one
//! list per request and plans over that immutable slice.
//!
//! Providers:
//!
//! - [`MemoryCatalog`]: a fixed list, used by tests and embedders
//! - [`JsonCatalog`]: a JSON array of courses in a file
//! - [`SqliteCatalog`]: the `courses` tables of the roadmap database
//!
//! [`CatalogSnapshot`] keeps a shared copy of a provider's courses that can be
//! refreshed while readers keep planning against the copy they already hold.

use std::sync::{Arc, RwLock};

use log::info;

use crate::{error::Result, models::Course};

pub mod json;
pub mod memory;
pub mod sqlite;

pub use json::JsonCatalog;
pub use memory::MemoryCatalog;
pub use sqlite::SqliteCatalog;

/// Source of the available courses.
pub trait Catalog: Send + Sync {
    /// Returns every course in the catalog.
    ///
    /// # Errors
    ///
    /// Returns whatever the backing source fails with: `FileSystem`,
    /// `Serialization` or `Database`.
    fn get_all(&self) -> Result<Vec<Course>>;
}

/// Reads `catalog` and rejects it unless every course is valid and every id
/// unique, so malformed data never reaches the recommender.
pub fn read_validated(catalog: &dyn Catalog) -> Result<Vec<Course>> {
    let courses = catalog.get_all()?;
    Course::validate_catalog(&courses)?;
    Ok(courses)
}

/// Shared, swappable view of a catalog's courses.
///
/// ```rust
/// use roadmap_core::{
///     catalog::{CatalogSnapshot, MemoryCatalog},
///     models::{Course, Level},
/// };
///
/// let snapshot = CatalogSnapshot::default();
/// let before = snapshot.current();
///
/// let catalog = MemoryCatalog::new(vec![Course::new(1, "AI", Level::Beginner, 4)]);
/// snapshot.refresh(&catalog).unwrap();
///
/// assert!(before.is_empty());
/// assert_eq!(snapshot.current().len(), 1);
/// ```
#[derive(Debug)]
pub struct CatalogSnapshot {
    courses: RwLock<Arc<[Course]>>,
}

impl CatalogSnapshot {
    /// Creates a snapshot holding `courses`.
    pub fn new(courses: Vec<Course>) -> Self {
        Self {
            courses: RwLock::new(courses.into()),
        }
    }

    /// Loads a first snapshot from `catalog`.
    pub fn load(catalog: &dyn Catalog) -> Result<Self> {
        Ok(Self::new(read_validated(catalog)?))
    }

    /// The courses as of the last refresh.
    pub fn current(&self) -> Arc<[Course]> {
        match self.courses.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Re-reads `catalog` and swaps in the new course list. An invalid
    /// catalog leaves the current list in place.
    ///
    /// The catalog is read before the lock is taken, so readers only ever
    /// wait for the pointer swap. Returns the number of courses now held.
    pub fn refresh(&self, catalog: &dyn Catalog) -> Result<usize> {
        let fresh: Arc<[Course]> = read_validated(catalog)?.into();
        let count = fresh.len();

        match self.courses.write() {
            Ok(mut guard) => *guard = fresh,
            Err(poisoned) => *poisoned.into_inner() = fresh,
        }

        info!("Catalog snapshot refreshed with {count} courses");
        Ok(count)
    }
}

impl Default for CatalogSnapshot {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
