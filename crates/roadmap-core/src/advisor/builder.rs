//! Builder for creating and configuring Advisor instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;
use tokio::task;

use super::Advisor;
use crate::{
    catalog::{Catalog, CatalogSnapshot, JsonCatalog, SqliteCatalog},
    config::{Backend, RoadmapConfig},
    db::Database,
    error::{Result, RoadmapError},
    recommender::ScoringPolicy,
    storage::{JsonPlanStore, PlanStore, SqlitePlanStore},
};

/// Builder for creating and configuring Advisor instances.
///
/// Explicit settings win over the configuration; anything left unset falls
/// back to [`RoadmapConfig`] and from there to the XDG defaults.
#[derive(Default)]
pub struct AdvisorBuilder {
    config: RoadmapConfig,
    database_path: Option<PathBuf>,
    backend: Option<Backend>,
    policy: Option<ScoringPolicy>,
    catalog: Option<Arc<dyn Catalog>>,
    store: Option<Arc<dyn PlanStore>>,
    cache_catalog: bool,
}

impl AdvisorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: RoadmapConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the configured path or
    /// `$XDG_DATA_HOME/roadmap/roadmap.db`.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn with_policy(mut self, policy: ScoringPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Uses `catalog` instead of the backend's catalog.
    pub fn with_catalog(mut self, catalog: impl Catalog + 'static) -> Self {
        self.catalog = Some(Arc::new(catalog));
        self
    }

    /// Uses `store` instead of the backend's plan store.
    pub fn with_store(mut self, store: impl PlanStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Reads the catalog once at build time and plans against that copy
    /// until [`Advisor::refresh_catalog`] is called. Suits long-running
    /// servers.
    pub fn with_catalog_cache(mut self, enabled: bool) -> Self {
        self.cache_catalog = enabled;
        self
    }

    /// Builds the configured advisor instance.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError::Configuration` if the scoring policy is invalid
    /// Returns `RoadmapError::XdgDirectory` if a default path cannot be placed
    /// Returns `RoadmapError::FileSystem` if the database directory cannot be
    /// created
    /// Returns `RoadmapError::Database` if database initialization fails
    pub async fn build(self) -> Result<Advisor> {
        let policy = self.policy.unwrap_or_else(|| self.config.scoring.clone());
        policy.validate()?;

        let backend = self.backend.unwrap_or(self.config.storage.backend);
        let needs_backend = self.catalog.is_none() || self.store.is_none();

        let (catalog, store, importer) = match backend {
            Backend::Sqlite if needs_backend => {
                let db_path = match self.database_path {
                    Some(path) => path,
                    None => self.config.storage.database_path()?,
                };
                Self::initialize_database(db_path.clone()).await?;
                debug!("Using SQLite storage at {}", db_path.display());

                let catalog: Arc<dyn Catalog> = match self.catalog {
                    Some(catalog) => catalog,
                    None => Arc::new(SqliteCatalog::new(&db_path)),
                };
                let store: Arc<dyn PlanStore> = match self.store {
                    Some(store) => store,
                    None => Arc::new(SqlitePlanStore::new(&db_path)),
                };
                (catalog, store, Some(SqliteCatalog::new(&db_path)))
            }
            Backend::Json if needs_backend => {
                let catalog: Arc<dyn Catalog> = match self.catalog {
                    Some(catalog) => catalog,
                    None => Arc::new(JsonCatalog::new(self.config.storage.catalog_path()?)),
                };
                let store: Arc<dyn PlanStore> = match self.store {
                    Some(store) => store,
                    None => Arc::new(JsonPlanStore::new(self.config.storage.plans_dir()?)),
                };
                debug!("Using JSON storage");
                (catalog, store, None)
            }
            _ => match (self.catalog, self.store) {
                (Some(catalog), Some(store)) => (catalog, store, None),
                _ => {
                    return Err(RoadmapError::configuration(
                        "catalog and plan store must both be set",
                    ))
                }
            },
        };

        let mut advisor = Advisor::new(catalog, store, policy);
        advisor.importer = importer;

        if self.cache_catalog {
            let source = Arc::clone(&advisor.catalog);
            let snapshot = task::spawn_blocking(move || CatalogSnapshot::load(source.as_ref()))
                .await
                .map_err(RoadmapError::join)??;
            advisor.snapshot = Some(Arc::new(snapshot));
        }

        Ok(advisor)
    }

    async fn initialize_database(db_path: PathBuf) -> Result<()> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| RoadmapError::file_system(parent, e))?;
            }
        }

        task::spawn_blocking(move || {
            let _db = Database::new(&db_path)?;
            Ok::<(), RoadmapError>(())
        })
        .await
        .map_err(RoadmapError::join)?
    }
}
