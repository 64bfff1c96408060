//! Runtime configuration.
//!
//! Configuration is a JSON document with two optional sections:
//!
//! ```json
//! {
//!   "storage": {
//!     "backend": "sqlite",
//!     "databasePath": "/var/lib/roadmap/roadmap.db",
//!     "catalogPath": "/var/lib/roadmap/courses.json",
//!     "plansDir": "/var/lib/roadmap/plans"
//!   },
//!   "scoring": {
//!     "weights": { "domain": 0.4, "level": 0.3, "interest": 0.3 }
//!   }
//! }
//! ```
//!
//! Missing sections and fields take their defaults. A `weights` object needs
//! `domain`, `level` and `interest`; `crossDomain` defaults to 0.0. Unset paths resolve to
//! the XDG data directory (`$XDG_DATA_HOME/roadmap/`).

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, RoadmapError},
    recommender::ScoringPolicy,
};

const APP_PREFIX: &str = "roadmap";
const CONFIG_FILE: &str = "config.json";
const DATABASE_FILE: &str = "roadmap.db";
const CATALOG_FILE: &str = "courses.json";
const PLANS_DIR: &str = "plans";

/// Where catalogs and plans live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Catalog and plans in one SQLite database
    #[default]
    Sqlite,
    /// Catalog in a JSON file, plans as one JSON file per user
    Json,
}

impl std::str::FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "json" => Ok(Self::Json),
            other => Err(format!("Unknown backend '{other}', expected sqlite or json")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageConfig {
    pub backend: Backend,
    pub database_path: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
    pub plans_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// SQLite database file, defaulting to `$XDG_DATA_HOME/roadmap/roadmap.db`.
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => place_data_file(DATABASE_FILE),
        }
    }

    /// JSON catalog file, defaulting to `$XDG_DATA_HOME/roadmap/courses.json`.
    pub fn catalog_path(&self) -> Result<PathBuf> {
        match &self.catalog_path {
            Some(path) => Ok(path.clone()),
            None => place_data_file(CATALOG_FILE),
        }
    }

    /// JSON plan directory, defaulting to `$XDG_DATA_HOME/roadmap/plans`.
    pub fn plans_dir(&self) -> Result<PathBuf> {
        match &self.plans_dir {
            Some(path) => Ok(path.clone()),
            None => xdg::BaseDirectories::with_prefix(APP_PREFIX)
                .create_data_directory(PLANS_DIR)
                .map_err(|e| RoadmapError::XdgDirectory(e.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoadmapConfig {
    pub storage: StorageConfig,
    pub scoring: ScoringPolicy,
}

impl RoadmapConfig {
    /// Reads the configuration at `path`.
    ///
    /// # Errors
    ///
    /// `FileSystem` when the file cannot be read, `Serialization` when it is
    /// not valid JSON, and `Configuration` when the scoring policy is invalid.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| RoadmapError::file_system(path, e))?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Reads the default configuration file if it exists, otherwise returns
    /// the built-in defaults.
    pub fn load_default() -> Result<Self> {
        let Some(path) = Self::default_path() else {
            return Ok(Self::default());
        };
        match Self::load(&path) {
            Err(RoadmapError::FileSystem { source, .. })
                if source.kind() == io::ErrorKind::NotFound =>
            {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// `$XDG_CONFIG_HOME/roadmap/config.json`, when a home directory is
    /// known.
    pub fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix(APP_PREFIX).get_config_file(CONFIG_FILE)
    }

    /// # Errors
    ///
    /// Returns `RoadmapError::Configuration` when the scoring policy is
    /// inconsistent.
    pub fn validate(&self) -> Result<()> {
        self.scoring.validate()
    }
}

fn place_data_file(name: &str) -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix(APP_PREFIX)
        .place_data_file(name)
        .map_err(|e| RoadmapError::XdgDirectory(e.to_string()))
}
