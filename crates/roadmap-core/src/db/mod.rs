//! SQLite persistence for the course catalog and stored plans.
//!
//! This module owns the connection, schema management and the raw queries.
//! The [`crate::catalog::SqliteCatalog`] and
//! [`crate::storage::SqlitePlanStore`] providers open a [`Database`] per
//! operation on top of it.

use std::path::Path;

use rusqlite::{types::Type, Connection};

use crate::error::{DatabaseResultExt, Result, RoadmapError};

pub mod course_queries;
pub mod migrations;
pub mod plan_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Converts an id or count for binding, rejecting values SQLite cannot hold.
fn to_sql(value: u64, field: &str) -> Result<i64> {
    i64::try_from(value).map_err(|_| {
        RoadmapError::invalid_input(field)
            .with_reason(format!("{value} exceeds the largest storable integer"))
    })
}

/// Reads column `index` as a non-negative 64-bit id or total.
fn get_u64(row: &rusqlite::Row, index: usize) -> rusqlite::Result<u64> {
    let value: i64 = row.get(index)?;
    u64::try_from(value).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(index, Type::Integer, Box::new(e))
    })
}

/// Reads column `index` as a non-negative 32-bit count.
fn get_u32(row: &rusqlite::Row, index: usize) -> rusqlite::Result<u32> {
    let value: i64 = row.get(index)?;
    u32::try_from(value).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(index, Type::Integer, Box::new(e))
    })
}
