//! Course catalog queries.

use std::collections::HashMap;

use log::info;
use rusqlite::{params, types::Type};

use super::{get_u32, get_u64, to_sql};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Course, Level},
};

const SELECT_COURSES_SQL: &str =
    "SELECT id, title, domain, level, duration_hours, score FROM courses ORDER BY id";
const SELECT_TAGS_SQL: &str = "SELECT course_id, tag FROM course_tags ORDER BY course_id, rowid";
const SELECT_PREREQUISITES_SQL: &str =
    "SELECT course_id, prerequisite_id FROM course_prerequisites ORDER BY course_id, rowid";
const UPSERT_COURSE_SQL: &str = "INSERT INTO courses (id, title, domain, level, duration_hours, score) VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
     ON CONFLICT(id) DO UPDATE SET title = excluded.title, domain = excluded.domain, level = excluded.level, \
     duration_hours = excluded.duration_hours, score = excluded.score";
const DELETE_TAGS_SQL: &str = "DELETE FROM course_tags WHERE course_id = ?1";
const DELETE_PREREQUISITES_SQL: &str = "DELETE FROM course_prerequisites WHERE course_id = ?1";
const INSERT_TAG_SQL: &str = "INSERT INTO course_tags (course_id, tag) VALUES (?1, ?2)";
const INSERT_PREREQUISITE_SQL: &str =
    "INSERT INTO course_prerequisites (course_id, prerequisite_id) VALUES (?1, ?2)";

impl super::Database {
    fn build_course_from_row(row: &rusqlite::Row) -> rusqlite::Result<Course> {
        let level_str: String = row.get(3)?;
        let level = level_str.parse::<Level>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                Type::Text,
                format!("Invalid level: {level_str}").into(),
            )
        })?;

        Ok(Course {
            id: get_u64(row, 0)?,
            title: row.get(1)?,
            domain: row.get(2)?,
            level,
            duration_hours: get_u32(row, 4)?,
            tags: Vec::new(),
            prerequisite_course_ids: Vec::new(),
            intrinsic_score: row.get(5)?,
        })
    }

    /// Loads every course with its tags and prerequisites, ordered by id.
    ///
    /// Tags and prerequisites are fetched with one query each and attached in
    /// memory.
    pub fn list_courses(&self) -> Result<Vec<Course>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_COURSES_SQL)
            .db_context("Failed to prepare course query")?;
        let mut courses = stmt
            .query_map([], Self::build_course_from_row)
            .db_context("Failed to query courses")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read course row")?;

        let mut tags: HashMap<u64, Vec<String>> = HashMap::new();
        let mut stmt = self
            .connection
            .prepare(SELECT_TAGS_SQL)
            .db_context("Failed to prepare tag query")?;
        let rows = stmt
            .query_map([], |row| Ok((get_u64(row, 0)?, row.get::<_, String>(1)?)))
            .db_context("Failed to query course tags")?;
        for row in rows {
            let (course_id, tag) = row.db_context("Failed to read tag row")?;
            tags.entry(course_id).or_default().push(tag);
        }

        let mut prerequisites: HashMap<u64, Vec<u64>> = HashMap::new();
        let mut stmt = self
            .connection
            .prepare(SELECT_PREREQUISITES_SQL)
            .db_context("Failed to prepare prerequisite query")?;
        let rows = stmt
            .query_map([], |row| Ok((get_u64(row, 0)?, get_u64(row, 1)?)))
            .db_context("Failed to query course prerequisites")?;
        for row in rows {
            let (course_id, prerequisite_id) = row.db_context("Failed to read prerequisite row")?;
            prerequisites.entry(course_id).or_default().push(prerequisite_id);
        }

        for course in &mut courses {
            course.tags = tags.remove(&course.id).unwrap_or_default();
            course.prerequisite_course_ids = prerequisites.remove(&course.id).unwrap_or_default();
        }

        Ok(courses)
    }

    /// Inserts or replaces `courses` in one transaction, rewriting each
    /// course's tags and prerequisites. Returns the number of courses
    /// written.
    pub fn upsert_courses(&mut self, courses: &[Course]) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        for course in courses {
            let id = to_sql(course.id, "id")?;
            tx.execute(
                UPSERT_COURSE_SQL,
                params![
                    id,
                    course.title,
                    course.domain,
                    course.level.as_str(),
                    course.duration_hours,
                    course.intrinsic_score
                ],
            )
            .db_context("Failed to upsert course")?;

            tx.execute(DELETE_TAGS_SQL, params![id])
                .db_context("Failed to clear course tags")?;
            tx.execute(DELETE_PREREQUISITES_SQL, params![id])
                .db_context("Failed to clear course prerequisites")?;

            for tag in &course.tags {
                tx.execute(INSERT_TAG_SQL, params![id, tag])
                    .db_context("Failed to insert course tag")?;
            }
            for &prerequisite_id in &course.prerequisite_course_ids {
                let prerequisite_id = to_sql(prerequisite_id, "prerequisiteCourseIds")?;
                tx.execute(INSERT_PREREQUISITE_SQL, params![id, prerequisite_id])
                    .db_context("Failed to insert course prerequisite")?;
            }
        }

        tx.commit().db_context("Failed to commit transaction")?;

        info!("Imported {} courses into the catalog", courses.len());
        Ok(courses.len())
    }
}
