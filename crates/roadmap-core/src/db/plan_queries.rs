//! Stored plan queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use super::{get_u32, get_u64, to_sql};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Plan, PlanStep, StoredPlan},
};

const DELETE_PLAN_STEPS_SQL: &str = "DELETE FROM plan_steps WHERE user_id = ?1";
const DELETE_PLAN_SQL: &str = "DELETE FROM plans WHERE user_id = ?1";
const INSERT_PLAN_SQL: &str =
    "INSERT INTO plans (user_id, total_hours, created_at) VALUES (?1, ?2, ?3)";
const INSERT_PLAN_STEP_SQL: &str =
    "INSERT INTO plan_steps (user_id, step, course_id, hours, note) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_PLAN_SQL: &str = "SELECT total_hours, created_at FROM plans WHERE user_id = ?1";
const SELECT_PLAN_STEPS_SQL: &str =
    "SELECT step, course_id, hours, note FROM plan_steps WHERE user_id = ?1 ORDER BY step";

impl super::Database {
    /// Replaces the stored plan of `record.user_id` in one transaction.
    pub fn save_plan(&mut self, record: &StoredPlan) -> Result<()> {
        let user_id = to_sql(record.user_id, "userId")?;
        let total_hours = to_sql(record.plan.total_hours, "totalHours")?;
        let steps = record
            .plan
            .steps
            .iter()
            .map(|step| to_sql(step.course_id, "courseId").map(|course_id| (step, course_id)))
            .collect::<Result<Vec<_>>>()?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let saved_at = record.saved_at.map(|at| at.to_string());

        tx.execute(DELETE_PLAN_STEPS_SQL, params![user_id])
            .db_context("Failed to delete previous plan steps")?;
        tx.execute(DELETE_PLAN_SQL, params![user_id])
            .db_context("Failed to delete previous plan")?;

        tx.execute(INSERT_PLAN_SQL, params![user_id, total_hours, saved_at])
            .db_context("Failed to insert plan")?;

        for (step, course_id) in steps {
            tx.execute(
                INSERT_PLAN_STEP_SQL,
                params![user_id, step.sequence_number, course_id, step.hours, step.note],
            )
            .db_context("Failed to insert plan step")?;
        }

        tx.commit().db_context("Failed to commit transaction")
    }

    /// Loads the stored plan of `user_id`, if any.
    pub fn load_plan(&self, user_id: u64) -> Result<Option<StoredPlan>> {
        let Ok(key) = i64::try_from(user_id) else {
            return Ok(None);
        };
        let header = self
            .connection
            .query_row(SELECT_PLAN_SQL, params![key], |row| {
                let total_hours = get_u64(row, 0)?;
                let saved_at = row
                    .get::<_, Option<String>>(1)?
                    .map(|s| s.parse::<Timestamp>())
                    .transpose()
                    .map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e))
                    })?;
                Ok((total_hours, saved_at))
            })
            .optional()
            .db_context("Failed to query plan")?;

        let Some((total_hours, saved_at)) = header else {
            return Ok(None);
        };

        let mut stmt = self
            .connection
            .prepare(SELECT_PLAN_STEPS_SQL)
            .db_context("Failed to prepare plan step query")?;
        let steps = stmt
            .query_map(params![key], |row| {
                Ok(PlanStep {
                    sequence_number: get_u32(row, 0)?,
                    course_id: get_u64(row, 1)?,
                    hours: get_u32(row, 2)?,
                    note: row.get(3)?,
                })
            })
            .db_context("Failed to query plan steps")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read plan step row")?;

        Ok(Some(StoredPlan {
            user_id,
            saved_at,
            plan: Plan { total_hours, steps },
        }))
    }
}
