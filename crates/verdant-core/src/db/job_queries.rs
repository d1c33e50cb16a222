//! Job queries, including the plan-occurrence insert the generator relies on.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, Row, ToSql};

use super::{
    client_queries::{check_address_owner, CHECK_CLIENT_EXISTS_SQL},
    utils::{
        enum_column, id_column, normalize_notes, now, optional_cents_column, optional_id_column,
        optional_timestamp_column, timestamp_column, to_sql_optional_timestamp, to_sql_timestamp,
        truncate_to_second,
    },
};
use crate::{
    error::{is_unique_violation, DatabaseResultExt, OfficeError, Result},
    models::{Job, JobFilter, JobStatus, NewJob},
    params::{CreateJob, UpdateJob},
};

const JOB_COLUMNS: &str = "id, client_id, address_id, service_plan_id, title, notes, status, scheduled_start, scheduled_end, estimated_price_cents, actual_price_cents, created_at, updated_at";
const INSERT_JOB_SQL: &str = "INSERT INTO jobs (client_id, address_id, service_plan_id, title, notes, status, scheduled_start, scheduled_end, estimated_price_cents, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)";
const UPDATE_JOB_SQL: &str = "UPDATE jobs SET address_id = ?1, title = ?2, notes = ?3, status = ?4, scheduled_start = ?5, scheduled_end = ?6, estimated_price_cents = ?7, actual_price_cents = ?8, updated_at = ?9 WHERE id = ?10";
const UPDATE_JOB_STATUS_SQL: &str = "UPDATE jobs SET status = ?1, updated_at = ?2 WHERE id = ?3";

impl super::Database {
    fn build_job_from_row(row: &Row) -> rusqlite::Result<Job> {
        Ok(Job {
            id: id_column(row, 0)?,
            client_id: id_column(row, 1)?,
            address_id: optional_id_column(row, 2)?,
            service_plan_id: optional_id_column(row, 3)?,
            title: row.get(4)?,
            notes: row.get(5)?,
            status: enum_column(row, 6)?,
            scheduled_start: optional_timestamp_column(row, 7)?,
            scheduled_end: optional_timestamp_column(row, 8)?,
            estimated_price_cents: optional_cents_column(row, 9)?,
            actual_price_cents: optional_cents_column(row, 10)?,
            created_at: timestamp_column(row, 11)?,
            updated_at: timestamp_column(row, 12)?,
        })
    }

    /// Inserts a job row.
    ///
    /// # Errors
    ///
    /// * `OfficeError::DuplicateJob` - a job for the same plan and scheduled
    ///   start already exists
    /// * `OfficeError::Database` - any other storage failure
    pub fn insert_job(&mut self, job: &NewJob) -> Result<Job> {
        let now = now();
        let now_str = to_sql_timestamp(now);

        let inserted = self.connection.execute(
            INSERT_JOB_SQL,
            params![
                job.client_id as i64,
                job.address_id.map(|id| id as i64),
                job.service_plan_id.map(|id| id as i64),
                job.title,
                job.notes,
                job.status.as_str(),
                to_sql_optional_timestamp(job.scheduled_start),
                to_sql_optional_timestamp(job.scheduled_end),
                job.estimated_price_cents.map(|c| c.0),
                &now_str,
                &now_str
            ],
        );

        inserted.map_err(|e| {
            job_write_error(e, job.service_plan_id, job.scheduled_start, "Failed to insert job")
        })?;

        Ok(Job {
            id: self.connection.last_insert_rowid() as u64,
            client_id: job.client_id,
            address_id: job.address_id,
            service_plan_id: job.service_plan_id,
            title: job.title.clone(),
            notes: job.notes.clone(),
            status: job.status,
            scheduled_start: job.scheduled_start.map(truncate_to_second),
            scheduled_end: job.scheduled_end.map(truncate_to_second),
            estimated_price_cents: job.estimated_price_cents,
            actual_price_cents: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Creates a one-off job that doesn't belong to any plan.
    pub fn create_job(&mut self, params: &CreateJob) -> Result<Job> {
        params.validate()?;

        let client_exists: bool = self
            .connection
            .query_row(
                CHECK_CLIENT_EXISTS_SQL,
                params![params.client_id as i64],
                |row| row.get(0),
            )
            .db_context("Failed to check client existence")?;
        if !client_exists {
            return Err(OfficeError::ClientNotFound {
                id: params.client_id,
            });
        }
        check_address_owner(&self.connection, params.client_id, params.address_id)?;

        self.insert_job(&NewJob {
            client_id: params.client_id,
            address_id: params.address_id,
            service_plan_id: None,
            title: params.title.trim().to_string(),
            notes: params.notes.clone(),
            status: params.initial_status(),
            scheduled_start: params.scheduled_start,
            scheduled_end: params.scheduled_end,
            estimated_price_cents: params.estimated_price,
        })
    }

    /// Retrieves a job by its ID.
    pub fn get_job(&self, id: u64) -> Result<Option<Job>> {
        let sql = format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = ?1");
        self.connection
            .query_row(&sql, params![id as i64], Self::build_job_from_row)
            .optional()
            .db_context("Failed to query job")
    }

    /// Lists jobs matching the filter in schedule order. Unscheduled drafts
    /// sort last.
    pub fn list_jobs(&self, filter: &JobFilter) -> Result<Vec<Job>> {
        let mut query = format!("SELECT {JOB_COLUMNS} FROM jobs");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(plan_id) = filter.service_plan_id {
            conditions.push("service_plan_id = ?");
            params_vec.push(Box::new(plan_id as i64));
        }

        if let Some(client_id) = filter.client_id {
            conditions.push("client_id = ?");
            params_vec.push(Box::new(client_id as i64));
        }

        if let Some(status) = filter.status {
            conditions.push("status = ?");
            params_vec.push(Box::new(status.as_str()));
        }

        if let Some(from) = filter.scheduled_from {
            conditions.push("scheduled_start >= ?");
            params_vec.push(Box::new(to_sql_timestamp(from)));
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY scheduled_start IS NULL, scheduled_start, id");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn ToSql> = params_vec.iter().map(|b| &**b).collect();

        let jobs = stmt
            .query_map(&params_refs[..], Self::build_job_from_row)
            .db_context("Failed to query jobs")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch jobs")?;

        Ok(jobs)
    }

    /// Replaces a job's editable fields. Returns None if the job doesn't
    /// exist.
    ///
    /// # Errors
    ///
    /// * `OfficeError::InvalidInput` - field validation failed or the address
    ///   belongs to another client
    /// * `OfficeError::DuplicateJob` - the job was generated from a plan and
    ///   the new start is already taken by another job of that plan
    pub fn update_job(&mut self, params: &UpdateJob) -> Result<Option<Job>> {
        params.validate()?;

        let Some(current) = self.get_job(params.id)? else {
            return Ok(None);
        };

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        check_address_owner(&tx, current.client_id, params.address_id)?;

        let status = params.status.unwrap_or(current.status);

        tx.execute(
            UPDATE_JOB_SQL,
            params![
                params.address_id.map(|id| id as i64),
                params.title.trim(),
                normalize_notes(params.notes.as_deref()),
                status.as_str(),
                to_sql_optional_timestamp(params.scheduled_start),
                to_sql_optional_timestamp(params.scheduled_end),
                params.estimated_price.map(|c| c.0),
                params.actual_price.map(|c| c.0),
                to_sql_timestamp(now()),
                params.id as i64
            ],
        )
        .map_err(|e| {
            job_write_error(
                e,
                current.service_plan_id,
                params.scheduled_start,
                "Failed to update job",
            )
        })?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_job(params.id)
    }

    /// Moves a job to a new status. Returns None if the job doesn't exist.
    pub fn set_job_status(&mut self, id: u64, status: JobStatus) -> Result<Option<Job>> {
        let rows_affected = self
            .connection
            .execute(
                UPDATE_JOB_STATUS_SQL,
                params![status.as_str(), to_sql_timestamp(now()), id as i64],
            )
            .db_context("Failed to update job status")?;

        if rows_affected == 0 {
            return Ok(None);
        }

        self.get_job(id)
    }
}

/// A unique violation on a plan job means its plan already has a job at that
/// start.
fn job_write_error(
    e: rusqlite::Error,
    plan_id: Option<u64>,
    scheduled_start: Option<Timestamp>,
    message: &str,
) -> OfficeError {
    match (plan_id, scheduled_start) {
        (Some(plan_id), Some(start)) if is_unique_violation(&e) => OfficeError::DuplicateJob {
            plan_id,
            scheduled_start: truncate_to_second(start),
        },
        _ => OfficeError::database(message).with_source(e),
    }
}
