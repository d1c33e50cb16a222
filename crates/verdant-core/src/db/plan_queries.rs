//! Service plan CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, Row, ToSql};

use super::{
    client_queries::{check_address_owner, CHECK_CLIENT_EXISTS_SQL},
    utils::{
        date_column, enum_column, id_column, normalize_notes, now, optional_cents_column,
        optional_date_column, optional_id_column, optional_timestamp_column, timestamp_column,
        to_sql_timestamp,
    },
};
use crate::{
    error::{DatabaseResultExt, OfficeError, Result},
    models::{PlanFilter, PlanStatus, ServicePlan},
    params::{CreateServicePlan, UpdateServicePlan},
};

const PLAN_COLUMNS: &str = "id, client_id, address_id, title, notes, frequency, status, start_date, end_date, day_of_week, day_of_month, price_per_visit_cents, last_generated_at, created_at, updated_at";
const INSERT_PLAN_SQL: &str = "INSERT INTO service_plans (client_id, address_id, title, notes, frequency, status, start_date, end_date, day_of_week, day_of_month, price_per_visit_cents, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)";
const UPDATE_PLAN_SQL: &str = "UPDATE service_plans SET address_id = ?1, title = ?2, notes = ?3, frequency = ?4, status = ?5, start_date = ?6, end_date = ?7, day_of_week = ?8, day_of_month = ?9, price_per_visit_cents = ?10, updated_at = ?11 WHERE id = ?12";
const UPDATE_PLAN_STATUS_SQL: &str =
    "UPDATE service_plans SET status = ?1, updated_at = ?2 WHERE id = ?3";
pub(super) const CHECK_PLAN_EXISTS_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM service_plans WHERE id = ?1)";
// Stored timestamps are whole-second RFC 3339 UTC strings, so text order is
// time order and the watermark can only move forward.
const ADVANCE_WATERMARK_SQL: &str = "UPDATE service_plans SET last_generated_at = ?1 WHERE id = ?2 AND (last_generated_at IS NULL OR last_generated_at < ?1)";

impl super::Database {
    /// Helper function to construct a ServicePlan from a database row
    fn build_plan_from_row(row: &Row) -> rusqlite::Result<ServicePlan> {
        Ok(ServicePlan {
            id: id_column(row, 0)?,
            client_id: id_column(row, 1)?,
            address_id: optional_id_column(row, 2)?,
            title: row.get(3)?,
            notes: row.get(4)?,
            frequency: enum_column(row, 5)?,
            status: enum_column(row, 6)?,
            start_date: date_column(row, 7)?,
            end_date: optional_date_column(row, 8)?,
            day_of_week: row.get(9)?,
            day_of_month: row.get(10)?,
            price_per_visit_cents: optional_cents_column(row, 11)?,
            last_generated_at: optional_timestamp_column(row, 12)?,
            created_at: timestamp_column(row, 13)?,
            updated_at: timestamp_column(row, 14)?,
        })
    }

    /// Creates a service plan for an existing client.
    ///
    /// # Errors
    ///
    /// * `OfficeError::InvalidInput` - field validation failed or the address
    ///   belongs to another client
    /// * `OfficeError::ClientNotFound` - the client does not exist
    pub fn create_plan(&mut self, params: &CreateServicePlan) -> Result<ServicePlan> {
        params.validate()?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let client_exists: bool = tx
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
        check_address_owner(&tx, params.client_id, params.address_id)?;

        let now = now();
        let now_str = to_sql_timestamp(now);
        let status = params.status.unwrap_or_default();
        let title = params.title.trim();
        let notes = normalize_notes(params.notes.as_deref());

        tx.execute(
            INSERT_PLAN_SQL,
            params![
                params.client_id as i64,
                params.address_id.map(|id| id as i64),
                title,
                notes,
                params.frequency.as_str(),
                status.as_str(),
                params.start_date.to_string(),
                params.end_date.map(|d| d.to_string()),
                params.day_of_week,
                params.day_of_month,
                params.price_per_visit.map(|c| c.0),
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert service plan")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(ServicePlan {
            id,
            client_id: params.client_id,
            address_id: params.address_id,
            title: title.to_string(),
            notes,
            frequency: params.frequency,
            status,
            start_date: params.start_date,
            end_date: params.end_date,
            day_of_week: params.day_of_week,
            day_of_month: params.day_of_month,
            price_per_visit_cents: params.price_per_visit,
            last_generated_at: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a plan by its ID.
    pub fn get_plan(&self, id: u64) -> Result<Option<ServicePlan>> {
        let sql = format!("SELECT {PLAN_COLUMNS} FROM service_plans WHERE id = ?1");
        self.connection
            .query_row(&sql, params![id as i64], Self::build_plan_from_row)
            .optional()
            .db_context("Failed to query service plan")
    }

    /// Returns true if a plan with this ID exists, whatever its status.
    pub fn plan_exists(&self, id: u64) -> Result<bool> {
        self.connection
            .query_row(CHECK_PLAN_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check plan existence")
    }

    /// Lists plans matching the filter, oldest first.
    pub fn list_plans(&self, filter: &PlanFilter) -> Result<Vec<ServicePlan>> {
        let mut query = format!("SELECT {PLAN_COLUMNS} FROM service_plans");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(status) = filter.status {
            conditions.push("status = ?");
            params_vec.push(Box::new(status.as_str()));
        }

        if let Some(client_id) = filter.client_id {
            conditions.push("client_id = ?");
            params_vec.push(Box::new(client_id as i64));
        }

        if let Some(id) = filter.id {
            conditions.push("id = ?");
            params_vec.push(Box::new(id as i64));
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY id");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn ToSql> = params_vec.iter().map(|b| &**b).collect();

        let plans = stmt
            .query_map(&params_refs[..], Self::build_plan_from_row)
            .db_context("Failed to query service plans")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch service plans")?;

        Ok(plans)
    }

    /// Replaces the editable fields of a plan. The watermark is left alone.
    /// Returns None if the plan doesn't exist.
    pub fn update_plan(&mut self, params: &UpdateServicePlan) -> Result<Option<ServicePlan>> {
        params.validate()?;

        let Some(current) = self.get_plan(params.id)? else {
            return Ok(None);
        };

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        check_address_owner(&tx, current.client_id, params.address_id)?;

        let status = params.status.unwrap_or(current.status);
        let now = now();

        tx.execute(
            UPDATE_PLAN_SQL,
            params![
                params.address_id.map(|id| id as i64),
                params.title.trim(),
                normalize_notes(params.notes.as_deref()),
                params.frequency.as_str(),
                status.as_str(),
                params.start_date.to_string(),
                params.end_date.map(|d| d.to_string()),
                params.day_of_week,
                params.day_of_month,
                params.price_per_visit.map(|c| c.0),
                to_sql_timestamp(now),
                params.id as i64
            ],
        )
        .db_context("Failed to update service plan")?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_plan(params.id)
    }

    /// Moves a plan to a new status. Returns None if the plan doesn't exist.
    pub fn set_plan_status(&mut self, id: u64, status: PlanStatus) -> Result<Option<ServicePlan>> {
        let rows_affected = self
            .connection
            .execute(
                UPDATE_PLAN_STATUS_SQL,
                params![status.as_str(), to_sql_timestamp(now()), id as i64],
            )
            .db_context("Failed to update plan status")?;

        if rows_affected == 0 {
            return Ok(None);
        }

        self.get_plan(id)
    }

    /// Moves the plan's generation watermark forward to `until`. A watermark
    /// already at or past `until` is kept.
    ///
    /// # Errors
    ///
    /// * `OfficeError::PlanNotFound` - the plan does not exist
    pub fn advance_watermark(&mut self, id: u64, until: Timestamp) -> Result<()> {
        let rows_affected = self
            .connection
            .execute(
                ADVANCE_WATERMARK_SQL,
                params![to_sql_timestamp(until), id as i64],
            )
            .db_context("Failed to advance generation watermark")?;

        if rows_affected == 0 && !self.plan_exists(id)? {
            return Err(OfficeError::PlanNotFound { id });
        }

        Ok(())
    }
}
