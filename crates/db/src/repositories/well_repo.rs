//! Repository for the `wells` table.

use sqlx::PgPool;
use wells_core::types::DbId;

use crate::models::well::{CreateWell, UpdateWell, Well};

/// Column list shared across queries to avoid repetition.
///
/// Casts and `COALESCE`s let rows from a legacy `wells` table (`SERIAL` id,
/// `DECIMAL` numbers, `TIMESTAMP` without time zone, nullable text) decode
/// into [`Well`]. They are no-ops on the table the migrations create.
const COLUMNS: &str = "id::BIGINT AS id, \
    COALESCE(name, '')::TEXT AS name, \
    COALESCE(depth, 0)::FLOAT8 AS depth, \
    COALESCE(location, '')::TEXT AS location, \
    COALESCE(status, '')::TEXT AS status, \
    COALESCE(productivity, 0)::FLOAT8 AS productivity, \
    drilling_date, \
    COALESCE(field, '')::TEXT AS field, \
    COALESCE(operator, '')::TEXT AS operator, \
    COALESCE(created_at::TIMESTAMPTZ, NOW()) AS created_at, \
    COALESCE(updated_at::TIMESTAMPTZ, created_at::TIMESTAMPTZ, NOW()) AS updated_at";

/// Provides CRUD operations for wells.
pub struct WellRepo;

impl WellRepo {
    /// Insert a new well, returning the created row with its assigned id
    /// and timestamps.
    pub async fn create(pool: &PgPool, input: &CreateWell) -> Result<Well, sqlx::Error> {
        let query = format!(
            "INSERT INTO wells
                (name, depth, location, status, productivity, drilling_date, field, operator)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Well>(&query)
            .bind(&input.name)
            .bind(input.depth)
            .bind(&input.location)
            .bind(&input.status)
            .bind(input.productivity)
            .bind(input.drilling_date)
            .bind(&input.field)
            .bind(&input.operator)
            .fetch_one(pool)
            .await
    }

    /// Find a well by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Well>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM wells WHERE id = $1");
        sqlx::query_as::<_, Well>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all wells ordered by name ascending, ties broken by id.
    ///
    /// Names compare byte-wise (`COLLATE "C"`), whatever the database locale.
    pub async fn list(pool: &PgPool) -> Result<Vec<Well>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM wells ORDER BY name COLLATE \"C\" ASC, id ASC");
        sqlx::query_as::<_, Well>(&query).fetch_all(pool).await
    }

    /// Replace the editable fields of a well and refresh `updated_at`.
    ///
    /// Returns `true` if a row was updated, `false` if no row has `id`.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateWell) -> Result<bool, sqlx::Error> {
        // updated_at must strictly increase.
        let result = sqlx::query(
            "UPDATE wells SET
                name = $2,
                depth = $3,
                location = $4,
                status = $5,
                productivity = $6,
                field = $7,
                operator = $8,
                updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond')
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.depth)
        .bind(&input.location)
        .bind(&input.status)
        .bind(input.productivity)
        .bind(&input.field)
        .bind(&input.operator)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a well by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM wells WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
