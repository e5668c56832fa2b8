//! Well entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wells_core::types::{DbId, Timestamp};

/// A row from the `wells` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Well {
    pub id: DbId,
    pub name: String,
    pub depth: f64,
    pub location: String,
    /// Free text. The UI offers `wells_core::well::WELL_STATUSES`.
    pub status: String,
    pub productivity: f64,
    pub drilling_date: Option<NaiveDate>,
    /// Geological field the well belongs to.
    pub field: String,
    pub operator: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new well. The store assigns `id` and timestamps.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreateWell {
    pub name: String,
    pub depth: f64,
    pub location: String,
    pub status: String,
    pub productivity: f64,
    pub drilling_date: Option<NaiveDate>,
    pub field: String,
    pub operator: String,
}

/// DTO for updating an existing well.
///
/// Every field replaces the stored value; `drilling_date` is not editable.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateWell {
    pub name: String,
    pub depth: f64,
    pub location: String,
    pub status: String,
    pub productivity: f64,
    pub field: String,
    pub operator: String,
}
