//! Storage seam for well records.
//!
//! Handlers hold an `Arc<dyn WellStore>` so the same routes run against
//! PostgreSQL in production and against memory in tests or demos.

mod memory;
mod postgres;

use async_trait::async_trait;
use wells_core::types::DbId;

use crate::models::well::{CreateWell, UpdateWell, Well};

pub use memory::MemoryWellStore;
pub use postgres::PgWellStore;

/// Persistence contract for well records.
///
/// Each call performs exactly one storage operation. Errors are reported as
/// [`sqlx::Error`] so callers map every backend the same way.
#[async_trait]
pub trait WellStore: Send + Sync {
    /// Insert a new well. The store assigns `id`, `created_at` and `updated_at`.
    async fn create(&self, input: &CreateWell) -> Result<Well, sqlx::Error>;

    /// Fetch one well, `None` when no row has `id`.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Well>, sqlx::Error>;

    /// All wells ordered by name ascending.
    async fn list(&self) -> Result<Vec<Well>, sqlx::Error>;

    /// Replace the editable fields of well `id`.
    ///
    /// Returns `false` without inserting anything when `id` does not exist.
    async fn update(&self, id: DbId, input: &UpdateWell) -> Result<bool, sqlx::Error>;

    /// Remove well `id`. Returns `false` when there was nothing to remove.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Whether the backing storage is reachable.
    async fn health_check(&self) -> Result<(), sqlx::Error>;

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}
