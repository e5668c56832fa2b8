use async_trait::async_trait;
use wells_core::types::DbId;

use crate::models::well::{CreateWell, UpdateWell, Well};
use crate::repositories::WellRepo;
use crate::store::WellStore;
use crate::DbPool;

/// [`WellStore`] backed by the `wells` table.
#[derive(Clone)]
pub struct PgWellStore {
    pool: DbPool,
}

impl PgWellStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WellStore for PgWellStore {
    async fn create(&self, input: &CreateWell) -> Result<Well, sqlx::Error> {
        WellRepo::create(&self.pool, input).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Well>, sqlx::Error> {
        WellRepo::find_by_id(&self.pool, id).await
    }

    async fn list(&self) -> Result<Vec<Well>, sqlx::Error> {
        WellRepo::list(&self.pool).await
    }

    async fn update(&self, id: DbId, input: &UpdateWell) -> Result<bool, sqlx::Error> {
        WellRepo::update(&self.pool, id, input).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        WellRepo::delete(&self.pool, id).await
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
