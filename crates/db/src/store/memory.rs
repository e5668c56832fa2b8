use async_trait::async_trait;
use chrono::{TimeDelta, Utc};
use tokio::sync::RwLock;
use wells_core::types::DbId;

use crate::models::well::{CreateWell, UpdateWell, Well};
use crate::store::WellStore;

/// [`WellStore`] holding wells in process memory.
///
/// Reads share a read lock; writes take the write lock. Ids start at 1 and
/// are never reused, even after a delete.
pub struct MemoryWellStore {
    inner: RwLock<MemoryState>,
}

struct MemoryState {
    wells: Vec<Well>,
    next_id: DbId,
}

impl MemoryWellStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryState {
                wells: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of wells currently held.
    pub async fn len(&self) -> usize {
        self.inner.read().await.wells.len()
    }

    /// Whether the store holds no wells.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryWellStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WellStore for MemoryWellStore {
    async fn create(&self, input: &CreateWell) -> Result<Well, sqlx::Error> {
        let mut state = self.inner.write().await;
        let now = Utc::now();
        let well = Well {
            id: state.next_id,
            name: input.name.clone(),
            depth: input.depth,
            location: input.location.clone(),
            status: input.status.clone(),
            productivity: input.productivity,
            drilling_date: input.drilling_date,
            field: input.field.clone(),
            operator: input.operator.clone(),
            created_at: now,
            updated_at: now,
        };
        state.next_id += 1;
        state.wells.push(well.clone());
        Ok(well)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Well>, sqlx::Error> {
        let state = self.inner.read().await;
        Ok(state.wells.iter().find(|w| w.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Well>, sqlx::Error> {
        let mut wells = self.inner.read().await.wells.clone();
        // Byte order, same as `COLLATE "C"` in `WellRepo::list`.
        wells.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(wells)
    }

    async fn update(&self, id: DbId, input: &UpdateWell) -> Result<bool, sqlx::Error> {
        let mut state = self.inner.write().await;
        let Some(well) = state.wells.iter_mut().find(|w| w.id == id) else {
            return Ok(false);
        };
        well.name = input.name.clone();
        well.depth = input.depth;
        well.location = input.location.clone();
        well.status = input.status.clone();
        well.productivity = input.productivity;
        well.field = input.field.clone();
        well.operator = input.operator.clone();
        well.updated_at = Utc::now().max(well.updated_at + TimeDelta::microseconds(1));
        Ok(true)
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let mut state = self.inner.write().await;
        match state.wells.iter().position(|w| w.id == id) {
            Some(index) => {
                state.wells.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use wells_core::well::ZERO_DATE;

    use super::*;

    fn new_well(name: &str) -> CreateWell {
        CreateWell {
            name: name.to_string(),
            depth: 1200.5,
            location: "North pad".to_string(),
            status: "active".to_string(),
            productivity: 35.25,
            drilling_date: NaiveDate::from_ymd_opt(2018, 4, 12),
            field: "Samotlor".to_string(),
            operator: "Rosneft".to_string(),
        }
    }

    fn edit(name: &str) -> UpdateWell {
        UpdateWell {
            name: name.to_string(),
            depth: 900.0,
            location: "South pad".to_string(),
            status: "maintenance".to_string(),
            productivity: 12.0,
            field: "Priobskoye".to_string(),
            operator: "Gazprom Neft".to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let store = MemoryWellStore::new();
        let first = store.create(&new_well("A-1")).await.unwrap();
        let second = store.create(&new_well("A-2")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.created_at, first.updated_at);
    }

    #[tokio::test]
    async fn find_returns_created_fields() {
        let store = MemoryWellStore::new();
        let input = new_well("Well-7");
        let created = store.create(&input).await.unwrap();

        let found = store.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
        assert_eq!(found.name, input.name);
        assert_eq!(found.depth, input.depth);
        assert_eq!(found.drilling_date, input.drilling_date);
        assert_eq!(found.operator, input.operator);
    }

    #[tokio::test]
    async fn find_missing_is_none() {
        let store = MemoryWellStore::new();
        assert!(store.find_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_sorts_by_name() {
        let store = MemoryWellStore::new();
        for name in ["Delta", "Alpha", "Charlie", "Bravo"] {
            store.create(&new_well(name)).await.unwrap();
        }
        let names: Vec<String> = store.list().await.unwrap().into_iter().map(|w| w.name).collect();
        assert_eq!(names, ["Alpha", "Bravo", "Charlie", "Delta"]);
    }

    #[tokio::test]
    async fn list_puts_uppercase_before_lowercase() {
        let store = MemoryWellStore::new();
        for name in ["alpha", "Bravo", "charlie", "Alpha"] {
            store.create(&new_well(name)).await.unwrap();
        }
        let names: Vec<String> = store.list().await.unwrap().into_iter().map(|w| w.name).collect();
        assert_eq!(names, ["Alpha", "Bravo", "alpha", "charlie"]);
    }

    #[tokio::test]
    async fn list_empty_is_ok() {
        let store = MemoryWellStore::new();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_replaces_fields_but_keeps_drilling_date() {
        let store = MemoryWellStore::new();
        let mut input = new_well("Old");
        input.drilling_date = Some(ZERO_DATE);
        let created = store.create(&input).await.unwrap();

        assert!(store.update(created.id, &edit("New")).await.unwrap());

        let found = store.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.name, "New");
        assert_eq!(found.depth, 900.0);
        assert_eq!(found.status, "maintenance");
        assert_eq!(found.field, "Priobskoye");
        assert_eq!(found.drilling_date, Some(ZERO_DATE));
        assert_eq!(found.created_at, created.created_at);
        assert!(found.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn updated_at_advances_on_every_update() {
        let store = MemoryWellStore::new();
        let created = store.create(&new_well("W")).await.unwrap();

        let mut previous = created.updated_at;
        for _ in 0..5 {
            store.update(created.id, &edit("W")).await.unwrap();
            let current = store.find_by_id(created.id).await.unwrap().unwrap().updated_at;
            assert!(current > previous);
            previous = current;
        }
    }

    #[tokio::test]
    async fn update_missing_does_not_insert() {
        let store = MemoryWellStore::new();
        assert!(!store.update(42, &edit("Ghost")).await.unwrap());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn delete_removes_and_is_idempotent() {
        let store = MemoryWellStore::new();
        let created = store.create(&new_well("Gone")).await.unwrap();

        assert!(store.delete(created.id).await.unwrap());
        assert!(!store.delete(created.id).await.unwrap());
        assert!(store.find_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryWellStore::new();
        let first = store.create(&new_well("One")).await.unwrap();
        store.delete(first.id).await.unwrap();
        let second = store.create(&new_well("Two")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn unknown_status_is_stored_verbatim() {
        let store = MemoryWellStore::new();
        let mut input = new_well("Odd");
        input.status = "conservation".to_string();
        let created = store.create(&input).await.unwrap();
        assert_eq!(created.status, "conservation");
    }
}
