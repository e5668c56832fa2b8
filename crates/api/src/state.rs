use std::sync::Arc;

use wells_db::store::WellStore;

use crate::templates::Templates;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Well persistence, PostgreSQL or in-memory.
    pub store: Arc<dyn WellStore>,
    /// Templates parsed once at startup.
    pub templates: Arc<Templates>,
}
