use crate::cache::DepartmentCache;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use std::time::Duration;

const DEPARTMENT_CACHE_TTL: Duration = Duration::from_secs(300);

/// Shared state for all handlers; cloning is cheap, the connection pool and
/// cache live behind `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub departments: Arc<DepartmentCache>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            departments: Arc::new(DepartmentCache::new(DEPARTMENT_CACHE_TTL)),
        }
    }
}
