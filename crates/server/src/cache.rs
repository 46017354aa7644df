use std::collections::HashMap;
use std::sync::Arc;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Per-user cache of the department ids a caller may touch.
///
/// Entries expire after the TTL and are refreshed on the next lookup; there is
/// no other invalidation, so a faculty reorganization can be served stale for
/// up to one TTL.
pub struct DepartmentCache {
    ttl: Duration,
    entries: RwLock<HashMap<Uuid, (Instant, Arc<Vec<Uuid>>)>>,
}

impl DepartmentCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, user_id: Uuid) -> Option<Arc<Vec<Uuid>>> {
        let entries = self.entries.read().unwrap();
        match entries.get(&user_id) {
            Some((stored_at, ids)) if stored_at.elapsed() < self.ttl => Some(ids.clone()),
            _ => None,
        }
    }

    pub fn insert(&self, user_id: Uuid, ids: Arc<Vec<Uuid>>) {
        let mut entries = self.entries.write().unwrap();
        entries.insert(user_id, (Instant::now(), ids));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_entry_is_served() {
        let cache = DepartmentCache::new(Duration::from_secs(300));
        let user = Uuid::new_v4();
        let ids = Arc::new(vec![Uuid::new_v4()]);

        cache.insert(user, ids.clone());
        assert_eq!(cache.get(user), Some(ids));
    }

    #[test]
    fn expired_entry_is_dropped() {
        let cache = DepartmentCache::new(Duration::from_millis(1));
        let user = Uuid::new_v4();
        cache.insert(user, Arc::new(vec![Uuid::new_v4()]));

        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(cache.get(user), None);
    }

    #[test]
    fn unknown_user_misses() {
        let cache = DepartmentCache::new(Duration::from_secs(300));
        assert_eq!(cache.get(Uuid::new_v4()), None);
    }
}
