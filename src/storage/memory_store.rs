use super::MessageStore;
use crate::{
    error::{DiceboxError, Result},
    model::MessageRecord,
    random::RandomSource,
};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Random bytes per identifier; rendered as twice as many hex characters.
pub const ID_BYTES: usize = 10;

/// Generate a new message identifier.
pub fn generate_id(rng: &dyn RandomSource) -> String {
    let mut bytes = [0u8; ID_BYTES];
    rng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

pub struct MemoryStore {
    records: RwLock<HashMap<String, MessageRecord>>,
    rng: Arc<dyn RandomSource>,
}

impl MemoryStore {
    pub fn new(rng: Arc<dyn RandomSource>) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            rng,
        }
    }

    // Every write completes before the guard drops, so a poisoned map is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, MessageRecord>> {
        self.records.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, MessageRecord>> {
        self.records.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl MessageStore for MemoryStore {
    fn get(&self, id: &str) -> Result<MessageRecord> {
        self.read()
            .get(id)
            .cloned()
            .ok_or_else(|| DiceboxError::NotFound(id.to_string()))
    }

    fn put(&self, id: &str, record: MessageRecord) {
        self.write().insert(id.to_string(), record);
    }

    fn delete(&self, id: &str) -> Option<MessageRecord> {
        self.write().remove(id)
    }

    fn create(&self, record: MessageRecord) -> Result<String> {
        let mut records = self.write();
        let mut id = generate_id(self.rng.as_ref());
        while records.contains_key(&id) {
            tracing::warn!(id = %id, "Identifier collision, regenerating");
            id = generate_id(self.rng.as_ref());
        }
        records.insert(id.clone(), record);
        tracing::debug!(id = %id, "Created message");
        Ok(id)
    }

    fn replace(&self, id: &str, record: MessageRecord) -> Result<MessageRecord> {
        let mut records = self.write();
        let slot = records
            .get_mut(id)
            .ok_or_else(|| DiceboxError::NotFound(id.to_string()))?;
        *slot = record.clone();
        tracing::debug!(id = %id, "Replaced message");
        Ok(record)
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{SeededRandom, ThreadRandom};
    use std::collections::HashSet;

    fn store() -> MemoryStore {
        MemoryStore::new(Arc::new(SeededRandom::new(17)))
    }

    #[test]
    fn test_generate_id_format() {
        let id = generate_id(&ThreadRandom);
        assert_eq!(id.len(), ID_BYTES * 2);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let store = store();
        assert!(matches!(store.get("nope"), Err(DiceboxError::NotFound(id)) if id == "nope"));
    }

    #[test]
    fn test_create_then_get() {
        let store = store();
        let record = MessageRecord::default().with_content("hi").with_author("me");
        let id = store.create(record.clone()).unwrap();
        assert_eq!(store.get(&id).unwrap(), record);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_put_overwrites() {
        let store = store();
        store.put("a", MessageRecord::default().with_content("one"));
        store.put("a", MessageRecord::default().with_author("two"));
        let record = store.get("a").unwrap();
        assert_eq!(record.content, None);
        assert_eq!(record.author.as_deref(), Some("two"));
    }

    #[test]
    fn test_replace_missing_leaves_store_unchanged() {
        let store = store();
        store.put("a", MessageRecord::default().with_content("keep"));
        let result = store.replace("b", MessageRecord::default().with_content("lost"));
        assert!(matches!(result, Err(DiceboxError::NotFound(_))));
        assert_eq!(store.len(), 1);
        assert!(store.get("b").is_err());
    }

    #[test]
    fn test_delete() {
        let store = store();
        store.put("a", MessageRecord::default());
        assert!(store.delete("a").is_some());
        assert!(store.delete("a").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_do_not_collide() {
        let store = MemoryStore::new(Arc::new(ThreadRandom));
        let ids: HashSet<String> = (0..100_000)
            .map(|_| store.create(MessageRecord::default()).unwrap())
            .collect();
        assert_eq!(ids.len(), 100_000);
        assert_eq!(store.len(), 100_000);
    }

    #[test]
    fn test_concurrent_creates() {
        let store = Arc::new(MemoryStore::new(Arc::new(ThreadRandom)));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..500 {
                        store.create(MessageRecord::default()).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(store.len(), 4_000);
    }
}
