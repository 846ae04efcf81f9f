//! Warmth ledger: serialized read-modify-write over the memory store.
//!
//! Concurrent reply cycles would otherwise interleave load/save and lose
//! warmth increments, so every mutation runs under one async mutex. Reads
//! for display (`peek`) skip the lock; they tolerate racing a writer.

use tokio::sync::Mutex;
use tracing::debug;

use emilia_types::error::MemoryError;
use emilia_types::memory::UserRecord;

use crate::memory::store::MemoryStore;

/// Single-writer wrapper around a [`MemoryStore`].
pub struct WarmthLedger<S: MemoryStore> {
    store: S,
    write_lock: Mutex<()>,
}

impl<S: MemoryStore> WarmthLedger<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Record one interaction for `user_id` and return the updated record.
    ///
    /// First interaction creates the record with warmth 1 and the display
    /// name seen right now; every later interaction adds exactly 1 to
    /// warmth and leaves the name alone.
    pub async fn record_interaction(
        &self,
        user_id: &str,
        display_name: &str,
    ) -> Result<UserRecord, MemoryError> {
        let _guard = self.write_lock.lock().await;

        let mut map = self.store.load().await?;
        let record = map
            .entry(user_id.to_string())
            .and_modify(|r| r.warmth += 1)
            .or_insert_with(|| UserRecord::first_sight(display_name))
            .clone();
        self.store.save(&map).await?;

        debug!(user_id, warmth = record.warmth, "interaction recorded");
        Ok(record)
    }

    /// Look up a record without creating or mutating anything.
    pub async fn peek(&self, user_id: &str) -> Result<Option<UserRecord>, MemoryError> {
        Ok(self.store.load().await?.get(user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emilia_types::memory::MemoryMap;
    use std::sync::Arc;

    /// Map-backed store for tests; no file I/O.
    struct InMemoryStore {
        map: std::sync::Mutex<MemoryMap>,
    }

    impl InMemoryStore {
        fn new() -> Self {
            Self {
                map: std::sync::Mutex::new(MemoryMap::new()),
            }
        }
    }

    impl MemoryStore for InMemoryStore {
        async fn load(&self) -> Result<MemoryMap, MemoryError> {
            Ok(self.map.lock().unwrap().clone())
        }

        async fn save(&self, map: &MemoryMap) -> Result<(), MemoryError> {
            *self.map.lock().unwrap() = map.clone();
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_first_interaction_creates_record() {
        let ledger = WarmthLedger::new(InMemoryStore::new());
        let record = ledger.record_interaction("123", "Subaru").await.unwrap();
        assert_eq!(record.name, "Subaru");
        assert_eq!(record.warmth, 1);
    }

    #[tokio::test]
    async fn test_repeat_interactions_increment_warmth() {
        let ledger = WarmthLedger::new(InMemoryStore::new());
        ledger.record_interaction("123", "Subaru").await.unwrap();
        ledger.record_interaction("123", "Subaru").await.unwrap();
        let record = ledger.record_interaction("123", "Subaru").await.unwrap();
        assert_eq!(record.warmth, 3);
    }

    #[tokio::test]
    async fn test_name_frozen_at_first_sight() {
        let ledger = WarmthLedger::new(InMemoryStore::new());
        ledger.record_interaction("123", "Subaru").await.unwrap();
        let record = ledger.record_interaction("123", "Natsuki").await.unwrap();
        assert_eq!(record.name, "Subaru");
        assert_eq!(record.warmth, 2);
    }

    #[tokio::test]
    async fn test_peek_does_not_create() {
        let ledger = WarmthLedger::new(InMemoryStore::new());
        assert!(ledger.peek("123").await.unwrap().is_none());

        ledger.record_interaction("123", "Subaru").await.unwrap();
        let record = ledger.peek("123").await.unwrap().unwrap();
        assert_eq!(record.warmth, 1);
        // Peeking twice must not bump the counter.
        let record = ledger.peek("123").await.unwrap().unwrap();
        assert_eq!(record.warmth, 1);
    }

    #[tokio::test]
    async fn test_concurrent_interactions_do_not_lose_updates() {
        let ledger = Arc::new(WarmthLedger::new(InMemoryStore::new()));

        let mut handles = Vec::new();
        for _ in 0..16 {
            let ledger = Arc::clone(&ledger);
            handles.push(tokio::spawn(async move {
                ledger.record_interaction("123", "Subaru").await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let record = ledger.peek("123").await.unwrap().unwrap();
        assert_eq!(record.warmth, 16);
    }

    #[tokio::test]
    async fn test_users_are_independent() {
        let ledger = WarmthLedger::new(InMemoryStore::new());
        ledger.record_interaction("123", "Subaru").await.unwrap();
        ledger.record_interaction("456", "Rem").await.unwrap();
        ledger.record_interaction("456", "Rem").await.unwrap();

        assert_eq!(ledger.peek("123").await.unwrap().unwrap().warmth, 1);
        assert_eq!(ledger.peek("456").await.unwrap().unwrap().warmth, 2);
    }
}
