//! User record store.
//!
//! The exchange sequencer writes through the [`UserStore`] trait so a real
//! backend can replace the in-memory map without touching the sequencer.
//! The reference deployment's "persistence" was a console print; the
//! in-memory store keeps that observable behavior by logging each upsert.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::UserRecord;

/// Key-value storage for user records, keyed by subject id.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up the record for a subject id.
    async fn get(&self, subject_id: &str) -> Option<UserRecord>;

    /// Insert or replace the record for its subject id.
    async fn upsert(&self, record: UserRecord);
}

/// In-memory store. Concurrent upserts for the same subject id serialize
/// through the write lock.
#[derive(Default)]
pub struct MemoryUserStore {
    records: RwLock<HashMap<String, UserRecord>>,
}

impl MemoryUserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn get(&self, subject_id: &str) -> Option<UserRecord> {
        self.records.read().await.get(subject_id).cloned()
    }

    async fn upsert(&self, record: UserRecord) {
        tracing::info!(
            subject_id = %record.subject_id,
            pages = record.pages.len(),
            "Storing user record"
        );
        self.records.write().await.insert(record.subject_id.clone(), record);
    }
}

impl std::fmt::Debug for MemoryUserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryUserStore").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Page;

    fn record(subject_id: &str, token: &str) -> UserRecord {
        UserRecord {
            subject_id: subject_id.to_string(),
            access_token: token.to_string(),
            pages: vec![Page { id: "1".into(), name: "Page One".into() }],
        }
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let store = MemoryUserStore::new();
        assert!(store.get("nobody").await.is_none());
    }

    #[tokio::test]
    async fn test_upsert_then_get() {
        let store = MemoryUserStore::new();
        store.upsert(record("subject-1", "tok1")).await;

        let stored = store.get("subject-1").await.unwrap();
        assert_eq!(stored.access_token, "tok1");
        assert_eq!(stored.pages.len(), 1);
    }

    #[tokio::test]
    async fn test_upsert_replaces_existing() {
        let store = MemoryUserStore::new();
        store.upsert(record("subject-1", "tok1")).await;
        store.upsert(record("subject-1", "tok2")).await;

        let stored = store.get("subject-1").await.unwrap();
        assert_eq!(stored.access_token, "tok2");
    }
}
