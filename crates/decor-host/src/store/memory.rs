//! In-memory settings storage.
//!
//! Useful for tests and ephemeral hosts. Tracks write counts per
//! decorator so tests can assert the one-write-per-submission contract.

use super::{SettingsMeta, SettingsRecord, SettingsStore, StorageError};
use decor_types::DecoratorId;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory settings store.
///
/// Records live in a `HashMap` keyed by fully qualified name. Nothing
/// survives process exit.
///
/// # Write Counting
///
/// Every `save` increments a per-decorator counter, observable via
/// [`write_count`](Self::write_count) and
/// [`write_count_for`](Self::write_count_for). The host writes
/// unconditionally on every accepted submission, so tests can assert
/// exact counts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<String, SettingsRecord>,
    write_counts: HashMap<String, usize>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the inner lock, recovering from poisoning.
    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Returns the total number of saves performed.
    pub fn write_count(&self) -> usize {
        self.lock().write_counts.values().sum()
    }

    /// Returns the number of saves performed for a decorator.
    pub fn write_count_for(&self, id: &DecoratorId) -> usize {
        self.lock().write_counts.get(&id.fqn()).copied().unwrap_or(0)
    }
}

impl SettingsStore for MemoryStore {
    async fn save(&self, record: &SettingsRecord) -> Result<(), StorageError> {
        let mut inner = self.lock();

        *inner
            .write_counts
            .entry(record.decorator.clone())
            .or_insert(0) += 1;
        inner
            .records
            .insert(record.decorator.clone(), record.clone());

        Ok(())
    }

    async fn load(&self, id: &DecoratorId) -> Result<SettingsRecord, StorageError> {
        let inner = self.lock();

        inner
            .records
            .get(&id.fqn())
            .cloned()
            .ok_or_else(|| StorageError::not_found(id.fqn()))
    }

    async fn list(&self) -> Result<Vec<SettingsMeta>, StorageError> {
        let inner = self.lock();

        let mut metas: Vec<SettingsMeta> = inner
            .records
            .values()
            .map(SettingsMeta::from_record)
            .collect();
        metas.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        Ok(metas)
    }

    async fn delete(&self, id: &DecoratorId) -> Result<(), StorageError> {
        let mut inner = self.lock();

        inner
            .records
            .remove(&id.fqn())
            .map(|_| ())
            .ok_or_else(|| StorageError::not_found(id.fqn()))
    }

    async fn exists(&self, id: &DecoratorId) -> Result<bool, StorageError> {
        let inner = self.lock();

        Ok(inner.records.contains_key(&id.fqn()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decor_page::Settings;
    use serde_json::json;

    fn record_for(name: &str, content: serde_json::Value) -> SettingsRecord {
        SettingsRecord::new(&DecoratorId::builtin(name), Settings::from_value(content))
    }

    #[tokio::test]
    async fn save_and_load() {
        let store = MemoryStore::new();

        store
            .save(&record_for("ciborg", json!({"footer_html": "<p>hi</p>"})))
            .await
            .unwrap();

        let loaded = store.load(&DecoratorId::builtin("ciborg")).await.unwrap();
        assert_eq!(loaded.settings.content["footer_html"], "<p>hi</p>");
    }

    #[tokio::test]
    async fn load_not_found() {
        let store = MemoryStore::new();
        let result = store.load(&DecoratorId::builtin("nonexistent")).await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn counts_every_write() {
        let store = MemoryStore::new();
        let id = DecoratorId::builtin("ciborg");

        // Identical content saved twice still counts two writes
        let record = record_for("ciborg", json!({"footer_html": "same"}));
        store.save(&record).await.unwrap();
        store.save(&record).await.unwrap();

        assert_eq!(store.write_count_for(&id), 2);
        assert_eq!(store.write_count(), 2);
    }

    #[tokio::test]
    async fn counts_are_per_decorator() {
        let store = MemoryStore::new();

        store.save(&record_for("ciborg", json!({}))).await.unwrap();
        store.save(&record_for("lobot", json!({}))).await.unwrap();
        store.save(&record_for("lobot", json!({}))).await.unwrap();

        assert_eq!(store.write_count_for(&DecoratorId::builtin("ciborg")), 1);
        assert_eq!(store.write_count_for(&DecoratorId::builtin("lobot")), 2);
        assert_eq!(store.write_count(), 3);
    }

    #[tokio::test]
    async fn delete_and_exists() {
        let store = MemoryStore::new();
        let id = DecoratorId::builtin("ciborg");

        store.save(&record_for("ciborg", json!({}))).await.unwrap();
        assert!(store.exists(&id).await.unwrap());

        store.delete(&id).await.unwrap();
        assert!(!store.exists(&id).await.unwrap());

        let result = store.delete(&id).await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn list_records() {
        let store = MemoryStore::new();

        store.save(&record_for("ciborg", json!({}))).await.unwrap();
        store.save(&record_for("lobot", json!({}))).await.unwrap();

        let metas = store.list().await.unwrap();
        assert_eq!(metas.len(), 2);
    }
}
