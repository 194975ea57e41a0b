//! Settings persistence.
//!
//! The [`SettingsStore`] trait defines the interface for decorator
//! settings persistence. This allows pluggable storage backends
//! (local file, in-memory for tests).
//!
//! Each decorator has one persisted record, keyed by its fully
//! qualified name. The host performs exactly one `save` per
//! configuration submission, before validation.

mod error;
mod local;
mod memory;

pub use error::StorageError;
pub use local::{default_settings_path, LocalFileStore};
pub use memory::MemoryStore;

use chrono::{DateTime, Utc};
use decor_page::Settings;
use decor_types::DecoratorId;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Settings storage abstraction.
///
/// Implementations must be thread-safe (`Send + Sync`) for use across
/// async tasks.
///
/// # Design Principles
///
/// - **Async**: All operations are async for I/O efficiency
/// - **Error Handling**: Returns `StorageError` for consistent error handling
/// - **One record per decorator**: keyed by fully qualified name
///
/// # Example
///
/// ```no_run
/// use decor_host::{SettingsRecord, SettingsStore, StorageError};
///
/// async fn persist(
///     store: &impl SettingsStore,
///     record: &SettingsRecord,
/// ) -> Result<(), StorageError> {
///     store.save(record).await?;
///     println!("Saved settings for {}", record.decorator);
///     Ok(())
/// }
/// ```
pub trait SettingsStore: Send + Sync {
    /// Saves a settings record.
    ///
    /// If a record for the same decorator exists, it is overwritten.
    /// Every call performs a write; callers must not dirty-check.
    fn save(
        &self,
        record: &SettingsRecord,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Loads the settings record for a decorator.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if no settings were ever saved
    /// for this decorator.
    fn load(
        &self,
        id: &DecoratorId,
    ) -> impl Future<Output = Result<SettingsRecord, StorageError>> + Send;

    /// Lists metadata for all persisted records.
    fn list(&self) -> impl Future<Output = Result<Vec<SettingsMeta>, StorageError>> + Send;

    /// Deletes the settings record for a decorator.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if no record exists.
    fn delete(&self, id: &DecoratorId) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Checks whether a decorator has persisted settings.
    fn exists(&self, id: &DecoratorId) -> impl Future<Output = Result<bool, StorageError>> + Send;
}

/// Persisted settings for one decorator.
///
/// This is the unit of storage: the decorator's fully qualified name,
/// the last write time, and the settings blob itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsRecord {
    /// Fully qualified decorator name (`namespace::name`).
    pub decorator: String,

    /// Last write timestamp.
    pub updated_at: DateTime<Utc>,

    /// The settings blob.
    pub settings: Settings,
}

impl SettingsRecord {
    /// Creates a record for the given decorator, stamped now.
    #[must_use]
    pub fn new(id: &DecoratorId, settings: Settings) -> Self {
        Self {
            decorator: id.fqn(),
            updated_at: Utc::now(),
            settings,
        }
    }
}

/// Record metadata for listing.
///
/// Lightweight representation for display. Use [`SettingsStore::load`]
/// to get the full [`SettingsRecord`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsMeta {
    /// Fully qualified decorator name.
    pub decorator: String,

    /// Last write timestamp.
    pub updated_at: DateTime<Utc>,
}

impl SettingsMeta {
    /// Creates metadata from a full record.
    pub fn from_record(record: &SettingsRecord) -> Self {
        Self {
            decorator: record.decorator.clone(),
            updated_at: record.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_keyed_by_fqn() {
        let id = DecoratorId::builtin("ciborg");
        let record = SettingsRecord::new(&id, Settings::default());
        assert_eq!(record.decorator, "builtin::ciborg");
    }

    #[test]
    fn meta_from_record() {
        let id = DecoratorId::builtin("lobot");
        let record = SettingsRecord::new(
            &id,
            Settings::from_value(json!({"footer_html": "<p>x</p>"})),
        );
        let meta = SettingsMeta::from_record(&record);
        assert_eq!(meta.decorator, record.decorator);
        assert_eq!(meta.updated_at, record.updated_at);
    }

    #[test]
    fn record_serde_round_trip() {
        let id = DecoratorId::builtin("ciborg");
        let record = SettingsRecord::new(&id, Settings::from_value(json!({"enabled": true})));

        let json = serde_json::to_string(&record).expect("serialize");
        let back: SettingsRecord = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(back.decorator, record.decorator);
        assert_eq!(back.settings, record.settings);
    }
}
