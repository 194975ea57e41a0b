//! Local file-based settings storage.
//!
//! Each decorator's settings are one JSON file in a configurable
//! directory, named by the fully qualified name with `::` replaced by
//! `.`:
//!
//! ```text
//! ~/.decor/settings/
//! ├── builtin.ciborg.json
//! ├── builtin.lobot.json
//! └── ...
//! ```

use super::{SettingsMeta, SettingsRecord, SettingsStore, StorageError};
use decor_types::DecoratorId;
use std::path::PathBuf;
use tokio::fs;

/// Local file-based settings store.
///
/// This is the default storage backend, suitable for single-machine use.
///
/// # Features
///
/// - One pretty-printed JSON file per decorator
/// - Atomic writes (write to temp, then rename)
/// - Automatic directory creation
///
/// # Example
///
/// ```no_run
/// use decor_host::{LocalFileStore, SettingsRecord, SettingsStore};
/// use decor_page::Settings;
/// use decor_types::DecoratorId;
/// use std::path::PathBuf;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = LocalFileStore::new(PathBuf::from("~/.decor/settings"))?;
///
/// // Save a decorator's settings
/// let id = DecoratorId::builtin("ciborg");
/// let record = SettingsRecord::new(&id, Settings::default());
/// store.save(&record).await?;
///
/// // List persisted records
/// let records = store.list().await?;
/// println!("Found {} records", records.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    /// Base directory for settings files.
    base_path: PathBuf,
}

impl LocalFileStore {
    /// Creates a new local file store.
    ///
    /// The directory will be created if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::DirectoryCreation` if the directory cannot be created.
    pub fn new(base_path: PathBuf) -> Result<Self, StorageError> {
        // Expand ~ to home directory
        let expanded = expand_tilde(&base_path);

        // Create directory if needed (synchronously for constructor)
        if !expanded.exists() {
            std::fs::create_dir_all(&expanded)
                .map_err(|e| StorageError::directory_creation(&expanded, e))?;
        }

        Ok(Self {
            base_path: expanded,
        })
    }

    /// Returns the base path.
    #[must_use]
    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }

    /// Returns the file name stem for a fully qualified name.
    ///
    /// `::` is not portable in file names, so `builtin::ciborg` becomes
    /// `builtin.ciborg`.
    fn file_stem(fqn: &str) -> String {
        fqn.replace("::", ".")
    }

    /// Returns the settings file path for a fully qualified name.
    fn settings_path(&self, fqn: &str) -> PathBuf {
        self.base_path
            .join(format!("{}.json", Self::file_stem(fqn)))
    }

    /// Returns a temporary file path for atomic writes.
    fn temp_path(&self, fqn: &str) -> PathBuf {
        self.base_path
            .join(format!(".{}.json.tmp", Self::file_stem(fqn)))
    }
}

impl SettingsStore for LocalFileStore {
    async fn save(&self, record: &SettingsRecord) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(record)?;

        let path = self.settings_path(&record.decorator);
        let temp_path = self.temp_path(&record.decorator);

        // Write to temp file first (atomic write pattern)
        fs::write(&temp_path, &json).await?;

        // Rename to final path (atomic on most filesystems)
        fs::rename(&temp_path, &path).await?;

        Ok(())
    }

    async fn load(&self, id: &DecoratorId) -> Result<SettingsRecord, StorageError> {
        let path = self.settings_path(&id.fqn());

        if !path.exists() {
            return Err(StorageError::not_found(id.fqn()));
        }

        let json = fs::read_to_string(&path).await?;
        let record = serde_json::from_str(&json)?;

        Ok(record)
    }

    async fn list(&self) -> Result<Vec<SettingsMeta>, StorageError> {
        let mut records = Vec::new();
        let mut entries = fs::read_dir(&self.base_path).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();

            // Skip non-JSON files and temp files
            if path.extension() != Some(std::ffi::OsStr::new("json")) {
                continue;
            }
            if path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with('.'))
            {
                continue;
            }

            // Try to load the record
            if let Ok(json) = fs::read_to_string(&path).await {
                if let Ok(record) = serde_json::from_str::<SettingsRecord>(&json) {
                    records.push(SettingsMeta::from_record(&record));
                }
            }
        }

        // Sort by updated_at descending (most recent first)
        records.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        Ok(records)
    }

    async fn delete(&self, id: &DecoratorId) -> Result<(), StorageError> {
        let path = self.settings_path(&id.fqn());

        if !path.exists() {
            return Err(StorageError::not_found(id.fqn()));
        }

        fs::remove_file(&path).await?;
        Ok(())
    }

    async fn exists(&self, id: &DecoratorId) -> Result<bool, StorageError> {
        let path = self.settings_path(&id.fqn());
        Ok(path.exists())
    }
}

/// Expands `~` to the user's home directory.
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(rest) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
    }
    path.to_path_buf()
}

/// Returns the default settings storage path.
#[must_use]
pub fn default_settings_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".decor")
        .join("settings")
}

#[cfg(test)]
mod tests {
    use super::*;
    use decor_page::Settings;
    use serde_json::json;
    use tempfile::TempDir;

    fn test_store() -> (LocalFileStore, TempDir) {
        let temp = TempDir::new().unwrap();
        let store = LocalFileStore::new(temp.path().to_path_buf()).unwrap();
        (store, temp)
    }

    fn record_for(name: &str, content: serde_json::Value) -> SettingsRecord {
        SettingsRecord::new(&DecoratorId::builtin(name), Settings::from_value(content))
    }

    #[tokio::test]
    async fn save_and_load() {
        let (store, _temp) = test_store();

        let record = record_for("ciborg", json!({"footer_html": "<p>hi</p>"}));
        store.save(&record).await.unwrap();

        let loaded = store.load(&DecoratorId::builtin("ciborg")).await.unwrap();
        assert_eq!(loaded.decorator, "builtin::ciborg");
        assert_eq!(loaded.settings.content["footer_html"], "<p>hi</p>");
    }

    #[tokio::test]
    async fn load_not_found() {
        let (store, _temp) = test_store();

        let result = store.load(&DecoratorId::builtin("nonexistent")).await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn save_overwrites() {
        let (store, _temp) = test_store();
        let id = DecoratorId::builtin("ciborg");

        store
            .save(&record_for("ciborg", json!({"footer_html": "old"})))
            .await
            .unwrap();
        store
            .save(&record_for("ciborg", json!({"footer_html": "new"})))
            .await
            .unwrap();

        let loaded = store.load(&id).await.unwrap();
        assert_eq!(loaded.settings.content["footer_html"], "new");
    }

    #[tokio::test]
    async fn list_records() {
        let (store, _temp) = test_store();

        for name in ["ciborg", "lobot", "banner"] {
            store.save(&record_for(name, json!({}))).await.unwrap();
            tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        }

        let records = store.list().await.unwrap();
        assert_eq!(records.len(), 3);

        // Should be sorted by updated_at descending
        assert!(records[0].updated_at >= records[1].updated_at);
    }

    #[tokio::test]
    async fn delete_record() {
        let (store, _temp) = test_store();
        let id = DecoratorId::builtin("ciborg");

        store.save(&record_for("ciborg", json!({}))).await.unwrap();
        assert!(store.exists(&id).await.unwrap());

        store.delete(&id).await.unwrap();
        assert!(!store.exists(&id).await.unwrap());
    }

    #[tokio::test]
    async fn delete_not_found() {
        let (store, _temp) = test_store();

        let result = store.delete(&DecoratorId::builtin("nonexistent")).await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn states_are_independent() {
        let (store, _temp) = test_store();

        store
            .save(&record_for("ciborg", json!({"footer_html": "<p>ciborg</p>"})))
            .await
            .unwrap();
        store
            .save(&record_for("lobot", json!({"footer_html": "<p>lobot</p>"})))
            .await
            .unwrap();

        let ciborg = store.load(&DecoratorId::builtin("ciborg")).await.unwrap();
        let lobot = store.load(&DecoratorId::builtin("lobot")).await.unwrap();
        assert_eq!(ciborg.settings.content["footer_html"], "<p>ciborg</p>");
        assert_eq!(lobot.settings.content["footer_html"], "<p>lobot</p>");
    }

    #[test]
    fn expand_tilde_with_home() {
        let path = PathBuf::from("~/test/path");
        let expanded = expand_tilde(&path);

        if dirs::home_dir().is_some() {
            assert!(!expanded.to_str().unwrap().starts_with("~/"));
        }
    }

    #[test]
    fn expand_tilde_without_tilde() {
        let path = PathBuf::from("/absolute/path");
        let expanded = expand_tilde(&path);
        assert_eq!(expanded, path);
    }
}
