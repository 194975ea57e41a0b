//! Page host — drives decorator lifecycle and page assembly.
//!
//! The host owns the registry and the settings store. Decorators never
//! touch storage themselves; the host loads their settings at startup,
//! persists the settings they produce on admin submission, and collects
//! their fragments at render time.
//!
//! # Submission Flow
//!
//! ```text
//! submit_configuration(fqn, request, form)
//!     │
//!     ├── lookup decorator (HOST_DECORATOR_NOT_FOUND if absent)
//!     ├── store.save(form)          exactly one write per call, no dirty-check
//!     ├── decorator.configure(request, form)
//!     │       └── Err(FormError) → surfaced unmodified, the write stands
//!     └── decorator.init(settings)  live state = accepted settings
//! ```
//!
//! The write comes before validation: the admin form path saves eagerly
//! on every submission, accepted or not. A persisted blob a decorator
//! cannot apply is treated as absent state at the next startup.

use crate::{
    DecoratorRegistry, HostConfig, HostError, LocalFileStore, SettingsRecord, SettingsStore,
    StorageError,
};
use decor_page::{AdminRequest, FormData, PageContext, PageDecorator, PageFragment, Settings};
use decor_types::DecoratorId;

/// Drives registered decorators over a settings store.
///
/// # Concurrency
///
/// Submissions take `&mut self`; rendering takes `&self`. Embedders
/// that serve concurrent traffic wrap the host in
/// `Arc<tokio::sync::RwLock<PageHost<S>>>`: render paths take the read
/// lock, submission paths the write lock.
///
/// # Example
///
/// ```no_run
/// use decor_host::{FooterDecorator, MemoryStore, PageHost};
/// use decor_page::{AdminRequest, FormData};
/// use serde_json::json;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut host = PageHost::new(MemoryStore::new());
/// host.register(Box::new(FooterDecorator::ciborg()))?;
/// host.startup().await?;
///
/// let form = FormData::from_pairs([("footer_html", json!("<p>hi</p>"))]);
/// host.submit_configuration("builtin::ciborg", &AdminRequest::new(), &form)
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct PageHost<S: SettingsStore> {
    registry: DecoratorRegistry,
    store: S,
}

impl<S: SettingsStore> PageHost<S> {
    /// Creates a host over the given settings store.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            registry: DecoratorRegistry::new(),
            store,
        }
    }

    /// Registers a decorator.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::DuplicateDecorator`] if the FQN is taken.
    pub fn register(&mut self, decorator: Box<dyn PageDecorator>) -> Result<(), HostError> {
        let fqn = decorator.id().fqn();
        self.registry.register(decorator)?;
        tracing::info!(decorator = %fqn, "decorator registered");
        Ok(())
    }

    /// Initializes every registered decorator from persisted state.
    ///
    /// Decorators with no saved settings are initialized with `None`
    /// and start from their defaults.
    ///
    /// A persisted blob the decorator cannot apply (left behind by a
    /// rejected submission, or written by an older schema) is logged
    /// and treated as absent state; the decorator starts from defaults.
    ///
    /// # Errors
    ///
    /// Returns the first storage error encountered.
    /// `StorageError::NotFound` is not an error here; it means no
    /// prior saved state.
    pub async fn startup(&mut self) -> Result<(), HostError> {
        let ids: Vec<DecoratorId> = self.registry.iter().map(|d| d.id().clone()).collect();

        for id in ids {
            let settings = match self.store.load(&id).await {
                Ok(record) => Some(record.settings),
                Err(StorageError::NotFound(_)) => None,
                Err(e) => return Err(e.into()),
            };

            if let Some(decorator) = self.registry.get_mut(&id.fqn()) {
                match decorator.init(settings.as_ref()) {
                    Ok(()) => {
                        tracing::debug!(
                            decorator = %id.fqn(),
                            had_saved_state = settings.is_some(),
                            "decorator initialized"
                        );
                    }
                    Err(e) if settings.is_some() => {
                        tracing::warn!(
                            decorator = %id.fqn(),
                            error = %e,
                            "saved settings could not be applied, starting from defaults"
                        );
                        decorator.init(None)?;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }

        Ok(())
    }

    /// Routes an admin form submission to a decorator.
    ///
    /// The submitted form is persisted first, exactly one store write
    /// per call with no dirty-check, and validation runs after the
    /// write. A rejected submission therefore still writes once; the
    /// rejection surfaces as [`HostError::Form`] and live state stays
    /// as it was. [`startup`](Self::startup) treats a persisted blob
    /// the decorator cannot apply as absent state.
    ///
    /// # Errors
    ///
    /// - [`HostError::DecoratorNotFound`] if the FQN is unknown (no write)
    /// - [`HostError::Storage`] if the write fails
    /// - [`HostError::Form`] if the decorator rejects the form
    /// - [`HostError::Decorator`] if re-initialization fails
    pub async fn submit_configuration(
        &mut self,
        fqn: &str,
        request: &AdminRequest,
        form: &FormData,
    ) -> Result<Settings, HostError> {
        let id = self
            .registry
            .get(fqn)
            .map(|d| d.id().clone())
            .ok_or_else(|| HostError::decorator_not_found(fqn))?;

        // Save before validating. The admin form path writes eagerly
        // on every submission.
        let record = SettingsRecord::new(&id, Settings::from_value(form.to_value()));
        self.store.save(&record).await?;

        let decorator = self
            .registry
            .get_mut(fqn)
            .ok_or_else(|| HostError::decorator_not_found(fqn))?;
        let settings = decorator.configure(request, form)?;
        decorator.init(Some(&settings))?;

        tracing::info!(
            decorator = %id.fqn(),
            submitted_by = request.submitted_by.as_deref().unwrap_or("anonymous"),
            "configuration saved"
        );

        Ok(settings)
    }

    /// Collects fragments from all decorators for a page render.
    ///
    /// Fragments appear in registration order. Decorators returning
    /// `None` contribute nothing.
    #[must_use]
    pub fn decorate(&self, page: &PageContext) -> Vec<PageFragment> {
        self.registry.iter().filter_map(|d| d.decorate(page)).collect()
    }

    /// Returns the underlying settings store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns `true` if a decorator with the given FQN is registered.
    #[must_use]
    pub fn contains(&self, fqn: &str) -> bool {
        self.registry.contains(fqn)
    }

    /// Returns the number of registered decorators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Returns `true` if no decorators are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

impl PageHost<LocalFileStore> {
    /// Creates a host from configuration, registering the configured
    /// builtin decorators.
    ///
    /// Unknown decorator names in the config are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns `HostError::Storage` if the settings directory cannot be
    /// created.
    pub fn from_config(config: &HostConfig) -> Result<Self, HostError> {
        let store = LocalFileStore::new(config.settings_dir_or_default())?;
        let mut host = Self::new(store);

        for name in &config.decorators.load {
            match crate::FooterDecorator::by_name(name) {
                Some(decorator) => host.register(Box::new(decorator))?,
                None => {
                    tracing::warn!(name = %name, "unknown builtin decorator, skipping");
                }
            }
        }

        Ok(host)
    }
}
