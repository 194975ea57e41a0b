//! Decorator registry — explicit registration, ordered dispatch.
//!
//! Decorators are registered explicitly by the host at startup; there
//! is no discovery mechanism. Registration order is render order.
//!
//! Thread-safe when wrapped in `Arc<std::sync::RwLock<>>` at the
//! embedding level:
//! - render lookups take `&self` (read lock)
//! - `register()` / configure lookups take `&mut self` (write lock)

use crate::HostError;
use decor_page::PageDecorator;

/// Registry of page decorators.
///
/// Holds decorators in registration order and looks them up by fully
/// qualified name. Duplicate FQNs are rejected so that persisted
/// settings are unambiguously keyed.
pub struct DecoratorRegistry {
    decorators: Vec<Box<dyn PageDecorator>>,
}

impl DecoratorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            decorators: Vec::new(),
        }
    }

    /// Registers a decorator.
    ///
    /// Decorators contribute to pages in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::DuplicateDecorator`] if a decorator with
    /// the same fully qualified name is already registered.
    pub fn register(&mut self, decorator: Box<dyn PageDecorator>) -> Result<(), HostError> {
        let fqn = decorator.id().fqn();
        if self.contains(&fqn) {
            return Err(HostError::DuplicateDecorator(fqn));
        }
        self.decorators.push(decorator);
        Ok(())
    }

    /// Unregisters a decorator by FQN. Returns `true` if found and removed.
    pub fn unregister(&mut self, fqn: &str) -> bool {
        let before = self.decorators.len();
        self.decorators.retain(|d| d.id().fqn() != fqn);
        self.decorators.len() < before
    }

    /// Looks up a decorator by FQN.
    #[must_use]
    pub fn get(&self, fqn: &str) -> Option<&dyn PageDecorator> {
        self.decorators
            .iter()
            .find(|d| d.id().fqn() == fqn)
            .map(|d| d.as_ref())
    }

    /// Looks up a decorator by FQN for mutation.
    pub fn get_mut(&mut self, fqn: &str) -> Option<&mut Box<dyn PageDecorator>> {
        self.decorators.iter_mut().find(|d| d.id().fqn() == fqn)
    }

    /// Returns `true` if a decorator with the given FQN is registered.
    #[must_use]
    pub fn contains(&self, fqn: &str) -> bool {
        self.decorators.iter().any(|d| d.id().fqn() == fqn)
    }

    /// Iterates decorators in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn PageDecorator> {
        self.decorators.iter().map(|d| d.as_ref())
    }

    /// Iterates decorators mutably in registration order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn PageDecorator>> {
        self.decorators.iter_mut()
    }

    /// Returns the number of registered decorators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decorators.len()
    }

    /// Returns `true` if no decorators are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decorators.is_empty()
    }
}

impl Default for DecoratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decor_page::{DecoratorError, Settings};
    use decor_types::DecoratorId;

    struct StubDecorator {
        id: DecoratorId,
    }

    impl StubDecorator {
        fn boxed(name: &str) -> Box<dyn PageDecorator> {
            Box::new(Self {
                id: DecoratorId::builtin(name),
            })
        }
    }

    impl PageDecorator for StubDecorator {
        fn id(&self) -> &DecoratorId {
            &self.id
        }

        fn init(&mut self, _settings: Option<&Settings>) -> Result<(), DecoratorError> {
            Ok(())
        }
    }

    #[test]
    fn register_and_lookup() {
        let mut reg = DecoratorRegistry::new();
        reg.register(StubDecorator::boxed("ciborg")).unwrap();
        reg.register(StubDecorator::boxed("lobot")).unwrap();

        assert_eq!(reg.len(), 2);
        assert!(reg.get("builtin::ciborg").is_some());
        assert!(reg.get("builtin::lobot").is_some());
        assert!(reg.get("builtin::unknown").is_none());
    }

    #[test]
    fn duplicate_registration_rejected() {
        let mut reg = DecoratorRegistry::new();
        reg.register(StubDecorator::boxed("ciborg")).unwrap();

        let err = reg
            .register(StubDecorator::boxed("ciborg"))
            .expect_err("duplicate FQN must be rejected");
        assert!(matches!(err, HostError::DuplicateDecorator(_)));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn iteration_preserves_registration_order() {
        let mut reg = DecoratorRegistry::new();
        for name in ["ciborg", "lobot", "banner"] {
            reg.register(StubDecorator::boxed(name)).unwrap();
        }

        let names: Vec<String> = reg.iter().map(|d| d.id().name.clone()).collect();
        assert_eq!(names, vec!["ciborg", "lobot", "banner"]);
    }

    #[test]
    fn unregister() {
        let mut reg = DecoratorRegistry::new();
        reg.register(StubDecorator::boxed("ciborg")).unwrap();

        assert!(reg.unregister("builtin::ciborg"));
        assert!(reg.is_empty());

        assert!(!reg.unregister("builtin::ciborg")); // Already gone
    }

    #[test]
    fn get_mut_allows_reconfiguration() {
        let mut reg = DecoratorRegistry::new();
        reg.register(StubDecorator::boxed("ciborg")).unwrap();

        let deco = reg.get_mut("builtin::ciborg").expect("registered");
        deco.init(None).expect("init with defaults");
    }

    #[test]
    fn empty_registry() {
        let reg = DecoratorRegistry::new();
        assert!(reg.is_empty());
        assert_eq!(reg.len(), 0);
        assert!(!reg.contains("builtin::ciborg"));
    }
}
