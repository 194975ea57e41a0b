//! Identifier types for Decor.
//!
//! Decorator identity is UUID-based so persisted state can be keyed
//! reliably across processes and machines.

use serde::{Deserialize, Serialize};
use uuid::{uuid, Uuid};

/// Decor namespace UUID for deterministic UUID v5 generation.
///
/// This UUID is used as the namespace for generating deterministic
/// UUIDs for builtin decorators via UUID v5 (SHA-1 based).
const DECOR_NAMESPACE: Uuid = uuid!("6a9f02c7-58d4-4be1-a4c3-90f1d7e25b8a");

/// Identifier for a page decorator.
///
/// A decorator is a host-driven extension that contributes content to
/// rendered pages and carries its own persisted configuration. Examples:
///
/// - `builtin::ciborg` - CI footer decoration
/// - `builtin::lobot` - CI footer decoration (independent state)
/// - `plugin::banner` - user-defined extensions
///
/// # UUID Strategy
///
/// - **Builtin decorators**: Use UUID v5 (deterministic from name)
/// - **Custom decorators**: Use UUID v4 (random)
///
/// Deterministic UUIDs give builtin decorators a stable identity across
/// restarts, so the host can key persisted settings by decorator and
/// reload them on startup.
///
/// # Equality Semantics
///
/// `PartialEq` compares all fields including UUID. For FQN-only
/// comparison (ignoring UUID), use [`fqn_eq`](Self::fqn_eq).
///
/// # Example
///
/// ```
/// use decor_types::DecoratorId;
///
/// // Builtin: deterministic UUID
/// let c1 = DecoratorId::builtin("ciborg");
/// let c2 = DecoratorId::builtin("ciborg");
/// assert_eq!(c1, c2);      // Same UUID, same decorator
///
/// // Custom: random UUID per instance
/// let p1 = DecoratorId::new("plugin", "banner");
/// let p2 = DecoratorId::new("plugin", "banner");
/// assert_ne!(p1, p2);      // Different UUIDs
/// assert!(p1.fqn_eq(&p2)); // But same FQN
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecoratorId {
    /// Globally unique identifier.
    pub uuid: Uuid,
    /// Namespace (e.g., "builtin", "plugin").
    pub namespace: String,
    /// Decorator name within namespace.
    pub name: String,
}

impl DecoratorId {
    /// Creates a new [`DecoratorId`] with a random UUID v4.
    ///
    /// Use this for custom/plugin decorators where each instance
    /// should have a unique identity.
    ///
    /// # Example
    ///
    /// ```
    /// use decor_types::DecoratorId;
    ///
    /// let plugin = DecoratorId::new("plugin", "banner");
    /// assert_eq!(plugin.namespace, "plugin");
    /// assert_eq!(plugin.name, "banner");
    /// assert_eq!(plugin.fqn(), "plugin::banner");
    /// ```
    #[must_use]
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Creates a builtin decorator ID with a deterministic UUID v5.
    ///
    /// The UUID is derived from the Decor namespace UUID and the
    /// decorator name using SHA-1. This ensures:
    ///
    /// - Same name always produces same UUID
    /// - Different names produce different UUIDs
    /// - UUIDs are consistent across processes/machines
    ///
    /// # Example
    ///
    /// ```
    /// use decor_types::DecoratorId;
    ///
    /// let c1 = DecoratorId::builtin("ciborg");
    /// let c2 = DecoratorId::builtin("ciborg");
    /// let lobot = DecoratorId::builtin("lobot");
    ///
    /// assert_eq!(c1.uuid, c2.uuid);    // Same name = same UUID
    /// assert_ne!(c1.uuid, lobot.uuid); // Different name = different UUID
    /// assert!(c1.is_builtin());
    /// ```
    #[must_use]
    pub fn builtin(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            uuid: Uuid::new_v5(&DECOR_NAMESPACE, name.as_bytes()),
            namespace: "builtin".to_string(),
            name,
        }
    }

    /// Returns the fully qualified name in `namespace::name` format.
    ///
    /// # Example
    ///
    /// ```
    /// use decor_types::DecoratorId;
    ///
    /// let id = DecoratorId::builtin("ciborg");
    /// assert_eq!(id.fqn(), "builtin::ciborg");
    /// ```
    #[must_use]
    pub fn fqn(&self) -> String {
        format!("{}::{}", self.namespace, self.name)
    }

    /// Compares two [`DecoratorId`]s by FQN only, ignoring UUID.
    ///
    /// Useful when checking whether two instances represent the same
    /// logical decorator.
    ///
    /// # Example
    ///
    /// ```
    /// use decor_types::DecoratorId;
    ///
    /// let p1 = DecoratorId::new("plugin", "banner");
    /// let p2 = DecoratorId::new("plugin", "banner");
    ///
    /// assert_ne!(p1, p2);      // Different UUIDs
    /// assert!(p1.fqn_eq(&p2)); // Same FQN
    /// ```
    #[must_use]
    pub fn fqn_eq(&self, other: &Self) -> bool {
        self.namespace == other.namespace && self.name == other.name
    }

    /// Checks if this decorator matches the given namespace and name.
    ///
    /// # Example
    ///
    /// ```
    /// use decor_types::DecoratorId;
    ///
    /// let id = DecoratorId::builtin("ciborg");
    ///
    /// assert!(id.matches("builtin", "ciborg"));
    /// assert!(!id.matches("builtin", "lobot"));
    /// ```
    #[must_use]
    pub fn matches(&self, namespace: &str, name: &str) -> bool {
        self.namespace == namespace && self.name == name
    }

    /// Returns `true` if this is a builtin decorator.
    ///
    /// # Example
    ///
    /// ```
    /// use decor_types::DecoratorId;
    ///
    /// let builtin = DecoratorId::builtin("ciborg");
    /// let plugin = DecoratorId::new("plugin", "banner");
    ///
    /// assert!(builtin.is_builtin());
    /// assert!(!plugin.is_builtin());
    /// ```
    #[must_use]
    pub fn is_builtin(&self) -> bool {
        self.namespace == "builtin"
    }
}

impl std::fmt::Display for DecoratorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::{}@{}", self.namespace, self.name, self.uuid)
    }
}

// Tests are in lib.rs as integration tests for public API
