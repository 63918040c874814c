use std::any::{Any, TypeId};
use std::fmt;

use crate::secret::Secret;

/// An authenticated user or service.
///
/// Implementations are stored as `Arc<dyn Principal>` in the request
/// context. [`as_any`](Principal::as_any) exposes the concrete type so
/// resolvers can check a handler's declared parameter type at runtime.
pub trait Principal: Any + fmt::Debug + Send + Sync {
    /// Unique identifier, e.g. a username.
    fn identifier(&self) -> &str;

    /// Display name.
    fn display_name(&self) -> &str {
        self.identifier()
    }

    /// Granted roles.
    fn roles(&self) -> &[String] {
        &[]
    }

    /// Upcast used for concrete-type checks.
    fn as_any(&self) -> &dyn Any;
}

impl dyn Principal {
    /// Returns `true` if the concrete type behind this principal is `T`.
    pub fn is<T: Principal>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Returns the [`TypeId`] of the concrete type behind this principal.
    pub fn concrete_type_id(&self) -> TypeId {
        self.as_any().type_id()
    }

    /// Downcasts to a concrete principal type.
    pub fn downcast_ref<T: Principal>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// A principal held entirely in memory.
///
/// The password is kept in a [`Secret`] so that debugging a request context
/// never prints it.
///
/// # Examples
///
/// ```
/// use handler_glue::{InMemoryPrincipal, Principal};
///
/// let alice = InMemoryPrincipal::new("alice", "s3cret").with_roles(["ROLE_ADMIN"]);
/// assert_eq!(alice.identifier(), "alice");
/// assert_eq!(alice.roles(), ["ROLE_ADMIN".to_string()]);
/// assert!(!format!("{:?}", alice).contains("s3cret"));
/// ```
#[derive(Debug)]
pub struct InMemoryPrincipal {
    identifier: String,
    display_name: Option<String>,
    password: Secret<String>,
    roles: Vec<String>,
}

impl InMemoryPrincipal {
    /// Creates a principal with no roles.
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: None,
            password: Secret::new(password.into()),
            roles: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Replaces the roles.
    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    /// Stored password.
    pub fn password(&self) -> &Secret<String> {
        &self.password
    }
}

impl Principal for InMemoryPrincipal {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.identifier)
    }

    fn roles(&self) -> &[String] {
        &self.roles
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
