use std::any::{type_name, TypeId};
use std::fmt;
use std::sync::Arc;

use crate::principal::Principal;

/// Type a handler declares for one of its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredType {
    /// Any authenticated principal (`Arc<dyn Principal>`).
    AnyPrincipal,
    /// One concrete principal implementation.
    Concrete {
        /// Type identity checked against the current principal
        id: TypeId,
        /// Type name, for diagnostics
        name: &'static str,
    },
    /// A type unrelated to principals, e.g. `String` or `i64`.
    Named(&'static str),
}

impl DeclaredType {
    /// Declared type for the concrete principal type `T`.
    pub fn of<T: Principal>() -> Self {
        DeclaredType::Concrete {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Whether values of this type can be principals at all.
    pub fn is_principal(&self) -> bool {
        !matches!(self, DeclaredType::Named(_))
    }

    /// Whether `principal` is an instance of this type.
    pub fn accepts(&self, principal: &dyn Principal) -> bool {
        match self {
            DeclaredType::AnyPrincipal => true,
            DeclaredType::Concrete { id, .. } => principal.concrete_type_id() == *id,
            DeclaredType::Named(_) => false,
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclaredType::AnyPrincipal => f.write_str("dyn Principal"),
            DeclaredType::Concrete { name, .. } | DeclaredType::Named(name) => f.write_str(name),
        }
    }
}

/// A value supplied to a handler parameter.
///
/// Principals compare by identity, so two values are equal only when they
/// hold the very same `Arc`.
#[derive(Debug, Clone)]
pub enum ArgumentValue {
    /// No value.
    Null,
    /// The current principal.
    Principal(Arc<dyn Principal>),
    /// Text, e.g. a routing attribute.
    Text(String),
    /// Integer default.
    Integer(i64),
    /// Boolean default.
    Bool(bool),
}

impl ArgumentValue {
    /// Returns the principal, if this value holds one.
    pub fn as_principal(&self) -> Option<&Arc<dyn Principal>> {
        match self {
            ArgumentValue::Principal(p) => Some(p),
            _ => None,
        }
    }
}

impl PartialEq for ArgumentValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ArgumentValue::Null, ArgumentValue::Null) => true,
            (ArgumentValue::Principal(a), ArgumentValue::Principal(b)) => Arc::ptr_eq(a, b),
            (ArgumentValue::Text(a), ArgumentValue::Text(b)) => a == b,
            (ArgumentValue::Integer(a), ArgumentValue::Integer(b)) => a == b,
            (ArgumentValue::Bool(a), ArgumentValue::Bool(b)) => a == b,
            _ => false,
        }
    }
}

/// One declared parameter of a handler.
///
/// Built with chained setters:
///
/// ```
/// use handler_glue::controller::{ArgumentValue, DeclaredType, ParameterDescriptor};
///
/// // fn show(user: Option<Arc<dyn Principal>> = None)
/// let param = ParameterDescriptor::new("user")
///     .typed(DeclaredType::AnyPrincipal)
///     .nullable()
///     .with_default(ArgumentValue::Null);
///
/// assert!(param.is_nullable());
/// assert!(param.has_default());
/// assert!(!param.wants_current_user());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDescriptor {
    name: String,
    declared_type: Option<DeclaredType>,
    wants_current_user: bool,
    nullable: bool,
    default: Option<ArgumentValue>,
    variadic: bool,
}

impl ParameterDescriptor {
    /// Untyped, required parameter.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: None,
            wants_current_user: false,
            nullable: false,
            default: None,
            variadic: false,
        }
    }

    /// Sets the declared type.
    pub fn typed(mut self, declared_type: DeclaredType) -> Self {
        self.declared_type = Some(declared_type);
        self
    }

    /// Marks the parameter as asking for the current user.
    pub fn current_user(mut self) -> Self {
        self.wants_current_user = true;
        self
    }

    /// Allows `Null`.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Sets a default value.
    pub fn with_default(mut self, value: ArgumentValue) -> Self {
        self.default = Some(value);
        self
    }

    /// Marks the parameter as variadic.
    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    /// Parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type, if any.
    pub fn declared_type(&self) -> Option<&DeclaredType> {
        self.declared_type.as_ref()
    }

    /// Whether the parameter carries the current-user marker.
    pub fn wants_current_user(&self) -> bool {
        self.wants_current_user
    }

    /// Whether `Null` is allowed.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Whether a default value is declared.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Declared default value.
    pub fn default_value(&self) -> Option<&ArgumentValue> {
        self.default.as_ref()
    }

    /// Whether the parameter collects any number of values.
    pub fn is_variadic(&self) -> bool {
        self.variadic
    }
}

/// Name and ordered parameters of a request handler.
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerSignature {
    name: String,
    parameters: Vec<ParameterDescriptor>,
}

impl HandlerSignature {
    /// Signature without parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    /// Appends a parameter.
    pub fn param(mut self, parameter: ParameterDescriptor) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Handler name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameters in declaration order.
    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }
}
