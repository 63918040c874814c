//! Controller argument resolution.
//!
//! A request handler is described by a [`HandlerSignature`]: its name and
//! the [`ParameterDescriptor`]s of its parameters. The [`ArgumentResolver`]
//! walks those parameters and, for each one, asks an ordered chain of
//! [`ValueResolver`]s for a value.
//!
//! # Resolvers
//!
//! - [`RequestAttributeValueResolver`]: routing attributes by parameter name
//! - [`UserValueResolver`]: the authenticated principal
//! - [`DefaultValueResolver`]: declared defaults, or `Null` for nullable types
//!
//! All resolvers read the [`RequestContext`](crate::RequestContext) they are
//! given. There is no ambient token storage: an unauthenticated context
//! simply has no principal, and a nullable user parameter then falls
//! through to its default.

mod argument;
mod argument_resolver;
mod attribute;
mod default;
mod resolver;
mod user;

pub use argument::{ArgumentValue, DeclaredType, HandlerSignature, ParameterDescriptor};
pub use argument_resolver::ArgumentResolver;
pub use attribute::RequestAttributeValueResolver;
pub use default::DefaultValueResolver;
pub use resolver::{ArgumentValues, ValueResolver};
pub use user::UserValueResolver;
