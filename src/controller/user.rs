use std::iter;

use crate::request::RequestContext;

use super::argument::{ArgumentValue, ParameterDescriptor};
use super::resolver::{ArgumentValues, ValueResolver};

/// Injects the authenticated principal into handler parameters.
///
/// A parameter is supported when the request is authenticated and either
/// - it carries the current-user marker, whatever its declared type, or
/// - its declared type is a principal type that the current principal's
///   runtime type satisfies.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use handler_glue::controller::{
///     ArgumentValue, DeclaredType, ParameterDescriptor, UserValueResolver, ValueResolver,
/// };
/// use handler_glue::{AuthToken, InMemoryPrincipal, Principal, RequestContext};
///
/// let user: Arc<dyn Principal> = Arc::new(InMemoryPrincipal::new("alice", "pw"));
/// let ctx = RequestContext::new("req-1").with_token(AuthToken::new(user.clone(), "main"));
/// let param = ParameterDescriptor::new("user").typed(DeclaredType::AnyPrincipal);
///
/// let resolver = UserValueResolver;
/// assert!(resolver.supports(&ctx, &param));
///
/// let values: Vec<_> = resolver.resolve(&ctx, &param).collect();
/// assert_eq!(values, vec![ArgumentValue::Principal(user)]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UserValueResolver;

impl ValueResolver for UserValueResolver {
    fn name(&self) -> &'static str {
        "user"
    }

    fn supports(&self, ctx: &RequestContext, param: &ParameterDescriptor) -> bool {
        let Some(principal) = ctx.principal() else {
            return false;
        };

        if param.wants_current_user() {
            return true;
        }

        match param.declared_type() {
            Some(declared) if declared.is_principal() => declared.accepts(&**principal),
            _ => false,
        }
    }

    fn resolve<'a>(
        &'a self,
        ctx: &'a RequestContext,
        param: &'a ParameterDescriptor,
    ) -> ArgumentValues<'a> {
        match ctx.principal() {
            Some(principal) => Box::new(iter::once(ArgumentValue::Principal(principal.clone()))),
            None => {
                ctx.log().debug(format_args!(
                    "user resolver asked for \"{}\" without an authenticated principal",
                    param.name()
                ));
                Box::new(iter::empty())
            }
        }
    }
}
