use crate::error::ArgumentError;
use crate::request::RequestContext;

use super::argument::{ArgumentValue, HandlerSignature};
use super::attribute::RequestAttributeValueResolver;
use super::default::DefaultValueResolver;
use super::resolver::ValueResolver;
use super::user::UserValueResolver;

/// Resolves every argument of a handler through an ordered resolver chain.
///
/// For each parameter the resolvers are asked in order; the first one that
/// supports the parameter supplies its value and the others are skipped.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use handler_glue::controller::{
///     ArgumentResolver, ArgumentValue, DeclaredType, DefaultValueResolver, HandlerSignature,
///     ParameterDescriptor, UserValueResolver,
/// };
/// use handler_glue::RequestContext;
///
/// let resolver = ArgumentResolver::new(vec![
///     Box::new(UserValueResolver),
///     Box::new(DefaultValueResolver),
/// ]);
///
/// // fn dashboard(user: Option<Arc<dyn Principal>> = None)
/// let handler = HandlerSignature::new("dashboard").param(
///     ParameterDescriptor::new("user")
///         .typed(DeclaredType::AnyPrincipal)
///         .nullable()
///         .with_default(ArgumentValue::Null),
/// );
///
/// let args = resolver.get_arguments(&RequestContext::new("req-1"), &handler).unwrap();
/// assert_eq!(args, vec![ArgumentValue::Null]);
/// ```
pub struct ArgumentResolver {
    resolvers: Vec<Box<dyn ValueResolver>>,
}

impl ArgumentResolver {
    /// Creates a chain from resolvers in priority order.
    pub fn new(resolvers: Vec<Box<dyn ValueResolver>>) -> Self {
        Self { resolvers }
    }

    /// The standard chain: routing attributes, current user, defaults.
    pub fn with_default_resolvers() -> Self {
        Self::new(vec![
            Box::new(RequestAttributeValueResolver),
            Box::new(UserValueResolver),
            Box::new(DefaultValueResolver),
        ])
    }

    /// Appends a resolver with the lowest priority.
    pub fn push(&mut self, resolver: Box<dyn ValueResolver>) {
        self.resolvers.push(resolver);
    }

    /// Names of the resolvers, in priority order.
    pub fn resolver_names(&self) -> Vec<&'static str> {
        self.resolvers.iter().map(|r| r.name()).collect()
    }

    /// Resolves the arguments of `handler` for `ctx`, in parameter order.
    ///
    /// # Errors
    ///
    /// - [`ArgumentError::MissingArgument`] when no resolver supports a parameter
    /// - [`ArgumentError::ResolverYieldedNothing`] when the chosen resolver yields no value
    /// - [`ArgumentError::TooManyValues`] when it yields several values for a
    ///   non-variadic parameter
    pub fn get_arguments(
        &self,
        ctx: &RequestContext,
        handler: &HandlerSignature,
    ) -> Result<Vec<ArgumentValue>, ArgumentError> {
        let log = ctx.log();
        let mut arguments = Vec::with_capacity(handler.parameters().len());

        for param in handler.parameters() {
            let Some(resolver) = self.resolvers.iter().find(|r| r.supports(ctx, param)) else {
                log.warn(format_args!(
                    "no resolver supports argument \"{}\" of \"{}\"",
                    param.name(),
                    handler.name()
                ));
                return Err(ArgumentError::MissingArgument {
                    handler: handler.name().to_string(),
                    parameter: param.name().to_string(),
                });
            };

            let values: Vec<ArgumentValue> = resolver.resolve(ctx, param).collect();
            match values.len() {
                0 => {
                    return Err(ArgumentError::ResolverYieldedNothing {
                        resolver: resolver.name(),
                        parameter: param.name().to_string(),
                    })
                }
                count if count > 1 && !param.is_variadic() => {
                    return Err(ArgumentError::TooManyValues {
                        resolver: resolver.name(),
                        parameter: param.name().to_string(),
                        count,
                    })
                }
                _ => {}
            }

            log.debug(format_args!(
                "argument \"{}\" of \"{}\" resolved by {}",
                param.name(),
                handler.name(),
                resolver.name()
            ));
            arguments.extend(values);
        }

        Ok(arguments)
    }
}

impl Default for ArgumentResolver {
    fn default() -> Self {
        Self::with_default_resolvers()
    }
}

impl std::fmt::Debug for ArgumentResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgumentResolver")
            .field("resolvers", &self.resolver_names())
            .finish()
    }
}
