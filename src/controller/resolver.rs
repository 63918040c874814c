use crate::request::RequestContext;

use super::argument::{ArgumentValue, ParameterDescriptor};

/// Values yielded by a resolver for one parameter.
pub type ArgumentValues<'a> = Box<dyn Iterator<Item = ArgumentValue> + 'a>;

/// One stage of the argument resolution chain.
///
/// The chain asks each resolver, in order, whether it
/// [`supports`](ValueResolver::supports) a parameter; the first one that
/// does is asked to [`resolve`](ValueResolver::resolve) it.
///
/// # Contract
///
/// `resolve` is only called after `supports` returned `true` for the same
/// context and parameter. Resolvers read the context and never mutate it.
///
/// # Examples
///
/// ```
/// use handler_glue::controller::{
///     ArgumentValue, ArgumentValues, ParameterDescriptor, ValueResolver,
/// };
/// use handler_glue::RequestContext;
///
/// struct RequestIdResolver;
///
/// impl ValueResolver for RequestIdResolver {
///     fn name(&self) -> &'static str {
///         "request_id"
///     }
///
///     fn supports(&self, _ctx: &RequestContext, param: &ParameterDescriptor) -> bool {
///         param.name() == "request_id"
///     }
///
///     fn resolve<'a>(
///         &'a self,
///         ctx: &'a RequestContext,
///         _param: &'a ParameterDescriptor,
///     ) -> ArgumentValues<'a> {
///         Box::new(std::iter::once(ArgumentValue::Text(ctx.request_id().to_string())))
///     }
/// }
/// ```
pub trait ValueResolver: Send + Sync {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Whether this resolver can supply `param` for `ctx`.
    fn supports(&self, ctx: &RequestContext, param: &ParameterDescriptor) -> bool;

    /// Values for `param`.
    fn resolve<'a>(
        &'a self,
        ctx: &'a RequestContext,
        param: &'a ParameterDescriptor,
    ) -> ArgumentValues<'a>;
}
