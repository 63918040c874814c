use std::iter;

use crate::request::RequestContext;

use super::argument::{ArgumentValue, ParameterDescriptor};
use super::resolver::{ArgumentValues, ValueResolver};

/// Supplies declared defaults, or `Null` for nullable typed parameters.
///
/// Usually the last resolver of a chain, so that optional parameters fall
/// back to their default when nothing more specific applies.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultValueResolver;

impl ValueResolver for DefaultValueResolver {
    fn name(&self) -> &'static str {
        "default"
    }

    fn supports(&self, _ctx: &RequestContext, param: &ParameterDescriptor) -> bool {
        param.has_default()
            || (param.declared_type().is_some() && param.is_nullable() && !param.is_variadic())
    }

    fn resolve<'a>(
        &'a self,
        _ctx: &'a RequestContext,
        param: &'a ParameterDescriptor,
    ) -> ArgumentValues<'a> {
        let value = param
            .default_value()
            .cloned()
            .unwrap_or(ArgumentValue::Null);
        Box::new(iter::once(value))
    }
}
