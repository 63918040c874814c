
use crate::request::RequestContext;

use super::argument::{ArgumentValue, ParameterDescriptor};
use super::resolver::{ArgumentValues, ValueResolver};

/// Supplies routing attributes to parameters of the same name.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestAttributeValueResolver;

impl ValueResolver for RequestAttributeValueResolver {
    fn name(&self) -> &'static str {
        "request_attribute"
    }

    fn supports(&self, ctx: &RequestContext, param: &ParameterDescriptor) -> bool {
        !param.is_variadic() && ctx.attribute(param.name()).is_some()
    }

    fn resolve<'a>(
        &'a self,
        ctx: &'a RequestContext,
        param: &'a ParameterDescriptor,
    ) -> ArgumentValues<'a> {
        Box::new(
            ctx.attribute(param.name())
                .map(|value| ArgumentValue::Text(value.to_string()))
                .into_iter(),
        )
    }
}
