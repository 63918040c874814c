//! Integration tests for current-user argument resolution.
//!
//! These tests cover the user resolver on its own and inside a resolver
//! chain, from an explicit request context built at the web boundary.

use std::any::Any;
use std::sync::Arc;

use handler_glue::controller::{
    ArgumentResolver, ArgumentValue, DeclaredType, DefaultValueResolver, HandlerSignature,
    ParameterDescriptor, UserValueResolver, ValueResolver,
};
use handler_glue::web::{ExtractContext, RequestAdapter};
use handler_glue::form::{Locale, PercentField, PercentOptions, RoundingMode};
use handler_glue::{
    ArgumentError, AuthToken, Error, InMemoryPrincipal, Principal, RequestContext, Tainted,
};

/// A principal type that is never the one held by the token.
#[derive(Debug)]
struct MockUser;

impl Principal for MockUser {
    fn identifier(&self) -> &str {
        "mock"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn new_user() -> Arc<dyn Principal> {
    Arc::new(InMemoryPrincipal::new("username", "password"))
}

fn authenticated(user: &Arc<dyn Principal>) -> RequestContext {
    RequestContext::new("req-1").with_token(AuthToken::new(user.clone(), "provider"))
}

#[test]
fn resolve_no_token() {
    let resolver = UserValueResolver;
    let param = ParameterDescriptor::new("foo").typed(DeclaredType::AnyPrincipal);

    assert!(!resolver.supports(&RequestContext::new("req-1"), &param));
}

#[test]
fn resolve_no_user() {
    // The token holds an in-memory user, the parameter wants another type
    let ctx = authenticated(&new_user());
    let param = ParameterDescriptor::new("foo").typed(DeclaredType::of::<MockUser>());

    assert!(!UserValueResolver.supports(&ctx, &param));
}

#[test]
fn resolve_wrong_type() {
    let param = ParameterDescriptor::new("foo");

    assert!(!UserValueResolver.supports(&RequestContext::new("req-1"), &param));
    assert!(!UserValueResolver.supports(&authenticated(&new_user()), &param));
}

#[test]
fn resolve() {
    let user = new_user();
    let ctx = authenticated(&user);
    let param = ParameterDescriptor::new("foo").typed(DeclaredType::AnyPrincipal);

    assert!(UserValueResolver.supports(&ctx, &param));
    let values: Vec<_> = UserValueResolver.resolve(&ctx, &param).collect();
    assert_eq!(values, vec![ArgumentValue::Principal(user)]);
}

#[test]
fn resolve_with_attribute() {
    let user = new_user();
    let ctx = authenticated(&user);
    let param = ParameterDescriptor::new("foo").current_user();

    assert!(UserValueResolver.supports(&ctx, &param));
    let values: Vec<_> = UserValueResolver.resolve(&ctx, &param).collect();
    assert_eq!(values, vec![ArgumentValue::Principal(user)]);
}

#[test]
fn resolve_with_attribute_and_no_user() {
    let param = ParameterDescriptor::new("foo").current_user();

    assert!(!UserValueResolver.supports(&RequestContext::new("req-1"), &param));
}

#[test]
fn integration() {
    let user = new_user();
    let resolver = ArgumentResolver::new(vec![Box::new(UserValueResolver)]);

    // fn handler(user: Arc<dyn Principal>)
    let handler = HandlerSignature::new("handler")
        .param(ParameterDescriptor::new("user").typed(DeclaredType::AnyPrincipal));

    let args = resolver.get_arguments(&authenticated(&user), &handler).unwrap();
    assert_eq!(args, vec![ArgumentValue::Principal(user)]);
}

#[test]
fn integration_no_user() {
    let resolver = ArgumentResolver::new(vec![
        Box::new(UserValueResolver),
        Box::new(DefaultValueResolver),
    ]);

    // fn handler(user: Option<Arc<dyn Principal>> = None)
    let handler = HandlerSignature::new("handler").param(
        ParameterDescriptor::new("user")
            .typed(DeclaredType::AnyPrincipal)
            .nullable()
            .with_default(ArgumentValue::Null),
    );

    let args = resolver
        .get_arguments(&RequestContext::new("req-1"), &handler)
        .unwrap();
    assert_eq!(args, vec![ArgumentValue::Null]);
}

#[test]
fn integration_no_user_without_default_fails() {
    let resolver = ArgumentResolver::new(vec![
        Box::new(UserValueResolver),
        Box::new(DefaultValueResolver),
    ]);
    let handler = HandlerSignature::new("handler")
        .param(ParameterDescriptor::new("user").typed(DeclaredType::AnyPrincipal));

    let err = resolver
        .get_arguments(&RequestContext::new("req-1"), &handler)
        .unwrap_err();
    assert!(matches!(err, ArgumentError::MissingArgument { .. }));
}

#[test]
fn context_from_request_adapter() {
    let user = new_user();
    let mut adapter = RequestAdapter::new("req-web-001".to_string());
    adapter.set_token(Some(AuthToken::new(user.clone(), "session")));
    adapter.add_path_param("id".to_string(), "99".to_string());

    // fn edit(id: String, #[current_user] me, page: i64 = 1)
    let handler = HandlerSignature::new("edit")
        .param(ParameterDescriptor::new("id").typed(DeclaredType::Named("String")))
        .param(ParameterDescriptor::new("me").current_user())
        .param(
            ParameterDescriptor::new("page")
                .typed(DeclaredType::Named("i64"))
                .with_default(ArgumentValue::Integer(1)),
        );

    let args = ArgumentResolver::default()
        .get_arguments(&adapter.extract_context(), &handler)
        .unwrap();

    assert_eq!(
        args,
        vec![
            ArgumentValue::Text("99".to_string()),
            ArgumentValue::Principal(user),
            ArgumentValue::Integer(1),
        ]
    );
    assert_eq!(args[1].as_principal().unwrap().identifier(), "username");
}

/// Resolves the handler arguments and stores a submitted discount.
fn update_discount(ctx: &RequestContext, input: &str) -> Result<PercentField, Error> {
    let handler = HandlerSignature::new("update_discount")
        .param(ParameterDescriptor::new("me").current_user());
    ArgumentResolver::default().get_arguments(ctx, &handler)?;

    let mut field = PercentField::new(
        "discount",
        PercentOptions::new().scale(1).rounding_mode(RoundingMode::HalfUp),
        Locale::english(),
    )?;
    field.submit(Some(Tainted::new(input.to_string())));
    Ok(field)
}

#[test]
fn handler_errors_propagate_through_crate_error() {
    let field = update_discount(&authenticated(&new_user()), "12.5").unwrap();
    assert_eq!(field.data(), Some("0.125".parse().unwrap()));

    let err = update_discount(&RequestContext::new("req-1"), "12.5").unwrap_err();
    assert!(matches!(
        err,
        Error::Argument(ArgumentError::MissingArgument { .. })
    ));
    assert!(err.to_string().contains("update_discount"));
}
