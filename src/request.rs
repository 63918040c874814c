use std::collections::BTreeMap;
use std::sync::Arc;

use crate::logging::RequestLog;
use crate::principal::Principal;

/// The token produced by a successful authentication.
#[derive(Debug, Clone)]
pub struct AuthToken {
    principal: Arc<dyn Principal>,
    provider: String,
}

impl AuthToken {
    /// Creates a token for `principal`, authenticated by `provider`.
    pub fn new(principal: Arc<dyn Principal>, provider: impl Into<String>) -> Self {
        Self {
            principal,
            provider: provider.into(),
        }
    }

    /// The authenticated principal.
    pub fn principal(&self) -> &Arc<dyn Principal> {
        &self.principal
    }

    /// Name of the provider that authenticated the principal.
    pub fn provider(&self) -> &str {
        &self.provider
    }
}

/// Immutable, per-request input to argument resolvers.
///
/// Carries the request id, the authentication token (if any) and the
/// routing attributes. It is passed explicitly to every resolver; nothing
/// is read from global state.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use handler_glue::{AuthToken, InMemoryPrincipal, RequestContext};
///
/// let ctx = RequestContext::new("req-1")
///     .with_token(AuthToken::new(Arc::new(InMemoryPrincipal::new("alice", "pw")), "main"))
///     .with_attribute("id", "42");
///
/// assert_eq!(ctx.principal().map(|p| p.identifier()), Some("alice"));
/// assert_eq!(ctx.attribute("id"), Some("42"));
/// ```
#[derive(Debug, Clone)]
pub struct RequestContext {
    request_id: String,
    token: Option<AuthToken>,
    attributes: BTreeMap<String, String>,
}

impl RequestContext {
    /// Creates an anonymous context with no attributes.
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            token: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Sets the authentication token.
    pub fn with_token(mut self, token: AuthToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Adds a routing attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Request identifier.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Authentication token, if the request is authenticated.
    pub fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    /// The current principal, if any.
    pub fn principal(&self) -> Option<&Arc<dyn Principal>> {
        self.token.as_ref().map(AuthToken::principal)
    }

    /// Routing attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// All routing attributes.
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Logger tagged with this request's id.
    pub fn log(&self) -> RequestLog<'_> {
        RequestLog::new(&self.request_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::principal::InMemoryPrincipal;

    #[test]
    fn anonymous_context_has_no_principal() {
        let ctx = RequestContext::new("req-anon");
        assert_eq!(ctx.request_id(), "req-anon");
        assert!(ctx.token().is_none());
        assert!(ctx.principal().is_none());
        assert!(ctx.attributes().is_empty());
    }

    #[test]
    fn token_exposes_same_principal() {
        let user: Arc<dyn Principal> = Arc::new(InMemoryPrincipal::new("dana", "pw"));
        let ctx = RequestContext::new("req-1").with_token(AuthToken::new(user.clone(), "provider"));

        assert!(Arc::ptr_eq(ctx.principal().unwrap(), &user));
        assert_eq!(ctx.token().unwrap().provider(), "provider");
    }

    #[test]
    fn debug_output_hides_password() {
        let user = Arc::new(InMemoryPrincipal::new("erin", "topsecret"));
        let ctx = RequestContext::new("req-2").with_token(AuthToken::new(user, "main"));
        let out = format!("{:?}", ctx);
        assert!(out.contains("erin"));
        assert!(!out.contains("topsecret"));
    }

    #[test]
    fn log_carries_request_id() {
        let ctx = RequestContext::new("req-log");
        assert_eq!(ctx.log().request_id(), "req-log");
    }
}
