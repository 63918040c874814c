//! Request adapter for mapping HTTP requests to crate types.

use std::collections::HashMap;

use crate::form::PercentField;
use crate::request::{AuthToken, RequestContext};
use crate::tainted::Tainted;

use super::{ExtractContext, ExtractFormInputs};

/// Framework-neutral view of an incoming request.
///
/// Framework integrations fill an adapter from their own request type and
/// then extract the [`RequestContext`] for argument resolution and the
/// tainted [`FormInputs`] for form fields.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use handler_glue::web::{ExtractContext, ExtractFormInputs, RequestAdapter};
/// use handler_glue::{AuthToken, InMemoryPrincipal};
///
/// let mut adapter = RequestAdapter::new("req-12345".to_string());
/// let alice = Arc::new(InMemoryPrincipal::new("alice", "pw"));
/// adapter.set_token(Some(AuthToken::new(alice, "main")));
/// adapter.add_path_param("id".to_string(), "42".to_string());
/// adapter.add_form_field("discount".to_string(), "12.5".to_string());
///
/// let ctx = adapter.extract_context();
/// assert_eq!(ctx.attribute("id"), Some("42"));
///
/// let inputs = adapter.extract_form_inputs();
/// assert!(inputs.contains("discount"));
/// ```
#[derive(Debug, Clone)]
pub struct RequestAdapter {
    request_id: String,
    token: Option<AuthToken>,
    path_params: HashMap<String, String>,
    form_fields: HashMap<String, String>,
}

impl RequestAdapter {
    /// Creates an adapter for an anonymous request without inputs.
    pub fn new(request_id: String) -> Self {
        Self {
            request_id,
            token: None,
            path_params: HashMap::new(),
            form_fields: HashMap::new(),
        }
    }

    /// Sets the authentication token established by upstream middleware.
    pub fn set_token(&mut self, token: Option<AuthToken>) {
        self.token = token;
    }

    /// Adds a routing parameter; it becomes a context attribute.
    pub fn add_path_param(&mut self, key: String, value: String) {
        self.path_params.insert(key, value);
    }

    /// Adds a submitted form field.
    pub fn add_form_field(&mut self, key: String, value: String) {
        self.form_fields.insert(key, value);
    }

    /// Returns the request ID.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Returns the token, if present.
    pub fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }
}

impl ExtractContext for RequestAdapter {
    fn extract_context(&self) -> RequestContext {
        let mut ctx = RequestContext::new(self.request_id.clone());
        if let Some(token) = &self.token {
            ctx = ctx.with_token(token.clone());
        }
        for (name, value) in &self.path_params {
            ctx = ctx.with_attribute(name.clone(), value.clone());
        }
        ctx
    }
}

impl ExtractFormInputs for RequestAdapter {
    fn extract_form_inputs(&self) -> FormInputs {
        FormInputs {
            fields: self
                .form_fields
                .iter()
                .map(|(k, v)| (k.clone(), Tainted::new(v.clone())))
                .collect(),
        }
    }
}

/// Submitted form fields, all tainted.
#[derive(Debug, Clone, Default)]
pub struct FormInputs {
    fields: HashMap<String, Tainted<String>>,
}

impl FormInputs {
    /// Whether a field named `name` was submitted.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of submitted fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether nothing was submitted.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Removes and returns the value submitted for `name`.
    pub fn take(&mut self, name: &str) -> Option<Tainted<String>> {
        self.fields.remove(name)
    }

    /// Submits the value named after `field` to it, or `None` when absent.
    pub fn submit_to(&mut self, field: &mut PercentField) {
        let value = self.take(field.name());
        field.submit(value);
    }
}
