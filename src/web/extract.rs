//! Extraction boundary traits for web integration.

use crate::request::RequestContext;

use super::FormInputs;

/// Builds the [`RequestContext`] for a framework-specific request.
///
/// Implementations map the framework's request id, authenticated session
/// and routing parameters. They do not resolve handler arguments; that is
/// the [`ArgumentResolver`](crate::controller::ArgumentResolver)'s job.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use handler_glue::web::ExtractContext;
/// use handler_glue::{AuthToken, InMemoryPrincipal, RequestContext};
///
/// struct MyFrameworkRequest {
///     id: String,
///     user: Option<String>,
/// }
///
/// impl ExtractContext for MyFrameworkRequest {
///     fn extract_context(&self) -> RequestContext {
///         let ctx = RequestContext::new(self.id.clone());
///         match &self.user {
///             Some(name) => ctx.with_token(AuthToken::new(
///                 Arc::new(InMemoryPrincipal::new(name.clone(), "")),
///                 "session",
///             )),
///             None => ctx,
///         }
///     }
/// }
/// ```
pub trait ExtractContext {
    /// Builds the per-request context.
    fn extract_context(&self) -> RequestContext;
}

/// Collects submitted form fields as tainted values.
pub trait ExtractFormInputs {
    /// Returns every submitted field, wrapped in `Tainted`.
    fn extract_form_inputs(&self) -> FormInputs;
}
