//! Web framework integration surface.
//!
//! This module is the boundary between HTTP frameworks and this crate. It
//! maps a framework request to:
//! - a [`RequestContext`](crate::RequestContext) (request id, token, routing
//!   attributes) for controller argument resolution, and
//! - [`FormInputs`], the submitted form fields wrapped in
//!   [`Tainted`](crate::Tainted), for form fields to convert.
//!
//! It contains no framework-specific code. Integrations fill a
//! [`RequestAdapter`] or implement the extraction traits directly.

mod adapter;
mod extract;

pub use adapter::{FormInputs, RequestAdapter};
pub use extract::{ExtractContext, ExtractFormInputs};
