//! Form and controller glue for request handlers.
//!
//! This crate provides two independent building blocks:
//! - **Percent fields** ([`form`]): parse and format percentage values with
//!   locale-aware decimal separators, an explicit rounding mode and a
//!   fractional or integer model representation
//! - **Argument resolution** ([`controller`]): supply handler parameters
//!   from an explicit [`RequestContext`], including the current principal
//!
//! # Core Types
//!
//! - [`PercentField`](form::PercentField): form field lifecycle around the converter
//! - [`PercentTransformer`](form::PercentTransformer): view/model conversion
//! - [`RequestContext`]: request id, authentication token and routing attributes
//! - [`UserValueResolver`](controller::UserValueResolver): injects the current principal
//! - [`ArgumentResolver`](controller::ArgumentResolver): ordered resolver chain
//!
//! # Examples
//!
//! Option and argument failures both convert into [`Error`], so a handler
//! pipeline can propagate them with `?`.
//!
//! ```
//! use std::sync::Arc;
//! use handler_glue::controller::{
//!     ArgumentResolver, ArgumentValue, HandlerSignature, ParameterDescriptor,
//! };
//! use handler_glue::form::{Locale, PercentField, PercentOptions, RoundingMode};
//! use handler_glue::{AuthToken, InMemoryPrincipal, Principal, RequestContext, Tainted};
//! use rust_decimal::Decimal;
//!
//! // Percent field: "12.5" is stored as 0.125
//! let mut rate = PercentField::new(
//!     "rate",
//!     PercentOptions::new().scale(1).rounding_mode(RoundingMode::HalfUp),
//!     Locale::english(),
//! )?;
//! rate.submit(Some(Tainted::new("12.5".to_string())));
//! assert_eq!(rate.data(), Some("0.125".parse::<Decimal>().unwrap()));
//!
//! // Argument resolution: the current user is injected
//! let user: Arc<dyn Principal> = Arc::new(InMemoryPrincipal::new("alice", "pw"));
//! let ctx = RequestContext::new("req-123").with_token(AuthToken::new(user.clone(), "main"));
//! let handler = HandlerSignature::new("profile")
//!     .param(ParameterDescriptor::new("me").current_user());
//!
//! let args = ArgumentResolver::default().get_arguments(&ctx, &handler)?;
//! assert_eq!(args, vec![ArgumentValue::Principal(user)]);
//! # Ok::<(), handler_glue::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod controller;
mod error;
pub mod form;
mod logging;
mod principal;
mod request;
mod secret;
mod tainted;
pub mod web;

pub use error::{ArgumentError, Error, OptionsError, TransformationError, TransformationErrorKind};
pub use logging::RequestLog;
pub use principal::{InMemoryPrincipal, Principal};
pub use request::{AuthToken, RequestContext};
pub use secret::Secret;
pub use tainted::Tainted;
