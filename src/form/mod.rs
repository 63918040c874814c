//! Percent form field.
//!
//! A percent field shows a percentage to the user (`"12.34"`) and stores
//! either the fraction (`0.1234`) or the percentage itself. Submitted
//! values are parsed with the field's locale, rounded on the percentage
//! value at the configured scale, then converted to the model form.
//!
//! # Rounding mode transition
//!
//! Fields built without a rounding mode still work but emit a deprecation
//! warning. Submitted values are then stored exactly as typed, while display
//! rounds half-up. Configure [`PercentOptions::rounding_mode`] to opt into
//! the explicit behaviour.

mod field;
mod locale;
mod options;
mod rounding;
mod transformer;

pub use field::{FieldView, FormError, PercentField};
pub use locale::Locale;
pub use options::{
    PercentConversionConfig, PercentKind, PercentOptions, DEPRECATION_TARGET, MAX_SCALE,
    ROUNDING_MODE_DEPRECATION,
};
pub use rounding::{RoundingConfig, RoundingMode};
pub use transformer::PercentTransformer;
