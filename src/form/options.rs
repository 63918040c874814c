use serde::{Deserialize, Serialize};

use super::rounding::{RoundingConfig, RoundingMode};
use crate::error::OptionsError;

/// Largest accepted scale.
///
/// The decimal backend keeps 28 fraction digits and the percent shift
/// consumes two of them.
pub const MAX_SCALE: u32 = 26;

/// Target of the deprecation notice emitted for fields without a rounding mode.
pub const DEPRECATION_TARGET: &str = "handler_glue::deprecation";

/// Notice emitted when `rounding_mode` is not configured.
pub const ROUNDING_MODE_DEPRECATION: &str = "Not configuring the \"rounding_mode\" option is deprecated. \
It will default to \"HALF_UP\" in the next major version.";

const DEFAULT_INVALID_MESSAGE: &str = "Please enter a percentage value.";

/// How the model stores a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentKind {
    /// The model holds a fraction: 12.34 % is stored as `0.1234`.
    #[default]
    Fractional,
    /// The model holds the percentage itself: 12.34 % is stored as `12.34`.
    Integer,
}

/// Caller-supplied options of a percent field.
///
/// Missing keys take their defaults when deserialized, so a field can be
/// configured straight from JSON or TOML:
///
/// ```
/// use handler_glue::form::{PercentKind, PercentOptions, RoundingMode};
///
/// let options: PercentOptions = serde_json::from_str(
///     r#"{ "scale": 2, "rounding_mode": "ceiling", "type": "integer" }"#,
/// ).unwrap();
///
/// assert_eq!(options.scale, 2);
/// assert_eq!(options.rounding_mode, Some(RoundingMode::Ceiling));
/// assert_eq!(options.kind, PercentKind::Integer);
/// assert_eq!(options.symbol.as_deref(), Some("%"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PercentOptions {
    /// Fraction digits kept on the percentage value
    pub scale: u32,
    /// Rounding applied at `scale`; `None` is deprecated
    pub rounding_mode: Option<RoundingMode>,
    /// Render for a numeric HTML5 input
    pub html5: bool,
    /// Model representation
    #[serde(rename = "type")]
    pub kind: PercentKind,
    /// View value substituted when nothing is submitted
    pub empty_data: String,
    /// Symbol shown next to the input; `None` hides it
    pub symbol: Option<String>,
    /// Message attached to the field when the input cannot be parsed
    pub invalid_message: String,
}

impl Default for PercentOptions {
    fn default() -> Self {
        Self {
            scale: 0,
            rounding_mode: None,
            html5: false,
            kind: PercentKind::Fractional,
            empty_data: String::new(),
            symbol: Some("%".to_string()),
            invalid_message: DEFAULT_INVALID_MESSAGE.to_string(),
        }
    }
}

impl PercentOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scale.
    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the rounding mode.
    pub fn rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.rounding_mode = Some(mode);
        self
    }

    /// Enables or disables HTML5 rendering.
    pub fn html5(mut self, html5: bool) -> Self {
        self.html5 = html5;
        self
    }

    /// Sets the model representation.
    pub fn kind(mut self, kind: PercentKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the view value used when nothing is submitted.
    pub fn empty_data(mut self, empty_data: impl Into<String>) -> Self {
        self.empty_data = empty_data.into();
        self
    }

    /// Sets or hides the symbol.
    pub fn symbol(mut self, symbol: Option<&str>) -> Self {
        self.symbol = symbol.map(str::to_string);
        self
    }

    /// Sets the message attached on unparseable input.
    pub fn invalid_message(mut self, message: impl Into<String>) -> Self {
        self.invalid_message = message.into();
        self
    }
}

/// Validated, immutable configuration of one percent field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PercentConversionConfig {
    scale: u32,
    rounding: RoundingConfig,
    kind: PercentKind,
    html5: bool,
    empty_data: String,
    symbol: Option<String>,
    invalid_message: String,
    deprecation: Option<&'static str>,
}

impl PercentConversionConfig {
    /// Validates `options`.
    ///
    /// A missing rounding mode is accepted but emits a deprecation warning
    /// through `tracing` and is recorded on the config.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::ScaleTooLarge`] when `scale` exceeds [`MAX_SCALE`].
    pub fn from_options(options: PercentOptions) -> Result<Self, OptionsError> {
        if options.scale > MAX_SCALE {
            return Err(OptionsError::ScaleTooLarge {
                scale: options.scale,
                max: MAX_SCALE,
            });
        }

        let rounding = RoundingConfig::from(options.rounding_mode);
        let deprecation = if rounding.is_unset() {
            tracing::warn!(target: DEPRECATION_TARGET, "{}", ROUNDING_MODE_DEPRECATION);
            Some(ROUNDING_MODE_DEPRECATION)
        } else {
            None
        };

        Ok(Self {
            scale: options.scale,
            rounding,
            kind: options.kind,
            html5: options.html5,
            empty_data: options.empty_data,
            symbol: options.symbol,
            invalid_message: options.invalid_message,
            deprecation,
        })
    }

    /// Fraction digits kept on the percentage value.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Configured rounding.
    pub fn rounding(&self) -> RoundingConfig {
        self.rounding
    }

    /// Model representation.
    pub fn kind(&self) -> PercentKind {
        self.kind
    }

    /// Whether the field renders for a numeric HTML5 input.
    pub fn html5(&self) -> bool {
        self.html5
    }

    /// View value substituted when nothing is submitted.
    pub fn empty_data(&self) -> &str {
        &self.empty_data
    }

    /// Symbol shown next to the input.
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Message attached on unparseable input.
    pub fn invalid_message(&self) -> &str {
        &self.invalid_message
    }

    /// Deprecation notice raised while building this config, if any.
    pub fn deprecation(&self) -> Option<&'static str> {
        self.deprecation
    }
}
