use rust_decimal::Decimal;

use super::locale::Locale;
use super::options::{PercentConversionConfig, PercentOptions};
use super::transformer::PercentTransformer;
use crate::error::{OptionsError, TransformationError};
use crate::tainted::Tainted;

/// Validation error attached to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormError {
    message: String,
    cause: TransformationError,
}

impl FormError {
    fn new(message: &str, cause: TransformationError) -> Self {
        Self {
            message: message.to_string(),
            cause,
        }
    }

    /// User-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Underlying conversion failure.
    pub fn cause(&self) -> &TransformationError {
        &self.cause
    }
}

/// Render-ready variables of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    /// Field name
    pub name: String,
    /// Value to put in the input
    pub value: String,
    /// Input type, `"number"` in HTML5 mode and `"text"` otherwise
    pub input_type: &'static str,
    /// Symbol shown next to the input
    pub symbol: Option<String>,
    /// Messages of attached errors
    pub errors: Vec<String>,
}

/// A percent form field.
///
/// Holds the three representations of its value: the model value
/// (`data`), the normalized value (`norm_data`, identical to the model for
/// percents) and the view string. Unparseable submissions do not fail; they
/// leave the model empty and attach a [`FormError`].
///
/// # Examples
///
/// ```
/// use handler_glue::form::{Locale, PercentField, PercentOptions, RoundingMode};
/// use handler_glue::Tainted;
/// use rust_decimal::Decimal;
///
/// let mut field = PercentField::new(
///     "discount",
///     PercentOptions::new().scale(2).rounding_mode(RoundingMode::Ceiling),
///     Locale::english(),
/// ).unwrap();
///
/// field.submit(Some(Tainted::new("1.23456".to_string())));
///
/// assert!(field.is_valid());
/// assert_eq!(field.data(), Some("0.0124".parse::<Decimal>().unwrap()));
/// assert_eq!(field.view_data(), "1.23456");
/// ```
#[derive(Debug, Clone)]
pub struct PercentField {
    name: String,
    config: PercentConversionConfig,
    transformer: PercentTransformer,
    model: Option<Decimal>,
    view: String,
    submitted: bool,
    errors: Vec<FormError>,
}

impl PercentField {
    /// Creates a field from caller options.
    ///
    /// # Errors
    ///
    /// Returns an [`OptionsError`] when the options are invalid.
    pub fn new(
        name: impl Into<String>,
        options: PercentOptions,
        locale: Locale,
    ) -> Result<Self, OptionsError> {
        let config = PercentConversionConfig::from_options(options)?;
        Ok(Self::with_config(name, config, locale))
    }

    /// Creates a field from an already validated config.
    pub fn with_config(
        name: impl Into<String>,
        config: PercentConversionConfig,
        locale: Locale,
    ) -> Self {
        let transformer = PercentTransformer::new(&config, locale);
        Self {
            name: name.into(),
            config,
            transformer,
            model: None,
            view: String::new(),
            submitted: false,
            errors: Vec::new(),
        }
    }

    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configuration the field was built with.
    pub fn config(&self) -> &PercentConversionConfig {
        &self.config
    }

    /// Sets the model value and recomputes the view.
    ///
    /// # Errors
    ///
    /// Returns a [`TransformationError`] when the value cannot be displayed;
    /// the field is left unchanged in that case.
    pub fn set_data(&mut self, data: Option<Decimal>) -> Result<(), TransformationError> {
        let view = self.transformer.to_display(data)?;
        self.model = data;
        self.view = view;
        Ok(())
    }

    /// Submits a raw value.
    ///
    /// `None` and the empty string are replaced by the configured
    /// `empty_data`, which then becomes the view value.
    pub fn submit(&mut self, value: Option<Tainted<String>>) {
        self.submitted = true;
        self.errors.clear();

        let raw = value.map(Tainted::into_inner).unwrap_or_default();
        self.view = if raw.is_empty() {
            self.config.empty_data().to_string()
        } else {
            raw
        };

        match self.transformer.to_model(&self.view) {
            Ok(model) => self.model = model,
            Err(err) => {
                tracing::debug!(field = %self.name, error = %err, "submitted percent rejected");
                self.model = None;
                self.errors
                    .push(FormError::new(self.config.invalid_message(), err));
            }
        }
    }

    /// Model value.
    pub fn data(&self) -> Option<Decimal> {
        self.model
    }

    /// Normalized value.
    pub fn norm_data(&self) -> Option<Decimal> {
        self.model
    }

    /// View value.
    pub fn view_data(&self) -> &str {
        &self.view
    }

    /// Whether [`submit`](Self::submit) was called.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Whether the field was submitted without errors.
    pub fn is_valid(&self) -> bool {
        self.submitted && self.errors.is_empty()
    }

    /// Attached errors.
    pub fn errors(&self) -> &[FormError] {
        &self.errors
    }

    /// Builds the render-ready view.
    pub fn create_view(&self) -> FieldView {
        FieldView {
            name: self.name.clone(),
            value: self.view.clone(),
            input_type: if self.config.html5() { "number" } else { "text" },
            symbol: self.config.symbol().map(str::to_string),
            errors: self.errors.iter().map(|e| e.message().to_string()).collect(),
        }
    }
}
