use rust_decimal::Decimal;

use super::locale::Locale;
use super::options::{PercentConversionConfig, PercentKind};
use super::rounding::RoundingConfig;
use crate::error::{TransformationError, TransformationErrorKind};

// Trimmed from both ends of submitted values, including the no-break space.
const TRIMMED: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B', '\u{a0}'];

/// Converts percent values between their model and view form.
///
/// The view form is the percentage as typed by a user (`"12.34"`); the
/// model form is either the fraction (`0.1234`) or the percentage itself,
/// depending on [`PercentKind`]. Rounding always happens on the percentage
/// value, before the division by 100.
///
/// # Examples
///
/// ```
/// use handler_glue::form::{
///     Locale, PercentConversionConfig, PercentOptions, PercentTransformer, RoundingMode,
/// };
/// use rust_decimal::Decimal;
///
/// let config = PercentConversionConfig::from_options(
///     PercentOptions::new().scale(2).rounding_mode(RoundingMode::Ceiling),
/// ).unwrap();
/// let transformer = PercentTransformer::new(&config, Locale::english());
///
/// let model = transformer.to_model("1.23456").unwrap();
/// assert_eq!(model, Some("0.0124".parse::<Decimal>().unwrap()));
/// assert_eq!(transformer.to_display(model).unwrap(), "1.24");
/// ```
#[derive(Debug, Clone)]
pub struct PercentTransformer {
    scale: u32,
    rounding: RoundingConfig,
    kind: PercentKind,
    html5: bool,
    locale: Locale,
}

impl PercentTransformer {
    /// Creates a transformer for `config`, formatting for `locale`.
    ///
    /// In HTML5 mode the locale is ignored and values use the
    /// machine-readable `en` form.
    pub fn new(config: &PercentConversionConfig, locale: Locale) -> Self {
        let locale = if config.html5() {
            Locale::english()
        } else {
            locale
        };
        Self {
            scale: config.scale(),
            rounding: config.rounding(),
            kind: config.kind(),
            html5: config.html5(),
            locale,
        }
    }

    /// Locale used for parsing and formatting.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Parses a view string into a model value.
    ///
    /// Empty input yields `Ok(None)`. With an explicit rounding mode the
    /// percentage is rounded at the configured scale; without one it is kept
    /// as submitted.
    ///
    /// # Errors
    ///
    /// Returns a [`TransformationError`] when `view` is not a number in the
    /// transformer's locale.
    pub fn to_model(&self, view: &str) -> Result<Option<Decimal>, TransformationError> {
        let Some(percent) = self.parse(view)? else {
            return Ok(None);
        };

        let rounded = match self.rounding.submit_mode() {
            Some(mode) => mode.round(percent, self.scale),
            None => percent,
        };

        Ok(Some(match self.kind {
            PercentKind::Fractional => rounded / Decimal::ONE_HUNDRED,
            PercentKind::Integer => rounded,
        }))
    }

    /// Formats a model value for display.
    ///
    /// `None` yields an empty string. The output always carries exactly
    /// `scale` fraction digits and never uses grouping.
    ///
    /// # Errors
    ///
    /// Returns [`TransformationErrorKind::Overflow`] when a fractional model
    /// value is too large to be expressed as a percentage, or when the value
    /// cannot carry `scale` fraction digits.
    pub fn to_display(&self, model: Option<Decimal>) -> Result<String, TransformationError> {
        let Some(model) = model else {
            return Ok(String::new());
        };

        let percent = match self.kind {
            PercentKind::Fractional => model.checked_mul(Decimal::ONE_HUNDRED).ok_or_else(|| {
                TransformationError::new(
                    TransformationErrorKind::Overflow,
                    "value is too large to be shown as a percentage",
                )
            })?,
            PercentKind::Integer => model,
        };

        let mut rounded = self.rounding.display_mode().round(percent, self.scale);
        rounded.rescale(self.scale);
        // rescale silently settles for fewer digits when the mantissa is full
        if rounded.scale() != self.scale {
            return Err(TransformationError::new(
                TransformationErrorKind::Overflow,
                "value has too many digits to show at the configured scale",
            ));
        }
        if rounded.is_zero() {
            rounded.set_sign_positive(true);
        }

        let formatted = rounded.to_string();
        let separator = self.locale.decimal_separator();
        if separator == '.' {
            Ok(formatted)
        } else {
            Ok(formatted.replace('.', &separator.to_string()))
        }
    }

    fn parse(&self, view: &str) -> Result<Option<Decimal>, TransformationError> {
        let value = view.trim_matches(TRIMMED);
        if value.is_empty() {
            return Ok(None);
        }
        if value.eq_ignore_ascii_case("nan") {
            return Err(TransformationError::new(
                TransformationErrorKind::NotANumber,
                "NaN is not a valid percentage",
            ));
        }

        let separator = self.locale.decimal_separator();
        // Outside HTML5 a dot is accepted even when the locale uses a comma.
        let accepts_dot = !self.html5;

        let mut negative = false;
        let mut integer = String::new();
        let mut fraction = String::new();
        let mut in_fraction = false;

        for (i, c) in value.chars().enumerate() {
            match c {
                '-' | '+' if i == 0 => negative = c == '-',
                '0'..='9' if in_fraction => fraction.push(c),
                '0'..='9' => integer.push(c),
                c if (c == separator || (accepts_dot && c == '.')) && !in_fraction => {
                    in_fraction = true
                }
                _ if integer.is_empty() && fraction.is_empty() => {
                    return Err(TransformationError::new(
                        TransformationErrorKind::Unparseable,
                        "value is not a number",
                    ))
                }
                _ => {
                    return Err(TransformationError::new(
                        TransformationErrorKind::UnrecognizedCharacters,
                        "the number contains unrecognized characters",
                    ))
                }
            }
        }

        if integer.is_empty() && fraction.is_empty() {
            return Err(TransformationError::new(
                TransformationErrorKind::Unparseable,
                "value is not a number",
            ));
        }

        let mut normalized = String::with_capacity(integer.len() + fraction.len() + 3);
        if negative {
            normalized.push('-');
        }
        if integer.is_empty() {
            normalized.push('0');
        } else {
            normalized.push_str(&integer);
        }
        if !fraction.is_empty() {
            normalized.push('.');
            normalized.push_str(&fraction);
        }

        normalized.parse::<Decimal>().map(Some).map_err(|_| {
            TransformationError::new(
                TransformationErrorKind::Overflow,
                "value exceeds the supported range",
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{PercentOptions, RoundingMode, MAX_SCALE};
    use rust_decimal_macros::dec;

    fn transformer(options: PercentOptions, locale: &str) -> PercentTransformer {
        let config = PercentConversionConfig::from_options(options).unwrap();
        PercentTransformer::new(&config, Locale::new(locale).unwrap())
    }

    fn explicit(scale: u32, mode: RoundingMode) -> PercentOptions {
        PercentOptions::new().scale(scale).rounding_mode(mode)
    }

    #[test]
    fn ceiling_rounds_before_division() {
        let t = transformer(explicit(2, RoundingMode::Ceiling), "en");
        assert_eq!(t.to_model("1.23456").unwrap(), Some(dec!(0.0124)));
    }

    #[test]
    fn unset_mode_keeps_submitted_precision() {
        let t = transformer(PercentOptions::new().scale(2), "en");
        assert_eq!(t.to_model("1.23456").unwrap(), Some(dec!(0.0123456)));
    }

    #[test]
    fn integer_kind_skips_division() {
        let t = transformer(
            explicit(2, RoundingMode::Down).kind(PercentKind::Integer),
            "en",
        );
        assert_eq!(t.to_model("12.349").unwrap(), Some(dec!(12.34)));
    }

    #[test]
    fn empty_input_is_none() {
        let t = transformer(explicit(0, RoundingMode::HalfUp), "en");
        assert_eq!(t.to_model("").unwrap(), None);
        assert_eq!(t.to_model("   ").unwrap(), None);
        assert_eq!(t.to_display(None).unwrap(), "");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let t = transformer(explicit(0, RoundingMode::HalfUp), "en");
        assert_eq!(t.to_model(" 15\u{a0}").unwrap(), Some(dec!(0.15)));
    }

    #[test]
    fn locale_separator_and_dot_fallback() {
        let t = transformer(explicit(2, RoundingMode::HalfUp), "de_DE");
        assert_eq!(t.to_model("12,34").unwrap(), Some(dec!(0.1234)));
        assert_eq!(t.to_model("12.34").unwrap(), Some(dec!(0.1234)));
    }

    #[test]
    fn html5_accepts_only_dot() {
        let t = transformer(explicit(2, RoundingMode::HalfUp).html5(true), "de_DE");
        assert_eq!(t.to_model("12.34").unwrap(), Some(dec!(0.1234)));
        let err = t.to_model("12,34").unwrap_err();
        assert_eq!(err.kind(), TransformationErrorKind::UnrecognizedCharacters);
    }

    #[test]
    fn rejects_garbage() {
        let t = transformer(explicit(2, RoundingMode::HalfUp), "en");
        assert_eq!(
            t.to_model("abc").unwrap_err().kind(),
            TransformationErrorKind::Unparseable
        );
        assert_eq!(
            t.to_model("12abc").unwrap_err().kind(),
            TransformationErrorKind::UnrecognizedCharacters
        );
        assert_eq!(
            t.to_model("1.2.3").unwrap_err().kind(),
            TransformationErrorKind::UnrecognizedCharacters
        );
        assert_eq!(
            t.to_model("-").unwrap_err().kind(),
            TransformationErrorKind::Unparseable
        );
        assert_eq!(
            t.to_model("NaN").unwrap_err().kind(),
            TransformationErrorKind::NotANumber
        );
    }

    #[test]
    fn rejects_grouping_separators() {
        let t = transformer(explicit(0, RoundingMode::HalfUp), "en");
        assert_eq!(
            t.to_model("1,234").unwrap_err().kind(),
            TransformationErrorKind::UnrecognizedCharacters
        );
    }

    #[test]
    fn rejects_overflowing_input() {
        let t = transformer(explicit(0, RoundingMode::HalfUp), "en");
        let huge = "9".repeat(40);
        assert_eq!(
            t.to_model(&huge).unwrap_err().kind(),
            TransformationErrorKind::Overflow
        );
    }

    #[test]
    fn bare_fraction_and_trailing_separator() {
        let t = transformer(explicit(1, RoundingMode::HalfUp), "en");
        assert_eq!(t.to_model(".5").unwrap(), Some(dec!(0.005)));
        assert_eq!(t.to_model("5.").unwrap(), Some(dec!(0.05)));
        assert_eq!(t.to_model("-2.25").unwrap(), Some(dec!(-0.023)));
    }

    #[test]
    fn display_pads_to_scale() {
        let t = transformer(explicit(2, RoundingMode::HalfUp), "en");
        assert_eq!(t.to_display(Some(dec!(0.12))).unwrap(), "12.00");
        assert_eq!(t.to_display(Some(dec!(0.123456))).unwrap(), "12.35");
    }

    #[test]
    fn display_uses_locale_separator() {
        let t = transformer(explicit(2, RoundingMode::HalfUp), "de_DE");
        assert_eq!(t.to_display(Some(dec!(0.1234))).unwrap(), "12,34");
    }

    #[test]
    fn html5_display_ignores_locale() {
        let t = transformer(
            explicit(2, RoundingMode::Up)
                .html5(true)
                .kind(PercentKind::Integer),
            "de_DE",
        );
        assert_eq!(t.to_display(Some(dec!(1234.56))).unwrap(), "1234.56");
        assert_eq!(t.locale(), &Locale::english());
    }

    #[test]
    fn unset_mode_displays_half_up() {
        let t = transformer(PercentOptions::new().scale(0), "en");
        assert_eq!(t.to_display(Some(dec!(0.125))).unwrap(), "13");
    }

    #[test]
    fn negative_zero_is_not_shown() {
        let t = transformer(explicit(0, RoundingMode::Ceiling), "en");
        assert_eq!(t.to_display(Some(dec!(-0.001))).unwrap(), "0");
    }

    #[test]
    fn display_overflow_is_reported() {
        let t = transformer(explicit(0, RoundingMode::HalfUp), "en");
        assert_eq!(
            t.to_display(Some(Decimal::MAX)).unwrap_err().kind(),
            TransformationErrorKind::Overflow
        );
    }

    #[test]
    fn display_reports_values_too_wide_for_scale() {
        let t = transformer(
            PercentOptions::new()
                .scale(MAX_SCALE)
                .rounding_mode(RoundingMode::HalfUp)
                .kind(PercentKind::Integer),
            "en",
        );
        assert_eq!(
            t.to_display(Some(dec!(1234.5))).unwrap_err().kind(),
            TransformationErrorKind::Overflow
        );
        assert_eq!(t.to_display(Some(dec!(0.5))).unwrap(), format!("0.5{}", "0".repeat(25)));
    }
}
