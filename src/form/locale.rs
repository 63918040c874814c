use std::fmt;
use std::str::FromStr;

use crate::error::OptionsError;

/// Number conventions of one locale, reduced to what percent fields need.
///
/// Percent values are rendered without grouping, so only the decimal
/// separator is tracked. Regions without their own entry inherit the
/// language's separator; unknown languages use the `en` conventions.
///
/// # Examples
///
/// ```
/// use handler_glue::form::Locale;
///
/// let swiss: Locale = "de_CH".parse().unwrap();
/// assert_eq!(swiss.decimal_separator(), '.');
///
/// let german: Locale = "de-DE".parse().unwrap();
/// assert_eq!(german.decimal_separator(), ',');
/// assert_eq!(german.tag(), "de_DE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    language: String,
    region: Option<String>,
    decimal_separator: char,
}

// Region entries take precedence over the language default.
const REGION_SEPARATORS: &[(&str, &str, char)] = &[
    ("de", "CH", '.'),
    ("de", "LI", '.'),
    ("it", "CH", '.'),
    ("es", "MX", '.'),
    ("en", "ZA", ','),
];

const COMMA_LANGUAGES: &[&str] = &[
    "de", "fr", "es", "it", "nl", "pt", "ru", "pl", "cs", "sk", "sv", "da", "nb", "fi", "tr",
    "uk", "el", "hu", "ro", "id",
];

impl Locale {
    /// Builds a locale from a tag such as `de_CH`, `de-CH` or `fr`.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::InvalidLocale`] when the tag is empty, its
    /// parts are not alphanumeric, or it has more than language and region.
    pub fn new(tag: &str) -> Result<Self, OptionsError> {
        let mut parts = tag.split(['_', '-']);
        let language = parts
            .next()
            .filter(|l| (2..=3).contains(&l.len()) && l.chars().all(|c| c.is_ascii_alphabetic()))
            .ok_or_else(|| OptionsError::InvalidLocale(tag.to_string()))?
            .to_ascii_lowercase();

        let region = match parts.next() {
            Some(r) if !r.is_empty() && r.chars().all(|c| c.is_ascii_alphanumeric()) => {
                Some(r.to_ascii_uppercase())
            }
            Some(_) => return Err(OptionsError::InvalidLocale(tag.to_string())),
            None => None,
        };
        if parts.next().is_some() {
            return Err(OptionsError::InvalidLocale(tag.to_string()));
        }

        let decimal_separator = Self::lookup_separator(&language, region.as_deref());

        Ok(Self {
            language,
            region,
            decimal_separator,
        })
    }

    /// The `en` locale, which is also the machine-readable convention.
    pub fn english() -> Self {
        Self {
            language: "en".to_string(),
            region: None,
            decimal_separator: '.',
        }
    }

    fn lookup_separator(language: &str, region: Option<&str>) -> char {
        if let Some(region) = region {
            if let Some((_, _, sep)) = REGION_SEPARATORS
                .iter()
                .find(|(l, r, _)| *l == language && *r == region)
            {
                return *sep;
            }
        }
        if COMMA_LANGUAGES.contains(&language) {
            ','
        } else {
            '.'
        }
    }

    /// Canonical tag, `language` or `language_REGION`.
    pub fn tag(&self) -> String {
        match &self.region {
            Some(region) => format!("{}_{}", self.language, region),
            None => self.language.clone(),
        }
    }

    /// Lower-case language subtag.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Upper-case region subtag, if any.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Character separating the integer and fraction parts.
    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl FromStr for Locale {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}
