use std::fmt;

use thiserror::Error;

/// Errors that can occur in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Field options were rejected
    #[error(transparent)]
    Options(#[from] OptionsError),
    /// A handler argument could not be resolved
    #[error(transparent)]
    Argument(#[from] ArgumentError),
    /// A value could not be converted between view and model form
    #[error(transparent)]
    Transformation(#[from] TransformationError),
}

/// Invalid field configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// The scale exceeds what the decimal backend can hold
    #[error("scale {scale} exceeds the maximum supported scale {max}")]
    ScaleTooLarge {
        /// Requested scale
        scale: u32,
        /// Largest accepted scale
        max: u32,
    },
    /// A locale tag could not be parsed
    #[error("invalid locale tag '{0}'")]
    InvalidLocale(String),
}

/// Failure to resolve the arguments of a handler.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// No resolver in the chain supports the parameter
    #[error("handler \"{handler}\" requires that you provide a value for the \"{parameter}\" argument")]
    MissingArgument {
        /// Handler being invoked
        handler: String,
        /// Unresolved parameter
        parameter: String,
    },
    /// A resolver accepted the parameter and then yielded no value
    #[error("resolver \"{resolver}\" did not yield a value for the \"{parameter}\" argument")]
    ResolverYieldedNothing {
        /// Resolver name
        resolver: &'static str,
        /// Parameter name
        parameter: String,
    },
    /// A resolver yielded several values for a non-variadic parameter
    #[error("resolver \"{resolver}\" yielded {count} values for the non-variadic \"{parameter}\" argument")]
    TooManyValues {
        /// Resolver name
        resolver: &'static str,
        /// Parameter name
        parameter: String,
        /// Number of values produced
        count: usize,
    },
}

/// A view value that could not be turned into a model value.
///
/// This is a user-input failure; form fields attach it as a validation
/// error instead of propagating it. The message never echoes the input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("transformation failed ({kind}): {message}")]
pub struct TransformationError {
    kind: TransformationErrorKind,
    message: String,
}

impl TransformationError {
    /// Creates a new transformation error.
    pub fn new(kind: TransformationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> TransformationErrorKind {
        self.kind
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Kind of transformation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformationErrorKind {
    /// Input is not a number at all.
    Unparseable,
    /// A number was found but followed or interrupted by other characters.
    UnrecognizedCharacters,
    /// Input spells NaN.
    NotANumber,
    /// Magnitude exceeds the decimal backend.
    Overflow,
}

impl fmt::Display for TransformationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unparseable => write!(f, "unparseable"),
            Self::UnrecognizedCharacters => write!(f, "unrecognized characters"),
            Self::NotANumber => write!(f, "not a number"),
            Self::Overflow => write!(f, "overflow"),
        }
    }
}
