use std::fmt;

/// A submitted value that has not been converted yet.
///
/// Values crossing the request boundary are wrapped in `Tainted<T>` and can
/// only be unwrapped inside this crate, by the component that validates
/// them. A percent field, for example, accepts `Tainted<String>` and only
/// exposes the parsed model value.
///
/// # Examples
///
/// ```
/// use handler_glue::Tainted;
///
/// let submitted = Tainted::new("12.5".to_string());
/// assert!(format!("{:?}", submitted).contains("Tainted"));
///
/// // There is no public accessor; the raw string is not reachable here.
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Tainted<T> {
    // Must stay private: unwrapping is reserved to converters in this crate.
    inner: T,
}

impl<T> Tainted<T> {
    /// Wraps a value received from outside.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Consumes the wrapper.
    pub(crate) fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: fmt::Debug> fmt::Debug for Tainted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tainted")
            .field("inner", &self.inner)
            .finish()
    }
}

impl From<&str> for Tainted<String> {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}
