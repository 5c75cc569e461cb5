//! Emptiness checks for strings and optional strings.

/// Extension methods on string slices.
pub trait StrExt {
    /// Returns `self` unchanged unless it is empty or consists only of whitespace.
    ///
    /// Trimming is only used for the test. Leading and trailing whitespace is kept in the result.
    ///
    /// ```
    /// # use corekit::strings::StrExt as _;
    /// assert_eq!("  Hello  ".non_empty(), Some("  Hello  "));
    /// assert_eq!(" \n\t ".non_empty(), None);
    /// ```
    fn non_empty(&self) -> Option<&str>;
}

impl StrExt for str {
    fn non_empty(&self) -> Option<&str> {
        if self.trim().is_empty() { None } else { Some(self) }
    }
}

/// Extension methods on optional strings.
pub trait OptionStrExt {
    /// `true` if this is `None` or an empty string. Whitespace counts as content.
    fn is_none_or_empty(&self) -> bool;
    /// Like [`StrExt::non_empty`], with `None` mapped to `None`.
    fn non_empty(&self) -> Option<&str>;
}

impl<S: AsRef<str>> OptionStrExt for Option<S> {
    fn is_none_or_empty(&self) -> bool {
        self.as_ref().map_or(true, |s| s.as_ref().is_empty())
    }

    fn non_empty(&self) -> Option<&str> {
        self.as_ref().and_then(|s| s.as_ref().non_empty())
    }
}
