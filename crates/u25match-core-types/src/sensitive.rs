//! Redacting wrapper for credentials
//!
//! Session tokens and API bearer tokens pass through config, the auth
//! session and the HTTP service. Wrapping them in `Sensitive<T>` keeps them
//! out of `Debug` output, log fields and error messages.

use std::fmt;

/// Wrapper whose `Debug` and `Display` never show the inner value
///
/// # Example
///
/// ```
/// use u25match_core_types::Sensitive;
///
/// let token = Sensitive::new("session-token");
/// assert_eq!(format!("{:?}", token), "***REDACTED***");
/// assert_eq!(token.expose(), &"session-token");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Borrow the secret. Only call this at the point of use (e.g. building
    /// an `Authorization` header).
    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***REDACTED***")
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***REDACTED***")
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: PartialEq> PartialEq for Sensitive<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
