use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

/// Something that looks like `local@domain.tld`: no whitespace, a single `@` and at
/// least one `.` after it.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

/// An email address that passed the same syntax check the site's forms use. Any
/// instance of this is guaranteed to be well formed.
///
/// # Examples
/// Use the `parse` function to build an `EmailAddress` from a string.
/// We can then get the address back out using the `AsRef<str>` implementation.
/// ```
/// use contact_relay::domain::EmailAddress;
///
/// let email = EmailAddress::parse("valid@domain.com").unwrap();
/// assert_eq!("valid@domain.com", email.as_ref());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Return `Ok` with a valid `EmailAddress` when `s` matches the address syntax.
    /// Otherwise returns `Err(ValidationError::InvalidEmail)`.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if EMAIL_PATTERN.is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(ValidationError::InvalidEmail)
        }
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
