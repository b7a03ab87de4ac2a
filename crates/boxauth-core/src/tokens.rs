//! Opaque values exchanged during the login protocol.

use std::fmt;

use crate::error::{Error, InvalidInputError, ProtocolError};

/// A one-time authorization ticket issued before login.
///
/// The ticket scopes every request of a login episode and is embedded in the
/// login URL path, so it must be non-empty and path-safe.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(String);

impl Ticket {
    /// Create a ticket from the value returned by the provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is empty or contains characters that
    /// cannot appear in a URL path segment unescaped.
    pub fn new(value: impl Into<String>) -> Result<Self, Error> {
        let value = value.into();
        if value.is_empty() {
            return Err(InvalidInputError::Ticket {
                value,
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        let invalid = value
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~')));
        if let Some(c) = invalid {
            return Err(InvalidInputError::Ticket {
                reason: format!("invalid character {c:?}"),
                value,
            }
            .into());
        }
        Ok(Self(value))
    }

    /// Returns the ticket string as issued.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The anti-forgery token embedded in the provider's login page.
///
/// A fresh one is scraped from every response and must accompany the next
/// form submission.
///
/// # Security
///
/// Never logged or displayed in Debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct RequestToken(String);

impl RequestToken {
    /// Wrap a scraped token value. Empty values are a protocol error.
    pub(crate) fn new(value: &str) -> Result<Self, ProtocolError> {
        if value.is_empty() {
            return Err(ProtocolError::EmptyRequestToken);
        }
        Ok(Self(value.to_string()))
    }

    /// Returns the token value exactly as it appeared in the page.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RequestToken").field(&"[REDACTED]").finish()
    }
}

/// The durable authentication token of a logged-in session.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Create a session token, e.g. one restored from a previous run.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, Error> {
        let value = value.into();
        if value.is_empty() {
            return Err(InvalidInputError::SessionToken {
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        Ok(Self(value))
    }

    /// Returns the token value for use in API calls.
    ///
    /// # Security
    ///
    /// Handle the returned value securely. It grants access to the account.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&"[REDACTED]").finish()
    }
}

/// The application API key registered with the provider.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// Create an API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, Error> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(InvalidInputError::ApiKey {
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        if value.chars().any(char::is_whitespace) {
            return Err(InvalidInputError::ApiKey {
                reason: "must not contain whitespace".to_string(),
            }
            .into());
        }
        Ok(Self(value))
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"[REDACTED]").finish()
    }
}
