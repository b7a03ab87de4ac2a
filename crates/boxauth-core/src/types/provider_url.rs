//! Provider URL type.

use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};
use crate::tokens::Ticket;

/// The provider's production host.
pub const DEFAULT_PROVIDER_URL: &str = "https://www.box.net";

/// A validated provider base URL.
///
/// This type ensures the URL is absolute, uses HTTPS (or HTTP for localhost),
/// and is normalized for endpoint construction.
///
/// # Example
///
/// ```
/// use boxauth_core::{ProviderUrl, Ticket};
///
/// let provider = ProviderUrl::new("https://www.box.net").unwrap();
/// let ticket = Ticket::new("abc123").unwrap();
/// assert_eq!(provider.auth_url(&ticket),
///            "https://www.box.net/api/1.0/auth/abc123");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProviderUrl(Url);

impl ProviderUrl {
    /// Create a new provider URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ProviderUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the ticket-scoped login page URL, used for both the GET and the POST.
    pub fn auth_url(&self, ticket: &Ticket) -> String {
        format!("{}/api/1.0/auth/{}", self.base(), ticket.as_str())
    }

    /// Returns the REST endpoint URL for `action` with the given query parameters.
    pub fn rest_url(&self, action: &str, params: &[(&str, &str)]) -> String {
        let mut url = self.0.clone();
        url.set_path(&format!("{}/api/1.0/rest", self.0.path().trim_end_matches('/')));
        url.set_query(None);
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("action", action);
            for (name, value) in params {
                query.append_pair(name, value);
            }
        }
        url.into()
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    // The URL crate always adds a trailing slash to root paths.
    fn base(&self) -> &str {
        self.0.as_str().trim_end_matches('/')
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ProviderUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        // Must be HTTPS (or HTTP for localhost)
        let scheme = url.scheme();
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::ProviderUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::ProviderUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(InvalidInputError::ProviderUrl {
                value: original.to_string(),
                reason: "must not carry a query or fragment".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for ProviderUrl {
    fn default() -> Self {
        // The constant is a valid https URL.
        Self(Url::parse(DEFAULT_PROVIDER_URL).expect("default provider URL is valid"))
    }
}

impl fmt::Display for ProviderUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProviderUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ProviderUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
