//! Login credentials type.

use std::fmt;

use crate::error::{Error, InvalidInputError};

/// A login and password for one form submission.
///
/// Both parts are required: the provider answers an empty field with the
/// login page again, which would read as a rejection. The password never
/// appears in Debug output.
///
/// # Example
///
/// ```
/// use boxauth_core::Credentials;
///
/// let creds = Credentials::new("alice@example.com", "hunter2").unwrap();
/// assert_eq!(creds.login(), "alice@example.com");
/// assert!(Credentials::new("alice@example.com", "").is_err());
/// ```
#[derive(Clone)]
pub struct Credentials {
    login: String,
    password: String,
}

impl Credentials {
    /// Create credentials from the user's input.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::Credentials`] if the login is blank or the
    /// password is empty.
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Result<Self, Error> {
        let login = login.into();
        let password = password.into();

        if login.trim().is_empty() {
            return Err(InvalidInputError::Credentials {
                reason: "login is required".to_string(),
            }
            .into());
        }
        // Passwords are sent as typed; only an empty one is refused.
        if password.is_empty() {
            return Err(InvalidInputError::Credentials {
                reason: "password is required".to_string(),
            }
            .into());
        }

        Ok(Self { login, password })
    }

    /// Returns the login name.
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Only the login form reads this.
    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
