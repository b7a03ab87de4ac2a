//! Session data handed back to the application after login.

use tracing::debug;

use crate::tokens::SessionToken;

/// Account details reported alongside a fresh session token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserInfo {
    pub login: String,
    pub email: Option<String>,
    pub user_id: Option<u64>,
    /// Storage quota in bytes.
    pub space_amount: Option<u64>,
    /// Storage used in bytes.
    pub space_used: Option<u64>,
}

/// The result of a completed login: the durable token and who it belongs to.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub token: SessionToken,
    pub user: UserInfo,
}

/// Caller-owned session settings.
///
/// Holds the token of the current session and whether the application should
/// keep it for the next run. Storing it is up to the application.
///
/// # Example
///
/// ```
/// use boxauth_core::{SessionState, SessionToken};
///
/// let mut state = SessionState::new();
/// state.remember(SessionToken::new("tok").unwrap(), true);
/// assert!(state.is_remembered());
///
/// state.forget();
/// assert!(state.token().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    token: Option<SessionToken>,
    remember: bool,
}

impl SessionState {
    /// An empty state: no session, nothing remembered.
    pub fn new() -> Self {
        Self::default()
    }

    /// A state reconnected from a token the application kept from a previous run.
    pub fn restored(token: SessionToken) -> Self {
        Self {
            token: Some(token),
            remember: true,
        }
    }

    /// Record the token of a new session and whether to keep it.
    pub fn remember(&mut self, token: SessionToken, keep: bool) {
        debug!(keep, "Session token recorded");
        self.token = Some(token);
        self.remember = keep;
    }

    /// Drop the current token and the remember flag.
    pub fn forget(&mut self) {
        debug!("Session token cleared");
        self.token = None;
        self.remember = false;
    }

    /// Returns the current session token, if any.
    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    /// Returns true if there is a token the application should keep.
    pub fn is_remembered(&self) -> bool {
        self.remember && self.token.is_some()
    }

    /// Returns the token to persist, or `None` if nothing should be kept.
    pub fn token_to_persist(&self) -> Option<&SessionToken> {
        if self.remember { self.token.as_ref() } else { None }
    }
}
