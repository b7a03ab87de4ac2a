//! boxauth-core - Ticket-based login protocol for the Box v1 API.
//!
//! A login runs in three steps:
//!
//! 1. a [`TicketIssuer`] obtains a [`Ticket`] for the application;
//! 2. a [`SessionAuthenticator`] submits [`Credentials`] against that ticket
//!    until the provider accepts them, carrying the scraped request token
//!    between attempts in a [`TokenState`];
//! 3. a [`TokenFinalizer`] exchanges the accepted ticket for a [`SessionToken`].
//!
//! Network access goes through the [`Transport`] trait; this crate performs no
//! I/O of its own.

pub mod auth;
pub mod credentials;
pub mod error;
pub mod extract;
pub mod rest;
pub mod session;
pub mod tokens;
pub mod traits;
pub mod types;

pub use auth::{Attempt, AuthOutcome, LoginEpisode, SessionAuthenticator, TokenState};
pub use credentials::Credentials;
pub use error::Error;
pub use extract::{element_text, extract_request_token, is_auth_success};
pub use rest::{RestTicketIssuer, RestTokenFinalizer};
pub use session::{AuthenticatedSession, SessionState, UserInfo};
pub use tokens::{ApiKey, RequestToken, SessionToken, Ticket};
pub use traits::{Method, Request, TicketIssuer, TokenFinalizer, Transport};
pub use types::{DEFAULT_PROVIDER_URL, ProviderUrl};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
