//! Error types for the boxauth library.
//!
//! This module provides a unified error type with explicit variants for
//! transport, HTTP status, protocol, ticket and input validation errors.
//!
//! A wrong password is not an error: it is reported as
//! [`AuthOutcome::Rejected`](crate::AuthOutcome::Rejected).

use std::fmt;
use thiserror::Error;

/// The unified error type for boxauth operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, malformed HTTP).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The provider answered with a non-success HTTP status.
    #[error("provider error: {0}")]
    Status(#[from] StatusError),

    /// A response did not have the shape the login protocol expects.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Ticket issuance failed; the login episode must restart.
    #[error("ticket error: {0}")]
    Ticket(#[from] TicketError),

    /// Misuse of a login episode.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Input validation errors (URL, API key, ticket, token format).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns true for network-level failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Returns true when a response body could not be understood.
    pub fn is_protocol(&self) -> bool {
        matches!(self, Error::Protocol(_))
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP client error (bad response framing, body read failure).
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A non-success HTTP status returned by the provider.
#[derive(Debug)]
pub struct StatusError {
    /// HTTP status code.
    pub status: u16,
    /// The URL that was requested.
    pub url: String,
}

impl StatusError {
    /// Create a new status error.
    pub fn new(status: u16, url: impl Into<String>) -> Self {
        Self {
            status,
            url: url.into(),
        }
    }

    /// Check if the provider rejected the request as unauthorized.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {} from {}", self.status, self.url)
    }
}

impl std::error::Error for StatusError {}

/// Why a request token could not be scraped from a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenNotFound {
    /// The `request_token` marker does not occur in the body.
    #[error("request_token marker not found")]
    MissingMarker,

    /// No quote follows the marker.
    #[error("no opening quote after request_token marker")]
    MissingOpeningQuote,

    /// The token value is never closed.
    #[error("no closing quote after request_token value")]
    MissingClosingQuote,
}

/// Protocol-level errors: the provider answered, but not in the expected format.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The login page carried no usable request token.
    #[error("request token not found: {0}")]
    RequestToken(#[from] TokenNotFound),

    /// The login page carried an empty request token.
    #[error("request token is empty")]
    EmptyRequestToken,

    /// A REST reply lacked a required element.
    #[error("response has no <{element}> element")]
    MissingElement { element: &'static str },

    /// A REST reply carried a ticket that cannot be used in the login URL.
    #[error("ticket '{value}' is not usable: {reason}")]
    InvalidTicket { value: String, reason: String },

    /// A REST reply reported a status other than the expected one.
    #[error("{action} returned status '{status}'")]
    UnexpectedStatus { action: &'static str, status: String },
}

/// Ticket issuance errors.
#[derive(Debug, Error)]
pub enum TicketError {
    /// The provider refused to issue a ticket (e.g. unknown API key).
    #[error("provider refused ticket: {status}")]
    Refused { status: String },

    /// The reply could not be understood.
    #[error("malformed ticket reply: {0}")]
    Malformed(ProtocolError),

    /// The request itself failed.
    #[error("ticket request failed: {0}")]
    Request(#[source] Box<Error>),
}

/// Errors from driving a login episode.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The episode already ended with a successful login.
    #[error("login episode already authenticated")]
    AlreadyAuthenticated,
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid provider URL format.
    #[error("invalid provider URL '{value}': {reason}")]
    ProviderUrl { value: String, reason: String },

    /// Invalid ticket.
    #[error("invalid ticket '{value}': {reason}")]
    Ticket { value: String, reason: String },

    /// Empty or malformed API key. The key itself is never echoed.
    #[error("invalid API key: {reason}")]
    ApiKey { reason: String },

    /// A login or password missing from the user's input.
    #[error("invalid credentials: {reason}")]
    Credentials { reason: String },

    /// Empty session token.
    #[error("invalid session token: {reason}")]
    SessionToken { reason: String },
}
