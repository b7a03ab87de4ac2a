//! Ticket issuance and token finalization over the provider's REST endpoint.

mod finalizer;
mod issuer;

pub use finalizer::RestTokenFinalizer;
pub use issuer::RestTicketIssuer;

/// `action` value requesting a login ticket.
pub const GET_TICKET: &str = "get_ticket";

/// `action` value exchanging an authenticated ticket for a session token.
pub const GET_AUTH_TOKEN: &str = "get_auth_token";

/// Status reported by a successful `get_ticket`.
pub const GET_TICKET_OK: &str = "get_ticket_ok";

/// Status reported by a successful `get_auth_token`.
pub const GET_AUTH_TOKEN_OK: &str = "get_auth_token_ok";
