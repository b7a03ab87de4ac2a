//! Token finalization trait.

use async_trait::async_trait;

use crate::Result;
use crate::session::AuthenticatedSession;
use crate::tokens::Ticket;

/// Exchanges the ticket of an accepted login for the durable session token.
#[async_trait]
pub trait TokenFinalizer: Send + Sync {
    /// Fetch the session token and user details bound to `ticket`.
    async fn finalize(&self, ticket: &Ticket) -> Result<AuthenticatedSession>;
}
