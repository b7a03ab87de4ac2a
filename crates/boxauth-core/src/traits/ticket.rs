//! Ticket issuance trait.

use async_trait::async_trait;

use crate::error::TicketError;
use crate::tokens::Ticket;

/// Obtains a login ticket from the provider.
///
/// Implementations perform no retry; a failed issuance ends the login episode
/// before any credentials are submitted.
#[async_trait]
pub trait TicketIssuer: Send + Sync {
    /// Request a fresh ticket.
    async fn request_ticket(&self) -> Result<Ticket, TicketError>;
}
