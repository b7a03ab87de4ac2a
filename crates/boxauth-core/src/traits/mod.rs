//! Seams between the protocol core and its collaborators.

mod finalizer;
mod ticket;
mod transport;

pub use finalizer::TokenFinalizer;
pub use ticket::TicketIssuer;
pub use transport::{Method, Request, Transport};
