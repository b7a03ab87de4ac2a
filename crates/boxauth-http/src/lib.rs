//! boxauth-http - HTTP transport and provider facade for boxauth.
//!
//! # Example
//!
//! ```no_run
//! use boxauth_core::{ApiKey, Attempt, Credentials, ProviderUrl, TicketIssuer, TokenFinalizer};
//! use boxauth_http::BoxProvider;
//!
//! # async fn example() -> boxauth_core::Result<()> {
//! let provider = BoxProvider::new(ProviderUrl::default(), ApiKey::new("my-api-key")?)?;
//! let ticket = provider.request_ticket().await?;
//!
//! let mut episode = provider.begin_login(ticket.clone());
//! let credentials = Credentials::new("alice@example.com", "hunter2")?;
//! if episode.submit(&credentials).await? == Attempt::Accepted {
//!     let session = provider.finalize(&ticket).await?;
//!     println!("logged in as {}", session.user.login);
//! }
//! # Ok(())
//! # }
//! ```

mod provider;
mod transport;

pub use provider::BoxProvider;
pub use transport::HttpTransport;
