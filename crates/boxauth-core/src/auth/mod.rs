//! Credential submission and login episodes.
//!
//! [`SessionAuthenticator`] is the stateless protocol step; [`LoginEpisode`]
//! keeps the state between steps for callers that prompt in a loop.

mod authenticator;
mod episode;
mod form;

pub use authenticator::{AuthOutcome, SessionAuthenticator, TokenState};
pub use episode::{Attempt, LoginEpisode};
