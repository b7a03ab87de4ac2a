//! One ticket's worth of login attempts.

use tracing::{info, instrument};

use crate::Result;
use crate::credentials::Credentials;
use crate::error::AuthError;
use crate::tokens::Ticket;
use crate::traits::Transport;

use super::authenticator::{AuthOutcome, SessionAuthenticator, TokenState};

/// The result of submitting credentials through a [`LoginEpisode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    /// The provider accepted the credentials.
    Accepted,
    /// The provider rejected the credentials; `attempts` submissions so far.
    Rejected { attempts: u32 },
}

#[derive(Debug)]
enum EpisodeState {
    Pending(TokenState),
    Authenticated,
}

/// A login episode: one ticket, the live request token, and the attempt count.
///
/// The episode owns the request token exclusively, so submissions are
/// serialized through `&mut self`. Dropping an episode (or calling
/// [`abandon`](Self::abandon)) ends it; the provider is not notified.
#[derive(Debug)]
pub struct LoginEpisode<'a, T> {
    authenticator: &'a SessionAuthenticator<T>,
    ticket: Ticket,
    state: EpisodeState,
    attempts: u32,
}

impl<'a, T: Transport> LoginEpisode<'a, T> {
    pub(crate) fn new(authenticator: &'a SessionAuthenticator<T>, ticket: Ticket) -> Self {
        Self {
            authenticator,
            ticket,
            state: EpisodeState::Pending(TokenState::Initial),
            attempts: 0,
        }
    }

    /// Returns the ticket this episode is scoped to.
    pub fn ticket(&self) -> &Ticket {
        &self.ticket
    }

    /// Returns the number of submissions the provider answered.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Returns true once the provider has accepted a submission.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, EpisodeState::Authenticated)
    }

    /// Submit credentials.
    ///
    /// On error the held request token is left as it was, so the caller may
    /// try again only if the error was transient.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::AlreadyAuthenticated`] once the episode succeeded,
    /// and otherwise the errors of [`SessionAuthenticator::authenticate`].
    #[instrument(skip(self, credentials), fields(ticket = %self.ticket, attempt = self.attempts + 1))]
    pub async fn submit(&mut self, credentials: &Credentials) -> Result<Attempt> {
        let state = match &self.state {
            EpisodeState::Authenticated => return Err(AuthError::AlreadyAuthenticated.into()),
            EpisodeState::Pending(state) => state.clone(),
        };

        let outcome = self
            .authenticator
            .authenticate(&self.ticket, credentials, state)
            .await?;
        self.attempts += 1;

        match outcome {
            AuthOutcome::Succeeded => {
                self.state = EpisodeState::Authenticated;
                Ok(Attempt::Accepted)
            }
            AuthOutcome::Rejected(next) => {
                self.state = EpisodeState::Pending(next);
                Ok(Attempt::Rejected {
                    attempts: self.attempts,
                })
            }
        }
    }

    /// Give up on this episode.
    pub fn abandon(self) {
        info!(ticket = %self.ticket, attempts = self.attempts, "Login abandoned");
    }
}
