//! The credential submission state machine.

use tracing::{debug, info, instrument};

use crate::Result;
use crate::credentials::Credentials;
use crate::error::ProtocolError;
use crate::extract::{extract_request_token, is_auth_success};
use crate::tokens::{RequestToken, Ticket};
use crate::traits::{Request, Transport};
use crate::types::ProviderUrl;

use super::episode::LoginEpisode;
use super::form::login_form;

/// Where a login episode stands between submissions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TokenState {
    /// No request token yet; the login page must be fetched first.
    #[default]
    Initial,
    /// A request token from the previous rejected attempt is held.
    Retrying(RequestToken),
}

impl TokenState {
    /// Returns the live request token, if one is held.
    pub fn request_token(&self) -> Option<&RequestToken> {
        match self {
            TokenState::Initial => None,
            TokenState::Retrying(token) => Some(token),
        }
    }
}

/// The result of one credential submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The provider accepted the credentials; the ticket can be finalized.
    Succeeded,
    /// The provider rejected the credentials. Resubmit with the carried state.
    Rejected(TokenState),
}

impl AuthOutcome {
    /// Returns true if the caller should prompt for credentials again.
    pub fn requires_retry(&self) -> bool {
        matches!(self, AuthOutcome::Rejected(_))
    }
}

/// Drives the provider's ticket-scoped login form.
///
/// Each call to [`authenticate`](Self::authenticate) is one submission. The
/// first submission of an episode fetches the login page to obtain a request
/// token; later submissions reuse the token scraped from the previous
/// rejection.
///
/// # Example
///
/// ```no_run
/// use boxauth_core::{AuthOutcome, Credentials, SessionAuthenticator, Ticket, TokenState};
/// # use boxauth_core::{ProviderUrl, Transport};
///
/// # async fn example<T: Transport>(transport: T, ticket: Ticket) -> boxauth_core::Result<()> {
/// let authenticator = SessionAuthenticator::new(ProviderUrl::default(), transport);
/// let credentials = Credentials::new("alice@example.com", "hunter2")?;
///
/// match authenticator.authenticate(&ticket, &credentials, TokenState::Initial).await? {
///     AuthOutcome::Succeeded => println!("logged in"),
///     AuthOutcome::Rejected(state) => {
///         let retry = Credentials::new("alice@example.com", "hunter3")?;
///         authenticator.authenticate(&ticket, &retry, state).await?;
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SessionAuthenticator<T> {
    provider: ProviderUrl,
    transport: T,
}

impl<T: Transport> SessionAuthenticator<T> {
    /// Create an authenticator for `provider` using `transport`.
    pub fn new(provider: ProviderUrl, transport: T) -> Self {
        Self {
            provider,
            transport,
        }
    }

    /// Returns the provider this authenticator submits to.
    pub fn provider(&self) -> &ProviderUrl {
        &self.provider
    }

    /// Start a login episode for `ticket`.
    pub fn begin(&self, ticket: Ticket) -> LoginEpisode<'_, T> {
        LoginEpisode::new(self, ticket)
    }

    /// Submit `credentials` for `ticket`.
    ///
    /// # Errors
    ///
    /// - [`Error::Transport`](crate::Error::Transport) if either request fails
    ///   on the network. A failed page fetch means no form is posted.
    /// - [`Error::Status`](crate::Error::Status) on a non-success HTTP status.
    /// - [`Error::Protocol`](crate::Error::Protocol) if a response carries
    ///   neither the success marker nor a usable request token.
    #[instrument(skip(self, credentials, state), fields(ticket = %ticket))]
    pub async fn authenticate(
        &self,
        ticket: &Ticket,
        credentials: &Credentials,
        state: TokenState,
    ) -> Result<AuthOutcome> {
        let url = self.provider.auth_url(ticket);

        let request_token = match state {
            TokenState::Initial => {
                debug!("Fetching login page");
                let page = self.transport.execute_request(Request::get(&url)).await?;
                scrape_request_token(&page)?
            }
            TokenState::Retrying(token) => token,
        };

        debug!("Submitting login form");
        let form = login_form(credentials, &request_token);
        let reply = self
            .transport
            .execute_request(Request::post_form(&url, form))
            .await?;

        if is_auth_success(&String::from_utf8_lossy(&reply)) {
            info!("Credentials accepted");
            return Ok(AuthOutcome::Succeeded);
        }

        let next = scrape_request_token(&reply)?;
        info!("Credentials rejected");
        Ok(AuthOutcome::Rejected(TokenState::Retrying(next)))
    }
}

fn scrape_request_token(body: &[u8]) -> std::result::Result<RequestToken, ProtocolError> {
    let body = String::from_utf8_lossy(body);
    let value = extract_request_token(&body)?;
    RequestToken::new(value)
}
