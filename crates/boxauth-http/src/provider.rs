//! Provider facade wiring the protocol components to one HTTP transport.

use async_trait::async_trait;

use boxauth_core::error::TicketError;
use boxauth_core::{
    ApiKey, AuthenticatedSession, LoginEpisode, ProviderUrl, RestTicketIssuer,
    RestTokenFinalizer, Result, SessionAuthenticator, Ticket, TicketIssuer, TokenFinalizer,
};

use crate::transport::HttpTransport;

/// One provider endpoint and application key, ready to run logins.
#[derive(Debug, Clone)]
pub struct BoxProvider {
    issuer: RestTicketIssuer<HttpTransport>,
    authenticator: SessionAuthenticator<HttpTransport>,
    finalizer: RestTokenFinalizer<HttpTransport>,
}

impl BoxProvider {
    /// Create a provider with a fresh [`HttpTransport`].
    pub fn new(url: ProviderUrl, api_key: ApiKey) -> Result<Self> {
        Ok(Self::with_transport(url, api_key, HttpTransport::new()?))
    }

    /// Create a provider sharing an existing transport.
    pub fn with_transport(url: ProviderUrl, api_key: ApiKey, transport: HttpTransport) -> Self {
        Self {
            issuer: RestTicketIssuer::new(url.clone(), api_key.clone(), transport.clone()),
            authenticator: SessionAuthenticator::new(url.clone(), transport.clone()),
            finalizer: RestTokenFinalizer::new(url, api_key, transport),
        }
    }

    /// Returns the provider URL.
    pub fn url(&self) -> &ProviderUrl {
        self.authenticator.provider()
    }

    /// Returns the login page a user can open in a browser instead of
    /// submitting credentials through [`begin_login`](Self::begin_login).
    pub fn login_page_url(&self, ticket: &Ticket) -> String {
        self.url().auth_url(ticket)
    }

    /// Returns the credential submission step.
    pub fn authenticator(&self) -> &SessionAuthenticator<HttpTransport> {
        &self.authenticator
    }

    /// Start a login episode for `ticket`.
    pub fn begin_login(&self, ticket: Ticket) -> LoginEpisode<'_, HttpTransport> {
        self.authenticator.begin(ticket)
    }
}

#[async_trait]
impl TicketIssuer for BoxProvider {
    async fn request_ticket(&self) -> std::result::Result<Ticket, TicketError> {
        self.issuer.request_ticket().await
    }
}

#[async_trait]
impl TokenFinalizer for BoxProvider {
    async fn finalize(&self, ticket: &Ticket) -> Result<AuthenticatedSession> {
        self.finalizer.finalize(ticket).await
    }
}
