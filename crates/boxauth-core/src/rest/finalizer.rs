//! REST-backed token finalizer.

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::Result;
use crate::error::ProtocolError;
use crate::extract::element_text;
use crate::session::{AuthenticatedSession, UserInfo};
use crate::tokens::{ApiKey, SessionToken, Ticket};
use crate::traits::{Request, TokenFinalizer, Transport};
use crate::types::ProviderUrl;

use super::{GET_AUTH_TOKEN, GET_AUTH_TOKEN_OK};

/// Exchanges an accepted ticket for a session token with `action=get_auth_token`.
#[derive(Debug, Clone)]
pub struct RestTokenFinalizer<T> {
    provider: ProviderUrl,
    api_key: ApiKey,
    transport: T,
}

impl<T: Transport> RestTokenFinalizer<T> {
    /// Create a finalizer for the application identified by `api_key`.
    pub fn new(provider: ProviderUrl, api_key: ApiKey, transport: T) -> Self {
        Self {
            provider,
            api_key,
            transport,
        }
    }
}

#[async_trait]
impl<T: Transport> TokenFinalizer for RestTokenFinalizer<T> {
    #[instrument(skip(self), fields(provider = %self.provider))]
    async fn finalize(&self, ticket: &Ticket) -> Result<AuthenticatedSession> {
        debug!("Requesting auth token");

        let url = self.provider.rest_url(
            GET_AUTH_TOKEN,
            &[("api_key", self.api_key.as_str()), ("ticket", ticket.as_str())],
        );
        let body = self.transport.execute_request(Request::get(url)).await?;
        let body = String::from_utf8_lossy(&body);

        let status =
            element_text(&body, "status").ok_or(ProtocolError::MissingElement { element: "status" })?;
        if status != GET_AUTH_TOKEN_OK {
            return Err(ProtocolError::UnexpectedStatus {
                action: GET_AUTH_TOKEN,
                status: status.to_string(),
            }
            .into());
        }

        let token = element_text(&body, "auth_token")
            .filter(|t| !t.is_empty())
            .ok_or(ProtocolError::MissingElement {
                element: "auth_token",
            })?;
        let token = SessionToken::new(token)?;
        let user = parse_user(&body);

        info!(user_id = ?user.user_id, "Session token issued");
        Ok(AuthenticatedSession { token, user })
    }
}

fn parse_user(body: &str) -> UserInfo {
    let Some(user) = element_text(body, "user") else {
        return UserInfo::default();
    };
    let number = |name: &str| element_text(user, name).and_then(|v| v.parse().ok());

    UserInfo {
        login: element_text(user, "login").unwrap_or_default().to_string(),
        email: element_text(user, "email")
            .filter(|v| !v.is_empty())
            .map(str::to_string),
        user_id: number("user_id"),
        space_amount: number("space_amount"),
        space_used: number("space_used"),
    }
}
