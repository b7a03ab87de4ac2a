//! REST-backed ticket issuer.

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use crate::error::{ProtocolError, TicketError};
use crate::extract::element_text;
use crate::tokens::{ApiKey, Ticket};
use crate::traits::{Request, TicketIssuer, Transport};
use crate::types::ProviderUrl;

use super::{GET_TICKET, GET_TICKET_OK};

/// Requests login tickets with `action=get_ticket`.
#[derive(Debug, Clone)]
pub struct RestTicketIssuer<T> {
    provider: ProviderUrl,
    api_key: ApiKey,
    transport: T,
}

impl<T: Transport> RestTicketIssuer<T> {
    /// Create an issuer for the application identified by `api_key`.
    pub fn new(provider: ProviderUrl, api_key: ApiKey, transport: T) -> Self {
        Self {
            provider,
            api_key,
            transport,
        }
    }
}

#[async_trait]
impl<T: Transport> TicketIssuer for RestTicketIssuer<T> {
    #[instrument(skip(self), fields(provider = %self.provider))]
    async fn request_ticket(&self) -> Result<Ticket, TicketError> {
        debug!("Requesting ticket");

        let url = self
            .provider
            .rest_url(GET_TICKET, &[("api_key", self.api_key.as_str())]);
        let body = self
            .transport
            .execute_request(Request::get(url))
            .await
            .map_err(|e| TicketError::Request(Box::new(e)))?;
        let body = String::from_utf8_lossy(&body);

        let status = element_text(&body, "status").ok_or(TicketError::Malformed(
            ProtocolError::MissingElement { element: "status" },
        ))?;
        if status != GET_TICKET_OK {
            warn!(status, "Ticket refused");
            return Err(TicketError::Refused {
                status: status.to_string(),
            });
        }

        let value = element_text(&body, "ticket")
            .filter(|t| !t.is_empty())
            .ok_or(TicketError::Malformed(ProtocolError::MissingElement {
                element: "ticket",
            }))?;
        let ticket = Ticket::new(value).map_err(|e| {
            TicketError::Malformed(ProtocolError::InvalidTicket {
                value: value.to_string(),
                reason: e.to_string(),
            })
        })?;

        info!("Ticket issued");
        Ok(ticket)
    }
}
