//! HTTP transport trait.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::Result;

/// HTTP method of a [`Request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// A request issued by the protocol core.
///
/// POST requests carry an ordered, url-encoded form. GET requests never do.
#[derive(Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub form: Vec<(&'static str, String)>,
}

impl Request {
    /// A GET request for `url`.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            form: Vec::new(),
        }
    }

    /// A form POST to `url`.
    pub fn post_form(url: impl Into<String>, form: Vec<(&'static str, String)>) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            form,
        }
    }

    /// Returns the value of a form field, if present.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
    }
}

// The form carries the password; only field names are shown.
impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.form.iter().map(|(name, _)| *name).collect();
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("form", &fields)
            .finish()
    }
}

/// Executes requests against the provider and returns raw response bodies.
///
/// Implementations must report connection-level failures as
/// [`Error::Transport`](crate::Error::Transport) and non-success HTTP statuses
/// as [`Error::Status`](crate::Error::Status), never one as the other.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue `request` and return the full response body.
    async fn execute_request(&self, request: Request) -> Result<Vec<u8>>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute_request(&self, request: Request) -> Result<Vec<u8>> {
        (**self).execute_request(request).await
    }
}
