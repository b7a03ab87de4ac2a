//! Scripted transport shared by the protocol tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use boxauth_core::error::{StatusError, TransportError};
use boxauth_core::{Method, ProviderUrl, Request, Result, Ticket, Transport};

/// A canned reply for the next request.
pub enum Reply {
    Body(String),
    Status(u16),
    ConnectionReset,
}

impl Reply {
    pub fn body(text: &str) -> Self {
        Reply::Body(text.to_string())
    }
}

/// Transport that answers from a script and records every request it sees.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<Request>>,
}

impl ScriptedTransport {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn push(&self, reply: Reply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub fn methods(&self) -> Vec<Method> {
        self.requests().iter().map(|r| r.method).collect()
    }

    pub fn posts(&self) -> Vec<Request> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == Method::Post)
            .collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute_request(&self, request: Request) -> Result<Vec<u8>> {
        let url = request.url.clone();
        self.requests.lock().unwrap().push(request);

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected request: script exhausted");

        match reply {
            Reply::Body(text) => Ok(text.into_bytes()),
            Reply::Status(status) => Err(StatusError::new(status, url).into()),
            Reply::ConnectionReset => Err(TransportError::Connection {
                message: "connection reset by peer".to_string(),
            }
            .into()),
        }
    }
}

pub fn provider() -> ProviderUrl {
    ProviderUrl::new("https://www.box.net").unwrap()
}

pub fn ticket() -> Ticket {
    Ticket::new("tkt123").unwrap()
}

pub const AUTH_URL: &str = "https://www.box.net/api/1.0/auth/tkt123";

/// A login page carrying `token` the way the provider renders it.
pub fn login_page(token: &str) -> String {
    format!(
        "<html><form method='post'>\
         <input type='hidden' name='request_token' value='{token}'>\
         <input name='login'><input name='password' type='password'>\
         </form></html>"
    )
}

/// A rejection page: the login form again with a new token and an error banner.
pub fn rejection_page(token: &str) -> String {
    format!(
        "<div class='error'>Invalid login or password</div>{}",
        login_page(token)
    )
}

pub const SUCCESS_PAGE: &str =
    "<html><body><div id='api_auth_success'>You have logged in.</div></body></html>";
