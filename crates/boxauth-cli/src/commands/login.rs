//! Login command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;
use serde::Serialize;
use tracing::{info, warn};

use boxauth_core::{
    Attempt, AuthenticatedSession, Credentials, SessionState, SessionToken, Ticket,
    TicketIssuer, TokenFinalizer,
};
use boxauth_http::BoxProvider;

use crate::cli::ProviderArgs;
use crate::{output, prompt};

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account login (prompted if omitted)
    #[arg(long)]
    pub login: Option<String>,

    /// Account password (prompted if omitted). When given, a rejection ends the login
    #[arg(long)]
    pub password: Option<String>,

    /// Number of submissions before giving up
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: u32,

    /// Log in through the browser login page instead of submitting credentials
    #[arg(long, conflicts_with_all = ["login", "password"])]
    pub web: bool,

    /// Print a shell line to keep the session token for the next run
    #[arg(long)]
    pub remember: bool,

    /// Reconnect with a token from a previous session instead of logging in
    #[arg(long, env = "BOX_AUTH_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct LoginOutput<'a> {
    token: &'a str,
    login: Option<&'a str>,
    user_id: Option<u64>,
    reconnected: bool,
}

pub async fn run(args: LoginArgs, provider_args: &ProviderArgs) -> Result<()> {
    if let Some(token) = args.token.as_deref() {
        let token = SessionToken::new(token).context("Invalid session token")?;
        return report_reconnected(&SessionState::restored(token), args.json);
    }

    let provider = super::connect(provider_args)?;

    output::status("Requesting ticket...");
    let ticket = provider
        .request_ticket()
        .await
        .context("Failed to get a ticket, verify the API key")?;

    if args.web {
        output::status(&format!(
            "Open {} to log in",
            provider.login_page_url(&ticket)
        ));
        prompt::wait_for_enter("Press Enter once you have logged in in the browser...")?;
    } else if !submit_credentials(&provider, ticket.clone(), &args).await? {
        bail!("Connection to Box failed");
    }

    let session = provider
        .finalize(&ticket)
        .await
        .context("Failed to obtain the session token")?;

    let mut state = SessionState::new();
    state.remember(session.token.clone(), args.remember);
    report_connected(&session, &state, args.json)
}

/// Prompt and submit until the provider accepts, the attempts run out, or
/// non-interactive credentials are rejected. Returns true on acceptance.
async fn submit_credentials(
    provider: &BoxProvider,
    ticket: Ticket,
    args: &LoginArgs,
) -> Result<bool> {
    let blank_login = args.login.as_deref().is_some_and(|l| l.trim().is_empty());
    if blank_login || args.password.as_deref() == Some("") {
        bail!("Login and password must not be empty");
    }

    let mut episode = provider.begin_login(ticket);

    loop {
        let login = match &args.login {
            Some(login) => login.clone(),
            None => prompt::line("Login: ")?,
        };
        let password = match &args.password {
            Some(password) => password.clone(),
            None => prompt::password("Password: ")?,
        };

        let Ok(credentials) = Credentials::new(login, password) else {
            output::error("Login and password are required");
            continue;
        };
        match episode.submit(&credentials).await.context("Login failed")? {
            Attempt::Accepted => {
                info!(attempts = episode.attempts(), "Logged in");
                return Ok(true);
            }
            Attempt::Rejected { attempts } => {
                output::error("Invalid login or password");
                if args.password.is_some() || attempts >= args.max_attempts {
                    warn!(attempts, "Giving up");
                    episode.abandon();
                    return Ok(false);
                }
                output::status("Try again.");
            }
        }
    }
}

fn report_connected(
    session: &AuthenticatedSession,
    state: &SessionState,
    json: bool,
) -> Result<()> {
    let token = session.token.as_str();

    if json {
        return output::json(&LoginOutput {
            token,
            login: Some(session.user.login.as_str()).filter(|l| !l.is_empty()),
            user_id: session.user.user_id,
            reconnected: false,
        });
    }

    output::success("You are now connected to Box");
    println!();
    if !session.user.login.is_empty() {
        output::field("Login", &session.user.login);
    }
    if let Some(id) = session.user.user_id {
        output::field("User ID", &id.to_string());
    }
    if let (Some(used), Some(amount)) = (session.user.space_used, session.user.space_amount) {
        output::field("Space", &format!("{used} / {amount} bytes"));
    }
    output::field("Token", token);
    if let Some(kept) = state.token_to_persist() {
        println!();
        println!("export BOX_AUTH_TOKEN={}", kept.as_str());
    }

    Ok(())
}

fn report_reconnected(state: &SessionState, json: bool) -> Result<()> {
    let token = state
        .token()
        .context("No session token to reconnect with")?
        .as_str();

    if json {
        return output::json(&LoginOutput {
            token,
            login: None,
            user_id: None,
            reconnected: true,
        });
    }

    output::success("You are reconnected to Box with your previous credentials");
    output::field("Token", token);
    Ok(())
}
