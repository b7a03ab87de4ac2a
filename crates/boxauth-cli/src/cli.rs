//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

use boxauth_core::DEFAULT_PROVIDER_URL;

use crate::commands::forget::ForgetArgs;
use crate::commands::login::LoginArgs;
use crate::commands::ticket::TicketArgs;

/// Log in to Box with the ticket-based v1 flow.
#[derive(Parser, Debug)]
#[command(name = "boxauth")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub provider: ProviderArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to log in and as which application.
#[derive(Args, Debug)]
pub struct ProviderArgs {
    /// Application API key
    #[arg(long, env = "BOX_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Provider base URL
    #[arg(long, env = "BOX_BASE_URL", default_value = DEFAULT_PROVIDER_URL, global = true)]
    pub base_url: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and print the session token
    Login(LoginArgs),

    /// Request a login ticket and print it
    Ticket(TicketArgs),

    /// Drop a remembered session token
    Forget(ForgetArgs),
}
