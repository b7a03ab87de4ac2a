//! Ticket command implementation.

use anyhow::{Context, Result};
use clap::Args;

use boxauth_core::TicketIssuer;

use crate::cli::ProviderArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct TicketArgs {
    /// Also print the browser login URL for the ticket
    #[arg(long)]
    pub url: bool,
}

pub async fn run(args: TicketArgs, provider_args: &ProviderArgs) -> Result<()> {
    let provider = super::connect(provider_args)?;

    let ticket = provider
        .request_ticket()
        .await
        .context("Failed to get a ticket, verify the API key")?;

    println!("{}", ticket);
    if args.url {
        output::field("Login URL", &provider.login_page_url(&ticket));
    }

    Ok(())
}
