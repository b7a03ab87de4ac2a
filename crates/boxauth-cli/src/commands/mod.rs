//! Subcommand implementations.

pub mod forget;
pub mod login;
pub mod ticket;

use anyhow::{Context, Result};

use boxauth_core::{ApiKey, ProviderUrl};
use boxauth_http::BoxProvider;

use crate::cli::{Commands, ProviderArgs};

pub async fn handle(provider: ProviderArgs, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Login(args) => login::run(args, &provider).await,
        Commands::Ticket(args) => ticket::run(args, &provider).await,
        Commands::Forget(args) => forget::run(args),
    }
}

/// Build a provider from the global arguments.
pub fn connect(args: &ProviderArgs) -> Result<BoxProvider> {
    let api_key = args
        .api_key
        .as_deref()
        .context("An API key is required (--api-key or BOX_API_KEY)")?;
    let api_key = ApiKey::new(api_key).context("Invalid API key")?;
    let url = ProviderUrl::new(&args.base_url).context("Invalid provider URL")?;

    BoxProvider::new(url, api_key).context("Failed to create HTTP client")
}
