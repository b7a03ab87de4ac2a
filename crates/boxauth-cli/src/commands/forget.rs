//! Forget command implementation.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use boxauth_core::{SessionState, SessionToken};

use crate::output;

#[derive(Args, Debug)]
pub struct ForgetArgs {
    /// Remembered session token to drop
    #[arg(long, env = "BOX_AUTH_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ForgetOutput {
    forgotten: bool,
}

pub fn run(args: ForgetArgs) -> Result<()> {
    let mut state = match args.token.as_deref().filter(|t| !t.is_empty()) {
        Some(token) => {
            SessionState::restored(SessionToken::new(token).context("Invalid session token")?)
        }
        None => SessionState::new(),
    };
    let forgotten = state.is_remembered();

    state.forget();

    if args.json {
        return output::json(&ForgetOutput { forgotten });
    }

    if forgotten {
        output::success("Previous credentials forgotten");
    } else {
        output::status("No remembered session");
    }
    println!("unset BOX_AUTH_TOKEN");
    Ok(())
}
