//! Interactive terminal prompts.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};

/// Read one trimmed line from stdin after printing `label` to stderr.
pub fn line(label: &str) -> Result<String> {
    eprint!("{label}");
    io::stderr().flush()?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;
    if read == 0 {
        bail!("stdin closed");
    }
    Ok(input.trim().to_string())
}

/// Read a password without echoing it.
pub fn password(label: &str) -> Result<String> {
    rpassword::prompt_password(label).context("Failed to read password")
}

/// Block until the user presses Enter.
pub fn wait_for_enter(label: &str) -> Result<()> {
    line(label).map(|_| ())
}
