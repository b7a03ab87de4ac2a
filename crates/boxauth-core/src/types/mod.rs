//! Validated provider addressing types.

mod provider_url;

pub use provider_url::{DEFAULT_PROVIDER_URL, ProviderUrl};
