use crate::utils::error::{QueueError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::Parser;

pub const STORE_ENV: &str = "SHOPIFY_STORE";
pub const ACCESS_TOKEN_ENV: &str = "SHOPIFY_ACCESS_TOKEN";

/// Credentials for one store, loaded once at startup and injected into the
/// handler state rather than read from the ambient environment per request.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Store subdomain, i.e. the `{store}` in `{store}.myshopify.com`.
    pub store: String,
    /// Admin API access token, carried as an opaque credential.
    pub access_token: String,
}

impl StoreConfig {
    pub fn new(store: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            store: store.into(),
            access_token: access_token.into(),
        }
    }

    pub fn from_env() -> Result<Self> {
        let store = std::env::var(STORE_ENV).map_err(|_| QueueError::MissingConfigError {
            field: STORE_ENV.to_string(),
        })?;
        let access_token =
            std::env::var(ACCESS_TOKEN_ENV).map_err(|_| QueueError::MissingConfigError {
                field: ACCESS_TOKEN_ENV.to_string(),
            })?;

        let config = Self {
            store,
            access_token,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Validate for StoreConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string(STORE_ENV, &self.store)?;
        validate_non_empty_string(ACCESS_TOKEN_ENV, &self.access_token)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "queue-counter")]
#[command(about = "Counts open orders containing a live-tagged product")]
pub struct CliConfig {
    #[arg(long, default_value = "3000")]
    pub port: u16,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
