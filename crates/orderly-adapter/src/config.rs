/*
[INPUT]:  ORDERLY_* environment variables
[OUTPUT]: Immutable process configuration (endpoint, credentials, chain)
[POS]:    Configuration layer - loaded once at startup
[UPDATE]: When adding configuration options or changing defaults
*/

use tracing::info;

use crate::auth::Credentials;
use crate::http::Result;

/// Mainnet REST endpoint, used when no base endpoint is configured.
pub const MAINNET_BASE_URL: &str = "https://api.orderly.org";
/// Testnet REST endpoint.
pub const TESTNET_BASE_URL: &str = "https://testnet-api.orderly.org";

const DEFAULT_CHAIN_ID: u64 = 42161;
const DEFAULT_BROKER_ID: &str = "woofi_pro";

/// Process configuration, read from the environment once at startup.
///
/// Components never read ambient environment state themselves; this struct
/// is the only place that does, and it is immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub credentials: Credentials,
    pub chain_id: u64,
    pub broker_id: String,
}

impl Config {
    /// Load configuration from `ORDERLY_*` environment variables.
    ///
    /// Credential presence is not enforced here; the validator reports the
    /// exact missing fields at signing time instead.
    pub fn from_env() -> Result<Self> {
        let base_url = env_or("ORDERLY_BASE_ENDPOINT", MAINNET_BASE_URL);
        let credentials = Credentials::new(
            env_or("ORDERLY_API_KEY", ""),
            env_or("ORDERLY_SECRET_KEY", ""),
            env_or("ORDERLY_ACCOUNT_ID", ""),
        );
        let chain_id = match std::env::var("ORDERLY_CHAIN_ID") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                crate::http::OrderlyError::Config(format!(
                    "ORDERLY_CHAIN_ID must be an integer, got {raw:?}"
                ))
            })?,
            Err(_) => DEFAULT_CHAIN_ID,
        };
        let broker_id = env_or("ORDERLY_BROKER_ID", DEFAULT_BROKER_ID);

        let missing = credentials.missing_fields();
        info!(
            base_url = %base_url,
            chain_id,
            broker_id = %broker_id,
            missing_credentials = ?missing,
            "loaded configuration"
        );

        Ok(Self {
            base_url,
            credentials,
            chain_id,
            broker_id,
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
