//! Solana RPC client
//!
//! Thin wrapper over the nonblocking Solana client carrying the commitment
//! and confirmation settings. The pipeline only sees it through
//! `RpcClientMethods`.

mod methods;

pub use methods::RpcClientMethods;

use crate::config::{parse_commitment, RpcConfig};
use crate::errors::LiquidatorResult;
use crate::logger::{self, LogTag};
use solana_client::nonblocking::rpc_client::RpcClient as SolanaRpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use std::sync::Arc;
use std::time::Duration;

pub struct RpcClient {
    client: Arc<SolanaRpcClient>,
    rpc_url: String,
    commitment: CommitmentConfig,
    confirm_timeout: Duration,
    confirm_poll_interval: Duration,
}

impl RpcClient {
    pub fn new(rpc_url: &str, commitment: CommitmentConfig) -> Self {
        logger::info(
            LogTag::Rpc,
            &format!("Initializing RPC client: {} ({:?})", rpc_url, commitment.commitment),
        );

        Self {
            client: Arc::new(SolanaRpcClient::new_with_commitment(rpc_url.to_string(), commitment)),
            rpc_url: rpc_url.to_string(),
            commitment,
            confirm_timeout: Duration::from_secs(60),
            confirm_poll_interval: Duration::from_millis(500),
        }
    }

    pub fn from_config(config: &RpcConfig) -> LiquidatorResult<Self> {
        let commitment = parse_commitment(&config.commitment)?;
        let mut client = Self::new(&config.url, commitment);
        client.confirm_timeout = Duration::from_secs(config.confirm_timeout_secs);
        client.confirm_poll_interval = Duration::from_millis(config.confirm_poll_interval_ms.max(50));
        Ok(client)
    }

    pub fn url(&self) -> &str {
        &self.rpc_url
    }

    /// Client over the Solana mock sender. `mode` is the mock url that picks
    /// the canned responses ("succeeds", "instruction_error", "sig_not_found",
    /// "fails").
    #[cfg(test)]
    pub(crate) fn new_mock(mode: &str, confirm_timeout: Duration) -> Self {
        Self {
            client: Arc::new(SolanaRpcClient::new_mock(mode.to_string())),
            rpc_url: mode.to_string(),
            commitment: CommitmentConfig::confirmed(),
            confirm_timeout,
            confirm_poll_interval: Duration::from_millis(5),
        }
    }
}
