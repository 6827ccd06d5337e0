//! RPC client methods used by the liquidation pipeline

use super::RpcClient;
use crate::logger::{self, LogTag};
use crate::rpc::types::{parse_token_account, RpcError, RpcResult, TokenAccountInfo};
use async_trait::async_trait;
use solana_account_decoder::UiAccountData;
use solana_client::rpc_config::RpcSendTransactionConfig;
use solana_client::rpc_request::TokenAccountsFilter;
use solana_sdk::{
    account::Account, hash::Hash, pubkey::Pubkey, signature::Signature,
    transaction::Transaction,
};
use std::time::Instant;

/// Everything the pipeline needs from the network
#[async_trait]
pub trait RpcClientMethods: Send + Sync {
    /// Token accounts owned by `owner` under `token_program`, jsonParsed
    async fn get_token_accounts_by_owner(
        &self,
        owner: &Pubkey,
        token_program: &Pubkey,
    ) -> RpcResult<Vec<TokenAccountInfo>>;

    /// `Ok(None)` when the account does not exist
    async fn get_account(&self, pubkey: &Pubkey) -> RpcResult<Option<Account>>;

    async fn get_latest_blockhash(&self) -> RpcResult<Hash>;

    /// Send once and wait until the configured commitment is reached
    async fn send_and_confirm_transaction(
        &self,
        transaction: &Transaction,
        skip_preflight: bool,
    ) -> RpcResult<Signature>;
}

#[async_trait]
impl RpcClientMethods for RpcClient {
    async fn get_token_accounts_by_owner(
        &self,
        owner: &Pubkey,
        token_program: &Pubkey,
    ) -> RpcResult<Vec<TokenAccountInfo>> {
        logger::debug(
            LogTag::Rpc,
            &format!("getTokenAccountsByOwner owner={} program={}", owner, token_program),
        );

        let keyed_accounts = self
            .client
            .get_token_accounts_by_owner(owner, TokenAccountsFilter::ProgramId(*token_program))
            .await?;

        let mut accounts = Vec::with_capacity(keyed_accounts.len());
        for keyed in keyed_accounts {
            match &keyed.account.data {
                UiAccountData::Json(parsed) => match parse_token_account(&keyed.pubkey, &parsed.parsed) {
                    Ok(info) => accounts.push(info),
                    Err(e) => logger::warning(
                        LogTag::Rpc,
                        &format!("Skipping token account {}: {}", keyed.pubkey, e),
                    ),
                },
                _ => logger::warning(
                    LogTag::Rpc,
                    &format!("Skipping token account {}: not jsonParsed", keyed.pubkey),
                ),
            }
        }

        Ok(accounts)
    }

    async fn get_account(&self, pubkey: &Pubkey) -> RpcResult<Option<Account>> {
        logger::verbose(LogTag::Rpc, &format!("getAccountInfo {}", pubkey));

        let response = self
            .client
            .get_account_with_commitment(pubkey, self.commitment)
            .await?;
        Ok(response.value)
    }

    async fn get_latest_blockhash(&self) -> RpcResult<Hash> {
        Ok(self.client.get_latest_blockhash().await?)
    }

    async fn send_and_confirm_transaction(
        &self,
        transaction: &Transaction,
        skip_preflight: bool,
    ) -> RpcResult<Signature> {
        let config = RpcSendTransactionConfig {
            skip_preflight,
            preflight_commitment: Some(self.commitment.commitment),
            ..RpcSendTransactionConfig::default()
        };

        let signature = self
            .client
            .send_transaction_with_config(transaction, config)
            .await?;

        logger::debug(LogTag::Rpc, &format!("Sent {}, waiting for confirmation", signature));
        self.confirm_signature(&signature).await?;

        Ok(signature)
    }
}

impl RpcClient {
    /// Poll signature status until it lands, fails, or the timeout elapses.
    /// Status lookup errors are treated as "not yet known".
    async fn confirm_signature(&self, signature: &Signature) -> RpcResult<()> {
        let started = Instant::now();

        loop {
            match self
                .client
                .get_signature_status_with_commitment(signature, self.commitment)
                .await
            {
                Ok(Some(Ok(()))) => return Ok(()),
                Ok(Some(Err(e))) => {
                    return Err(RpcError::TransactionFailed {
                        signature: signature.to_string(),
                        reason: e.to_string(),
                    });
                }
                Ok(None) => {}
                Err(e) => logger::debug(
                    LogTag::Rpc,
                    &format!("Status lookup for {} failed: {}", signature, e),
                ),
            }

            if started.elapsed() >= self.confirm_timeout {
                return Err(RpcError::ConfirmationTimeout {
                    signature: signature.to_string(),
                    timeout_secs: self.confirm_timeout.as_secs(),
                });
            }

            tokio::time::sleep(self.confirm_poll_interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_confirmed_status_returns_ok() {
        let client = RpcClient::new_mock("succeeds", Duration::from_secs(5));
        client.confirm_signature(&Signature::default()).await.unwrap();
    }

    #[tokio::test]
    async fn test_failed_status_returns_transaction_failed() {
        let client = RpcClient::new_mock("instruction_error", Duration::from_secs(5));
        let err = client.confirm_signature(&Signature::default()).await.unwrap_err();

        match err {
            RpcError::TransactionFailed { signature, reason } => {
                assert_eq!(signature, Signature::default().to_string());
                assert!(!reason.is_empty());
            }
            other => panic!("expected TransactionFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unknown_signature_times_out() {
        let client = RpcClient::new_mock("sig_not_found", Duration::from_millis(30));
        let err = client.confirm_signature(&Signature::default()).await.unwrap_err();
        assert!(matches!(err, RpcError::ConfirmationTimeout { timeout_secs: 0, .. }));
    }

    #[tokio::test]
    async fn test_status_lookup_errors_keep_polling_until_timeout() {
        // "fails" answers every request with null, which does not parse
        let client = RpcClient::new_mock("fails", Duration::from_millis(30));
        let started = Instant::now();
        let err = client.confirm_signature(&Signature::default()).await.unwrap_err();

        assert!(matches!(err, RpcError::ConfirmationTimeout { .. }));
        assert!(started.elapsed() >= Duration::from_millis(30));
    }
}
