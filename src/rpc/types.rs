use serde_json::Value;
use solana_client::client_error::ClientError;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RpcError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Transaction {signature} failed: {reason}")]
    TransactionFailed { signature: String, reason: String },

    #[error("Transaction {signature} not confirmed after {timeout_secs}s")]
    ConfirmationTimeout { signature: String, timeout_secs: u64 },
}

impl From<ClientError> for RpcError {
    fn from(err: ClientError) -> Self {
        RpcError::Request(err.to_string())
    }
}

pub type RpcResult<T> = Result<T, RpcError>;

/// Token account as returned by `getTokenAccountsByOwner` (jsonParsed)
#[derive(Debug, Clone, PartialEq)]
pub struct TokenAccountInfo {
    /// The token account address
    pub account: Pubkey,
    pub mint: Pubkey,
    /// Raw amount in base units
    pub amount: u64,
    pub decimals: u8,
}

/// Parse the `parsed` object of a jsonParsed SPL token account:
/// `{"type": "account", "info": {"mint": .., "tokenAmount": {"amount": .., "decimals": ..}}}`
pub fn parse_token_account(pubkey: &str, parsed: &Value) -> RpcResult<TokenAccountInfo> {
    let account = Pubkey::from_str(pubkey)
        .map_err(|e| RpcError::InvalidResponse(format!("Invalid token account '{}': {}", pubkey, e)))?;

    let info = parsed
        .get("info")
        .ok_or_else(|| RpcError::InvalidResponse(format!("Account {} has no parsed info", pubkey)))?;

    let mint_str = info
        .get("mint")
        .and_then(|m| m.as_str())
        .ok_or_else(|| RpcError::InvalidResponse(format!("Account {} has no mint", pubkey)))?;
    let mint = Pubkey::from_str(mint_str)
        .map_err(|e| RpcError::InvalidResponse(format!("Invalid mint '{}': {}", mint_str, e)))?;

    let token_amount = info
        .get("tokenAmount")
        .ok_or_else(|| RpcError::InvalidResponse(format!("Account {} has no tokenAmount", pubkey)))?;

    // Amount is a decimal string so it survives u64 values above 2^53
    let amount = token_amount
        .get("amount")
        .and_then(|a| a.as_str())
        .and_then(|s| s.parse::<u64>().ok())
        .ok_or_else(|| RpcError::InvalidResponse(format!("Account {} has invalid amount", pubkey)))?;

    let decimals = token_amount
        .get("decimals")
        .and_then(|d| d.as_u64())
        .and_then(|d| u8::try_from(d).ok())
        .ok_or_else(|| RpcError::InvalidResponse(format!("Account {} has invalid decimals", pubkey)))?;

    Ok(TokenAccountInfo {
        account,
        mint,
        amount,
        decimals,
    })
}
