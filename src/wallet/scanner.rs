/// Wallet token account scanner
use crate::constants::TOKEN_PROGRAM_ID;
use crate::logger::{self, LogTag};
use crate::rpc::{RpcClientMethods, RpcResult, TokenAccountInfo};
use solana_sdk::pubkey::Pubkey;

/// A non-empty token balance held by the wallet
#[derive(Debug, Clone, PartialEq)]
pub struct TokenHolding {
    pub mint: Pubkey,
    /// The wallet's token account holding the balance
    pub token_account: Pubkey,
    pub amount: u64,
    pub decimals: u8,
}

impl TokenHolding {
    /// Amount in whole tokens (`amount / 10^decimals`), for display only
    pub fn ui_amount(&self) -> f64 {
        (self.amount as f64) / 10f64.powi(self.decimals as i32)
    }
}

impl From<TokenAccountInfo> for TokenHolding {
    fn from(info: TokenAccountInfo) -> Self {
        Self {
            mint: info.mint,
            token_account: info.account,
            amount: info.amount,
            decimals: info.decimals,
        }
    }
}

/// List the wallet's SPL Token accounts with a non-zero balance.
/// RPC failures propagate.
pub async fn get_token_holdings<R: RpcClientMethods + ?Sized>(
    rpc: &R,
    owner: &Pubkey,
) -> RpcResult<Vec<TokenHolding>> {
    logger::info(LogTag::Scanner, &format!("Scanning wallet {} for SPL tokens...", owner));

    let accounts = rpc.get_token_accounts_by_owner(owner, &TOKEN_PROGRAM_ID).await?;
    logger::info(LogTag::Scanner, &format!("Found {} token accounts", accounts.len()));

    let holdings = filter_non_empty(accounts);
    logger::info(LogTag::Scanner, &format!("Found {} tokens with balance", holdings.len()));

    for holding in &holdings {
        logger::debug(
            LogTag::Scanner,
            &format!(
                "{} balance {} ({} raw, {} decimals) in {}",
                holding.mint,
                holding.ui_amount(),
                holding.amount,
                holding.decimals,
                holding.token_account
            ),
        );
    }

    Ok(holdings)
}

pub fn filter_non_empty(accounts: Vec<TokenAccountInfo>) -> Vec<TokenHolding> {
    accounts
        .into_iter()
        .filter(|account| account.amount > 0)
        .map(TokenHolding::from)
        .collect()
}
