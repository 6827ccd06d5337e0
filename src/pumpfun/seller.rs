//! Submits one sell-and-close transaction

use super::addresses::PumpfunAddresses;
use super::instructions::build_sell_transaction;
use crate::constants::SOLSCAN_TX_URL;
use crate::errors::LiquidatorResult;
use crate::logger::{self, LogTag};
use crate::rpc::RpcClientMethods;
use solana_sdk::{pubkey::Pubkey, signature::{Keypair, Signature}};

/// Sell the whole `amount` of `mint` and close the token account, waiting
/// for confirmation. Sent exactly once; a failure is returned, not retried.
pub async fn initiate_sell_order<R: RpcClientMethods + ?Sized>(
    rpc: &R,
    wallet: &Keypair,
    mint: &Pubkey,
    addresses: &PumpfunAddresses,
    amount: u64,
    skip_preflight: bool,
) -> LiquidatorResult<Signature> {
    let blockhash = rpc.get_latest_blockhash().await?;
    let transaction = build_sell_transaction(wallet, mint, addresses, amount, blockhash)?;

    logger::info(
        LogTag::Seller,
        &format!("Sending sell of {} base units of {}", amount, mint),
    );

    let signature = rpc.send_and_confirm_transaction(&transaction, skip_preflight).await?;

    logger::info(
        LogTag::Seller,
        &format!("Transaction confirmed: {}{}", SOLSCAN_TX_URL, signature),
    );

    Ok(signature)
}
