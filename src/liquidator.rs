//! Scan-and-sell pipeline
//!
//! scan → classify (concurrent) → for each pump.fun token, in order:
//! derive addresses → sell and close. Only the wallet scan can fail the
//! run; everything after it is recorded per token in the report.

use crate::config::SellerConfig;
use crate::constants::SOLSCAN_TX_URL;
use crate::errors::LiquidatorResult;
use crate::logger::{self, LogTag};
use crate::pumpfun::{
    build_sell_transaction, classify_holdings, get_pumpfun_addresses, initiate_sell_order,
    CurveMatch, PumpfunAddresses,
};
use crate::rpc::RpcClientMethods;
use crate::wallet::{get_token_holdings, TokenHolding};
use colored::Colorize;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};
use std::time::Duration;

/// Everything one liquidation pass needs, borrowed immutably for its length
pub struct LiquidatorContext<R: RpcClientMethods> {
    pub rpc: R,
    pub wallet: Keypair,
    pub seller: SellerConfig,
}

impl<R: RpcClientMethods> LiquidatorContext<R> {
    pub fn new(rpc: R, wallet: Keypair, seller: SellerConfig) -> Self {
        Self { rpc, wallet, seller }
    }

    pub fn owner(&self) -> Pubkey {
        self.wallet.pubkey()
    }
}

#[derive(Debug, Clone, Default)]
pub struct LiquidationReport {
    pub holdings_scanned: usize,
    pub pump_tokens: usize,
    pub sold: Vec<(Pubkey, Signature)>,
    /// Mints whose derivation or sell failed, with the reason
    pub failed: Vec<(Pubkey, String)>,
    /// Mints that could not be classified; never sold
    pub lookup_failures: Vec<(Pubkey, String)>,
    /// Dry run only: mints a transaction was built for
    pub simulated: Vec<Pubkey>,
}

impl LiquidationReport {
    pub fn print_summary(&self) {
        println!("\n{}", "LIQUIDATION REPORT".bold());
        println!("==================");
        println!("Holdings scanned:     {}", self.holdings_scanned);
        println!("Pump.fun tokens:      {}", self.pump_tokens);
        if !self.simulated.is_empty() {
            println!("Would sell (dry run): {}", self.simulated.len());
        }
        println!("Sold:                 {}", self.sold.len().to_string().green());
        println!("Failed:               {}", self.failed.len().to_string().red());
        println!("Lookup failures:      {}", self.lookup_failures.len().to_string().yellow());

        if !self.sold.is_empty() {
            println!("\nSold:");
            for (i, (mint, signature)) in self.sold.iter().enumerate() {
                println!("  {}. {} {}{}", i + 1, mint, SOLSCAN_TX_URL, signature);
            }
        }

        if !self.failed.is_empty() {
            println!("\n{}", "Failed:".red());
            for (i, (mint, reason)) in self.failed.iter().enumerate() {
                println!("  {}. {} - {}", i + 1, mint, reason);
            }
        }

        if !self.lookup_failures.is_empty() {
            println!("\n{}", "Not classified:".yellow());
            for (i, (mint, reason)) in self.lookup_failures.iter().enumerate() {
                println!("  {}. {} - {}", i + 1, mint, reason);
            }
        }
    }
}

/// Run one full pass. `Err` only when the wallet scan fails.
pub async fn scan_and_sell<R: RpcClientMethods>(
    ctx: &LiquidatorContext<R>,
) -> LiquidatorResult<LiquidationReport> {
    let owner = ctx.owner();
    let mut report = LiquidationReport::default();

    let holdings = get_token_holdings(&ctx.rpc, &owner).await?;
    report.holdings_scanned = holdings.len();

    let classified = classify_holdings(&ctx.rpc, holdings).await;

    let mut targets: Vec<TokenHolding> = Vec::new();
    for item in classified {
        logger::info(
            LogTag::Classifier,
            &format!(
                "{} ({} tokens): {}",
                item.holding.mint,
                item.holding.ui_amount(),
                item.classification.label()
            ),
        );
        match item.classification {
            CurveMatch::Match => targets.push(item.holding),
            CurveMatch::NoMatch => {}
            CurveMatch::LookupFailed(reason) => {
                report.lookup_failures.push((item.holding.mint, reason))
            }
        }
    }
    report.pump_tokens = targets.len();

    if targets.is_empty() {
        logger::info(LogTag::System, "No pump.fun tokens to sell");
        return Ok(report);
    }

    logger::info(
        LogTag::System,
        &format!("Selling {} pump.fun tokens", targets.len()),
    );

    let delay = Duration::from_millis(ctx.seller.delay_between_sells_ms);
    for (index, holding) in targets.iter().enumerate() {
        if index > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        sell_holding(ctx, holding, &mut report).await;
    }

    Ok(report)
}

async fn sell_holding<R: RpcClientMethods>(
    ctx: &LiquidatorContext<R>,
    holding: &TokenHolding,
    report: &mut LiquidationReport,
) {
    let owner = ctx.owner();
    let mint = holding.mint;

    let addresses = match get_pumpfun_addresses(&ctx.rpc, &owner, &mint).await {
        Ok(addresses) => addresses,
        Err(e) => {
            logger::error(
                LogTag::Pumpfun,
                &format!("Could not derive addresses for {}: {}", mint, e),
            );
            report.failed.push((mint, e.to_string()));
            return;
        }
    };

    if addresses.user_token_account != holding.token_account {
        logger::warning(
            LogTag::Seller,
            &format!(
                "{} is held in {} which is not the associated token account {}",
                mint, holding.token_account, addresses.user_token_account
            ),
        );
    }

    if ctx.seller.dry_run {
        simulate_sell(ctx, holding, &addresses, report).await;
        return;
    }

    match initiate_sell_order(
        &ctx.rpc,
        &ctx.wallet,
        &mint,
        &addresses,
        holding.amount,
        ctx.seller.skip_preflight,
    )
    .await
    {
        Ok(signature) => report.sold.push((mint, signature)),
        Err(e) => {
            logger::error(LogTag::Seller, &format!("Sell of {} failed: {}", mint, e));
            report.failed.push((mint, e.to_string()));
        }
    }
}

async fn simulate_sell<R: RpcClientMethods>(
    ctx: &LiquidatorContext<R>,
    holding: &TokenHolding,
    addresses: &PumpfunAddresses,
    report: &mut LiquidationReport,
) {
    let built = match ctx.rpc.get_latest_blockhash().await {
        Ok(blockhash) => build_sell_transaction(
            &ctx.wallet,
            &holding.mint,
            addresses,
            holding.amount,
            blockhash,
        ),
        Err(e) => Err(e.into()),
    };

    match built {
        Ok(transaction) => {
            logger::info(
                LogTag::Seller,
                &format!(
                    "[DRY RUN] Would sell {} base units of {} ({} instructions, {} signature)",
                    holding.amount,
                    holding.mint,
                    transaction.message.instructions.len(),
                    transaction.signatures.len()
                ),
            );
            report.simulated.push(holding.mint);
        }
        Err(e) => {
            logger::error(
                LogTag::Seller,
                &format!("[DRY RUN] Could not build sell for {}: {}", holding.mint, e),
            );
            report.failed.push((holding.mint, e.to_string()));
        }
    }
}
