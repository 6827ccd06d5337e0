//! Decides which holdings were issued through the pump.fun bonding curve.
//!
//! A holding matches when its bonding curve PDA exists and is owned by the
//! pump.fun program. Lookup failures are reported separately from true
//! negatives and never propagate.

use super::pda::derive_bonding_curve;
use crate::constants::PUMPFUN_PROGRAM_ID;
use crate::logger::{self, LogTag};
use crate::rpc::RpcClientMethods;
use crate::wallet::TokenHolding;
use futures::future::join_all;
use solana_sdk::pubkey::Pubkey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurveMatch {
    Match,
    NoMatch,
    LookupFailed(String),
}

impl CurveMatch {
    pub fn label(&self) -> &'static str {
        match self {
            CurveMatch::Match => "Pump.fun Token",
            CurveMatch::NoMatch => "Unknown",
            CurveMatch::LookupFailed(_) => "Unknown (lookup failed)",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClassifiedHolding {
    pub holding: TokenHolding,
    pub bonding_curve: Pubkey,
    pub classification: CurveMatch,
}

pub async fn classify_holding<R: RpcClientMethods + ?Sized>(rpc: &R, mint: &Pubkey) -> CurveMatch {
    let bonding_curve = derive_bonding_curve(mint);

    match rpc.get_account(&bonding_curve).await {
        Ok(Some(account)) if account.owner == PUMPFUN_PROGRAM_ID => CurveMatch::Match,
        Ok(Some(account)) => {
            logger::debug(
                LogTag::Classifier,
                &format!("{}: curve {} owned by {}", mint, bonding_curve, account.owner),
            );
            CurveMatch::NoMatch
        }
        Ok(None) => CurveMatch::NoMatch,
        Err(e) => {
            logger::warning(
                LogTag::Classifier,
                &format!("Curve lookup for {} failed: {}", mint, e),
            );
            CurveMatch::LookupFailed(e.to_string())
        }
    }
}

/// Classify every holding. Lookups run concurrently; results keep the
/// order of `holdings`.
pub async fn classify_holdings<R: RpcClientMethods + ?Sized>(
    rpc: &R,
    holdings: Vec<TokenHolding>,
) -> Vec<ClassifiedHolding> {
    let lookups = holdings.iter().map(|holding| classify_holding(rpc, &holding.mint));
    let results = join_all(lookups).await;

    holdings
        .into_iter()
        .zip(results)
        .map(|(holding, classification)| {
            logger::debug(
                LogTag::Classifier,
                &format!("{} -> {}", holding.mint, classification.label()),
            );
            ClassifiedHolding {
                bonding_curve: derive_bonding_curve(&holding.mint),
                holding,
                classification,
            }
        })
        .collect()
}
