//! Resolves every address the sell instruction needs for one mint

use super::curve::BondingCurveState;
use super::pda::{
    derive_associated_bonding_curve, derive_bonding_curve, derive_creator_vault,
    derive_user_token_account,
};
use crate::errors::{LiquidatorError, LiquidatorResult};
use crate::logger::{self, LogTag};
use crate::rpc::RpcClientMethods;
use solana_sdk::pubkey::Pubkey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PumpfunAddresses {
    pub bonding_curve: Pubkey,
    pub associated_bonding_curve: Pubkey,
    /// Wallet's associated token account for the mint
    pub user_token_account: Pubkey,
    pub creator_vault: Pubkey,
}

/// Fetch the curve account to learn the creator, then derive the rest.
///
/// Fails with `CurveNotFound` when the curve account does not exist and with
/// `CurveDataTooShort` when it cannot hold a creator.
pub async fn get_pumpfun_addresses<R: RpcClientMethods + ?Sized>(
    rpc: &R,
    owner: &Pubkey,
    mint: &Pubkey,
) -> LiquidatorResult<PumpfunAddresses> {
    let bonding_curve = derive_bonding_curve(mint);

    let account = rpc
        .get_account(&bonding_curve)
        .await?
        .ok_or_else(|| LiquidatorError::CurveNotFound {
            mint: mint.to_string(),
            bonding_curve: bonding_curve.to_string(),
        })?;

    let curve = BondingCurveState::decode(&bonding_curve, &account.data)?;
    if !curve.has_expected_discriminator() {
        logger::debug(
            LogTag::Pumpfun,
            &format!(
                "Curve {} has unexpected discriminator {:?}, decoding anyway",
                bonding_curve, curve.discriminator
            ),
        );
    }
    if curve.complete {
        logger::debug(
            LogTag::Pumpfun,
            &format!("Curve {} for {} is complete, sell will likely fail", bonding_curve, mint),
        );
    }

    let addresses = PumpfunAddresses {
        bonding_curve,
        associated_bonding_curve: derive_associated_bonding_curve(&bonding_curve, mint),
        user_token_account: derive_user_token_account(owner, mint),
        creator_vault: derive_creator_vault(&curve.creator),
    };

    logger::debug(
        LogTag::Pumpfun,
        &format!(
            "{}: creator={} curve={} curve_ata={} user_ata={} vault={}",
            mint,
            curve.creator,
            addresses.bonding_curve,
            addresses.associated_bonding_curve,
            addresses.user_token_account,
            addresses.creator_vault
        ),
    );

    Ok(addresses)
}
