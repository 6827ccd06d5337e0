//! Program-derived addresses of the pump.fun bonding curve program
//!
//! All derivations are pure functions of their inputs and the fixed program
//! ids in `constants`.

use crate::constants::{
    ASSOCIATED_TOKEN_PROGRAM_ID, BONDING_CURVE_SEED, CREATOR_VAULT_SEED, PUMPFUN_PROGRAM_ID,
    TOKEN_PROGRAM_ID,
};
use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address;

/// `["bonding-curve", mint]` under the pump.fun program
pub fn derive_bonding_curve(mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[BONDING_CURVE_SEED, mint.as_ref()], &PUMPFUN_PROGRAM_ID).0
}

/// `["creator-vault", creator]` under the pump.fun program
pub fn derive_creator_vault(creator: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[CREATOR_VAULT_SEED, creator.as_ref()], &PUMPFUN_PROGRAM_ID).0
}

/// Token account of the bonding curve itself: the associated token address
/// of `bonding_curve` for `mint`.
pub fn derive_associated_bonding_curve(bonding_curve: &Pubkey, mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[bonding_curve.as_ref(), TOKEN_PROGRAM_ID.as_ref(), mint.as_ref()],
        &ASSOCIATED_TOKEN_PROGRAM_ID,
    )
    .0
}

/// The wallet's associated token account for `mint`
pub fn derive_user_token_account(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(owner, mint)
}
