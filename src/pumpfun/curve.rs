//! Pump.fun bonding curve account decoder
//!
//! Record layout (little endian):
//!
//! | offset | size | field                  |
//! |--------|------|------------------------|
//! | 0      | 8    | anchor discriminator   |
//! | 8      | 8    | virtual_token_reserves |
//! | 16     | 8    | virtual_sol_reserves   |
//! | 24     | 8    | real_token_reserves    |
//! | 32     | 8    | real_sol_reserves      |
//! | 40     | 8    | token_total_supply     |
//! | 48     | 1    | complete               |
//! | 49     | 32   | creator                |
//!
//! Accounts may be longer than this; trailing bytes are ignored. Only the
//! length is validated: if the program changes its layout the decoded values
//! are silently wrong.

use crate::constants::{
    BONDING_CURVE_DISCRIMINATOR, CURVE_COMPLETE_OFFSET, CURVE_CREATOR_OFFSET, CURVE_MIN_DATA_LEN,
    CURVE_REAL_SOL_RESERVES_OFFSET, CURVE_REAL_TOKEN_RESERVES_OFFSET,
    CURVE_TOKEN_TOTAL_SUPPLY_OFFSET, CURVE_VIRTUAL_SOL_RESERVES_OFFSET,
    CURVE_VIRTUAL_TOKEN_RESERVES_OFFSET,
};
use crate::errors::{LiquidatorError, LiquidatorResult};
use solana_sdk::pubkey::Pubkey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BondingCurveState {
    pub discriminator: [u8; 8],
    pub virtual_token_reserves: u64,
    pub virtual_sol_reserves: u64,
    pub real_token_reserves: u64,
    pub real_sol_reserves: u64,
    pub token_total_supply: u64,
    /// Set once the curve has migrated; sells against it then fail remotely
    pub complete: bool,
    pub creator: Pubkey,
}

impl BondingCurveState {
    /// `bonding_curve` is only used in the error message
    pub fn decode(bonding_curve: &Pubkey, data: &[u8]) -> LiquidatorResult<Self> {
        if data.len() < CURVE_MIN_DATA_LEN {
            return Err(LiquidatorError::CurveDataTooShort {
                bonding_curve: bonding_curve.to_string(),
                len: data.len(),
                expected: CURVE_MIN_DATA_LEN,
            });
        }

        let mut discriminator = [0u8; 8];
        discriminator.copy_from_slice(&data[0..8]);

        let mut creator = [0u8; 32];
        creator.copy_from_slice(&data[CURVE_CREATOR_OFFSET..CURVE_CREATOR_OFFSET + 32]);

        Ok(Self {
            discriminator,
            virtual_token_reserves: read_u64(data, CURVE_VIRTUAL_TOKEN_RESERVES_OFFSET),
            virtual_sol_reserves: read_u64(data, CURVE_VIRTUAL_SOL_RESERVES_OFFSET),
            real_token_reserves: read_u64(data, CURVE_REAL_TOKEN_RESERVES_OFFSET),
            real_sol_reserves: read_u64(data, CURVE_REAL_SOL_RESERVES_OFFSET),
            token_total_supply: read_u64(data, CURVE_TOKEN_TOTAL_SUPPLY_OFFSET),
            complete: data[CURVE_COMPLETE_OFFSET] != 0,
            creator: Pubkey::new_from_array(creator),
        })
    }

    pub fn has_expected_discriminator(&self) -> bool {
        self.discriminator == BONDING_CURVE_DISCRIMINATOR
    }
}

// Caller guarantees the length check above
fn read_u64(data: &[u8], offset: usize) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&data[offset..offset + 8]);
    u64::from_le_bytes(buf)
}
