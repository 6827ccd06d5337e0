/// Global constants used across the liquidator
///
/// Program ids, PDA seeds, instruction discriminators and the on-chain
/// layout of the pump.fun bonding curve account. These must match what the
/// remote program expects byte for byte, otherwise the transaction is
/// rejected.
use solana_sdk::pubkey::Pubkey;

// ============================================================================
// SOLANA PROGRAM IDS
// ============================================================================

/// SPL Token program
pub const TOKEN_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

/// Associated Token Account program
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");

/// System program
pub const SYSTEM_PROGRAM_ID: Pubkey = solana_sdk::pubkey!("11111111111111111111111111111111");

// ============================================================================
// PUMP.FUN PROGRAM ACCOUNTS
// ============================================================================

/// Pump.fun bonding curve program
pub const PUMPFUN_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("6EF8rrecthR5Dkzon8Nwu78hRvfCKubJ14M5uBEwF6P");

/// Pump.fun global state account
pub const PUMPFUN_GLOBAL: Pubkey =
    solana_sdk::pubkey!("4wTV1YmiEkRvAtNtsSGPtUrqRYQMe5SKy2uB4Jjaxnjf");

/// Protocol fee recipient
pub const PUMPFUN_FEE_RECIPIENT: Pubkey =
    solana_sdk::pubkey!("CebN5WGQ4jvEPvsVU4EoHEpgzq1VV7AbicfhtW4xC9iM");

/// Anchor event authority of the pump.fun program
pub const PUMPFUN_EVENT_AUTHORITY: Pubkey =
    solana_sdk::pubkey!("Ce6TQqeHC9p8KetsN6JsjHK7UTZk7nasjjnr7XxXp9F1");

/// Fee configuration account read by the sell instruction
pub const PUMPFUN_FEE_CONFIG: Pubkey =
    solana_sdk::pubkey!("8Wf5TiAheLUqBrKXeYg2JtAFFMWtKdG2BSFgqUcPVwTt");

/// Pump.fun fee program
pub const PUMPFUN_FEE_PROGRAM: Pubkey =
    solana_sdk::pubkey!("pfeeUxB6jkeY1Hxd7CsFCAjcbHA9rWtchMGdZ6VojVZ");

// ============================================================================
// PDA SEEDS
// ============================================================================

/// Seed prefix of the bonding curve PDA: `["bonding-curve", mint]`
pub const BONDING_CURVE_SEED: &[u8] = b"bonding-curve";

/// Seed prefix of the creator fee vault PDA: `["creator-vault", creator]`
pub const CREATOR_VAULT_SEED: &[u8] = b"creator-vault";

// ============================================================================
// INSTRUCTION ENCODING
// ============================================================================

/// Anchor discriminator of the pump.fun `sell` instruction
pub const SELL_DISCRIMINATOR: [u8; 8] = [51, 230, 133, 164, 1, 127, 131, 173];

/// Sell payload: discriminator + amount (u64 LE) + min_sol_output (u64 LE)
pub const SELL_INSTRUCTION_DATA_LEN: usize = 24;

/// Number of accounts the `sell` instruction expects
pub const SELL_ACCOUNTS_LEN: usize = 14;

// ============================================================================
// BONDING CURVE ACCOUNT LAYOUT
// ============================================================================

/// Anchor discriminator of the `BondingCurve` account
pub const BONDING_CURVE_DISCRIMINATOR: [u8; 8] = [0x17, 0xb7, 0xf8, 0x37, 0x60, 0xd8, 0xac, 0x60];

pub const CURVE_VIRTUAL_TOKEN_RESERVES_OFFSET: usize = 8;
pub const CURVE_VIRTUAL_SOL_RESERVES_OFFSET: usize = 16;
pub const CURVE_REAL_TOKEN_RESERVES_OFFSET: usize = 24;
pub const CURVE_REAL_SOL_RESERVES_OFFSET: usize = 32;
pub const CURVE_TOKEN_TOTAL_SUPPLY_OFFSET: usize = 40;
pub const CURVE_COMPLETE_OFFSET: usize = 48;

/// Creator pubkey occupies bytes `49..81`
pub const CURVE_CREATOR_OFFSET: usize = 49;

/// Minimum account length needed to read every field up to the creator
pub const CURVE_MIN_DATA_LEN: usize = CURVE_CREATOR_OFFSET + 32;

// ============================================================================
// DISPLAY
// ============================================================================

/// Explorer base URL for transaction links in logs
pub const SOLSCAN_TX_URL: &str = "https://solscan.io/tx/";
