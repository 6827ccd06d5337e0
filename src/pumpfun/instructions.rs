//! Instruction builders for the liquidation transaction

use super::addresses::PumpfunAddresses;
use crate::constants::{
    PUMPFUN_EVENT_AUTHORITY, PUMPFUN_FEE_CONFIG, PUMPFUN_FEE_PROGRAM, PUMPFUN_FEE_RECIPIENT,
    PUMPFUN_GLOBAL, PUMPFUN_PROGRAM_ID, SELL_DISCRIMINATOR, SELL_INSTRUCTION_DATA_LEN,
    SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID,
};
use crate::errors::{LiquidatorError, LiquidatorResult};
use solana_sdk::{
    hash::Hash,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::Keypair,
    signer::Signer,
    transaction::Transaction,
};
use spl_token::instruction::close_account;

/// `discriminator ++ amount (u64 LE) ++ min_sol_output (u64 LE)`
pub fn encode_sell_data(amount: u64, min_sol_output: u64) -> [u8; SELL_INSTRUCTION_DATA_LEN] {
    let mut data = [0u8; SELL_INSTRUCTION_DATA_LEN];
    data[0..8].copy_from_slice(&SELL_DISCRIMINATOR);
    data[8..16].copy_from_slice(&amount.to_le_bytes());
    data[16..24].copy_from_slice(&min_sol_output.to_le_bytes());
    data
}

/// Sell `amount` base units of `mint` back into the curve.
///
/// Minimum SOL output is always zero: the sale is accepted at any price.
pub fn build_sell_instruction(
    owner: &Pubkey,
    mint: &Pubkey,
    addresses: &PumpfunAddresses,
    amount: u64,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new_readonly(PUMPFUN_GLOBAL, false),
        AccountMeta::new(PUMPFUN_FEE_RECIPIENT, false),
        AccountMeta::new_readonly(*mint, false),
        AccountMeta::new(addresses.bonding_curve, false),
        AccountMeta::new(addresses.associated_bonding_curve, false),
        AccountMeta::new(addresses.user_token_account, false),
        AccountMeta::new(*owner, true),
        AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        AccountMeta::new(addresses.creator_vault, false),
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        AccountMeta::new_readonly(PUMPFUN_EVENT_AUTHORITY, false),
        AccountMeta::new_readonly(PUMPFUN_PROGRAM_ID, false),
        AccountMeta::new_readonly(PUMPFUN_FEE_CONFIG, false),
        AccountMeta::new_readonly(PUMPFUN_FEE_PROGRAM, false),
    ];

    Instruction {
        program_id: PUMPFUN_PROGRAM_ID,
        accounts,
        data: encode_sell_data(amount, 0).to_vec(),
    }
}

/// Close the emptied token account, returning its rent to the owner
pub fn build_close_account_instruction(
    owner: &Pubkey,
    token_account: &Pubkey,
) -> LiquidatorResult<Instruction> {
    close_account(&TOKEN_PROGRAM_ID, token_account, owner, owner, &[])
        .map_err(|e| LiquidatorError::Instruction(format!("close_account: {}", e)))
}

/// `[sell, close]` in one signed transaction paid by the wallet. If the sell
/// fails, the close does not execute either.
pub fn build_sell_transaction(
    wallet: &Keypair,
    mint: &Pubkey,
    addresses: &PumpfunAddresses,
    amount: u64,
    recent_blockhash: Hash,
) -> LiquidatorResult<Transaction> {
    let owner = wallet.pubkey();
    let instructions = [
        build_sell_instruction(&owner, mint, addresses, amount),
        build_close_account_instruction(&owner, &addresses.user_token_account)?,
    ];

    Ok(Transaction::new_signed_with_payer(
        &instructions,
        Some(&owner),
        &[wallet],
        recent_blockhash,
    ))
}
