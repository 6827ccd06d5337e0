//! In-memory `RpcClientMethods` for driving the pipeline without a network
#![allow(dead_code)]

use async_trait::async_trait;
use pumpfun_liquidator::constants::{BONDING_CURVE_DISCRIMINATOR, PUMPFUN_PROGRAM_ID};
use pumpfun_liquidator::rpc::{RpcClientMethods, RpcError, RpcResult, TokenAccountInfo};
use solana_sdk::{
    account::Account, hash::Hash, pubkey::Pubkey, signature::Signature,
    transaction::Transaction,
};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Default)]
pub struct MockRpc {
    pub token_accounts: Vec<TokenAccountInfo>,
    pub scan_error: Option<String>,
    pub accounts: HashMap<Pubkey, Account>,
    /// `get_account` fails for these addresses
    pub failing_lookups: HashSet<Pubkey>,
    /// Sending fails for any transaction touching one of these addresses
    pub failing_sends: HashSet<Pubkey>,
    pub account_lookups: Mutex<Vec<Pubkey>>,
    pub sent: Mutex<Vec<(Transaction, bool)>>,
}

impl MockRpc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_holding(mut self, mint: Pubkey, token_account: Pubkey, amount: u64, decimals: u8) -> Self {
        self.token_accounts.push(TokenAccountInfo {
            account: token_account,
            mint,
            amount,
            decimals,
        });
        self
    }

    pub fn with_account(mut self, address: Pubkey, owner: Pubkey, data: Vec<u8>) -> Self {
        self.accounts.insert(
            address,
            Account {
                lamports: 1_500_000,
                data,
                owner,
                executable: false,
                rent_epoch: 0,
            },
        );
        self
    }

    /// A pump.fun owned curve account for `bonding_curve` created by `creator`
    pub fn with_curve(self, bonding_curve: Pubkey, creator: &Pubkey) -> Self {
        self.with_account(bonding_curve, PUMPFUN_PROGRAM_ID, curve_data(creator))
    }

    pub fn lookups(&self) -> Vec<Pubkey> {
        self.account_lookups.lock().unwrap().clone()
    }

    pub fn sent_transactions(&self) -> Vec<Transaction> {
        self.sent.lock().unwrap().iter().map(|(tx, _)| tx.clone()).collect()
    }
}

#[async_trait]
impl RpcClientMethods for MockRpc {
    async fn get_token_accounts_by_owner(
        &self,
        _owner: &Pubkey,
        _token_program: &Pubkey,
    ) -> RpcResult<Vec<TokenAccountInfo>> {
        match &self.scan_error {
            Some(reason) => Err(RpcError::Request(reason.clone())),
            None => Ok(self.token_accounts.clone()),
        }
    }

    async fn get_account(&self, pubkey: &Pubkey) -> RpcResult<Option<Account>> {
        self.account_lookups.lock().unwrap().push(*pubkey);
        if self.failing_lookups.contains(pubkey) {
            return Err(RpcError::Request("connection reset by peer".to_string()));
        }
        Ok(self.accounts.get(pubkey).cloned())
    }

    async fn get_latest_blockhash(&self) -> RpcResult<Hash> {
        Ok(Hash::new_from_array([7u8; 32]))
    }

    async fn send_and_confirm_transaction(
        &self,
        transaction: &Transaction,
        skip_preflight: bool,
    ) -> RpcResult<Signature> {
        self.sent.lock().unwrap().push((transaction.clone(), skip_preflight));

        let signature = transaction.signatures[0];
        let touches_failing = transaction
            .message
            .account_keys
            .iter()
            .any(|key| self.failing_sends.contains(key));
        if touches_failing {
            return Err(RpcError::TransactionFailed {
                signature: signature.to_string(),
                reason: "custom program error: 0x1772".to_string(),
            });
        }
        Ok(signature)
    }
}

/// Curve account bytes with the given creator
pub fn curve_data(creator: &Pubkey) -> Vec<u8> {
    let mut data = Vec::with_capacity(150);
    data.extend_from_slice(&BONDING_CURVE_DISCRIMINATOR);
    for value in [1_073_000_000_000_000u64, 30_000_000_000, 793_100_000_000_000, 0, 1_000_000_000_000_000] {
        data.extend_from_slice(&value.to_le_bytes());
    }
    data.push(0);
    data.extend_from_slice(creator.as_ref());
    data.extend_from_slice(&[0u8; 69]);
    data
}
