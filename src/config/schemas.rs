/// Configuration schemas
///
/// Every section is declared with `config_struct!`, so defaults live next to
/// the field they belong to.
use crate::config_struct;

// ============================================================================
// RPC CONFIGURATION
// ============================================================================

config_struct! {
    /// RPC endpoint configuration
    pub struct RpcConfig {
        /// JSON-RPC endpoint
        url: String = "https://api.mainnet-beta.solana.com".to_string(),
        /// processed | confirmed | finalized
        commitment: String = "processed".to_string(),
        /// Give up waiting for a sent transaction after this long
        confirm_timeout_secs: u64 = 60,
        confirm_poll_interval_ms: u64 = 500,
    }
}

// ============================================================================
// WALLET CONFIGURATION
// ============================================================================

config_struct! {
    /// Wallet secret. Exactly one of the two fields must be set.
    pub struct WalletConfig {
        /// Path to a JSON file holding the 64-byte secret as a number array
        keypair_path: Option<String> = None,
        /// Base58 secret key, or a `[1,2,...]` byte array string
        private_key: Option<String> = None,
    }
}

// ============================================================================
// SELLER CONFIGURATION
// ============================================================================

config_struct! {
    /// Sell submission behaviour
    pub struct SellerConfig {
        skip_preflight: bool = true,
        /// Build and sign transactions but never send them
        dry_run: bool = false,
        /// Pause between consecutive sells
        delay_between_sells_ms: u64 = 0,
    }
}

// ============================================================================
// ROOT
// ============================================================================

config_struct! {
    pub struct Config {
        rpc: RpcConfig = RpcConfig::default(),
        wallet: WalletConfig = WalletConfig::default(),
        seller: SellerConfig = SellerConfig::default(),
    }
}
