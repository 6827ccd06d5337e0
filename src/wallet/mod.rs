//! Wallet identity and holdings

pub mod keypair;
pub mod scanner;

pub use keypair::{load_keypair_from_file, load_keypair_from_private_key, load_wallet_keypair};
pub use scanner::{get_token_holdings, TokenHolding};
