//! Sells every pump.fun bonding-curve token held by a wallet and closes the
//! emptied token accounts.

pub mod config;
pub mod constants;
pub mod errors;
pub mod liquidator;
pub mod logger;
pub mod pumpfun;
pub mod rpc;
pub mod wallet;

pub use errors::{LiquidatorError, LiquidatorResult};
pub use liquidator::{scan_and_sell, LiquidationReport, LiquidatorContext};
