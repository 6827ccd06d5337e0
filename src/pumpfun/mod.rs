//! Pump.fun bonding curve program: detection, address derivation and selling

pub mod addresses;
pub mod classifier;
pub mod curve;
pub mod instructions;
pub mod pda;
pub mod seller;

pub use addresses::{get_pumpfun_addresses, PumpfunAddresses};
pub use classifier::{classify_holding, classify_holdings, ClassifiedHolding, CurveMatch};
pub use curve::BondingCurveState;
pub use instructions::{
    build_close_account_instruction, build_sell_instruction, build_sell_transaction,
    encode_sell_data,
};
pub use seller::initiate_sell_order;
