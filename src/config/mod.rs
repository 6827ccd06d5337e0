//! Configuration: schema, defaults and layered loading

pub mod macros;
pub mod schemas;
pub mod utils;

pub use schemas::{Config, RpcConfig, SellerConfig, WalletConfig};
pub use utils::{
    apply_cli_overrides, apply_env_overrides, load_config_from_path, parse_commitment,
    resolve_config, validate_config, CliOverrides,
};
