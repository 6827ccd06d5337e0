//! RPC layer: the `RpcClientMethods` seam and its Solana implementation

pub mod client;
pub mod types;

pub use client::{RpcClient, RpcClientMethods};
pub use types::{parse_token_account, RpcError, RpcResult, TokenAccountInfo};
