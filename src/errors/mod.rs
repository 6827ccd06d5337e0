/// Error types for the liquidator
///
/// `RpcError` lives in the rpc module and is wrapped here; everything a
/// pipeline stage can fail with is a `LiquidatorError`.
use crate::rpc::RpcError;
use thiserror::Error;

// =============================================================================
// MAIN ERROR TYPE
// =============================================================================

#[derive(Error, Debug)]
pub enum LiquidatorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Failed to read keypair file '{path}': {reason}")]
    KeypairFile { path: String, reason: String },

    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    #[error("Bonding curve account {bonding_curve} not found for mint {mint}")]
    CurveNotFound { mint: String, bonding_curve: String },

    #[error("Bonding curve account {bonding_curve} too short: {len} bytes (< {expected})")]
    CurveDataTooShort {
        bonding_curve: String,
        len: usize,
        expected: usize,
    },

    #[error("Failed to build instruction: {0}")]
    Instruction(String),
}

pub type LiquidatorResult<T> = Result<T, LiquidatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_error_converts() {
        fn lookup() -> LiquidatorResult<()> {
            Err(RpcError::Request("timeout".to_string()))?;
            Ok(())
        }
        let err = lookup().unwrap_err();
        assert!(matches!(err, LiquidatorError::Rpc(RpcError::Request(_))));
        assert_eq!(err.to_string(), "RPC error: Request failed: timeout");
    }

    #[test]
    fn test_display_messages() {
        let err = LiquidatorError::CurveDataTooShort {
            bonding_curve: "Curve111".to_string(),
            len: 40,
            expected: 81,
        };
        assert_eq!(
            err.to_string(),
            "Bonding curve account Curve111 too short: 40 bytes (< 81)"
        );
    }
}
