/// Wallet keypair loading
///
/// The source is chosen by configuration, never guessed from the shape of
/// the string:
/// - `keypair_path`: JSON file with the 64 secret bytes as a number array
///   (the `solana-keygen` format)
/// - `private_key`: base58 string, or the same bytes written as `[1,2,...]`
use crate::config::WalletConfig;
use crate::errors::{LiquidatorError, LiquidatorResult};
use crate::logger::{self, LogTag};
use solana_sdk::signature::Keypair;

const SECRET_KEY_LEN: usize = 64;

pub fn load_wallet_keypair(config: &WalletConfig) -> LiquidatorResult<Keypair> {
    match (&config.keypair_path, &config.private_key) {
        (Some(path), None) => {
            logger::info(LogTag::Wallet, &format!("Loading keypair from file: {}", path));
            load_keypair_from_file(path)
        }
        (None, Some(private_key)) => {
            logger::info(
                LogTag::Wallet,
                &format!("Loading keypair from private key string (length: {} chars)", private_key.len()),
            );
            load_keypair_from_private_key(private_key)
        }
        (Some(_), Some(_)) => Err(LiquidatorError::Config(
            "Both keypair_path and private_key are set; choose one".to_string(),
        )),
        (None, None) => Err(LiquidatorError::Config("No wallet secret configured".to_string())),
    }
}

pub fn load_keypair_from_file(path: &str) -> LiquidatorResult<Keypair> {
    let contents = std::fs::read_to_string(path).map_err(|e| LiquidatorError::KeypairFile {
        path: path.to_string(),
        reason: e.to_string(),
    })?;

    let bytes: Vec<u8> = serde_json::from_str(contents.trim()).map_err(|e| LiquidatorError::KeypairFile {
        path: path.to_string(),
        reason: format!("expected a JSON byte array: {}", e),
    })?;

    keypair_from_bytes(&bytes).map_err(|e| LiquidatorError::KeypairFile {
        path: path.to_string(),
        reason: e.to_string(),
    })
}

/// Base58 or `[1,2,...]` array text
pub fn load_keypair_from_private_key(private_key: &str) -> LiquidatorResult<Keypair> {
    let private_key = private_key.trim();

    if private_key.is_empty() {
        return Err(LiquidatorError::InvalidPrivateKey("private key is empty".to_string()));
    }

    if private_key.starts_with('[') && private_key.ends_with(']') {
        load_keypair_from_array_format(private_key)
    } else {
        load_keypair_from_base58_format(private_key)
    }
}

fn load_keypair_from_array_format(private_key: &str) -> LiquidatorResult<Keypair> {
    let bytes = private_key
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .map(|s| s.trim().parse::<u8>())
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|e| LiquidatorError::InvalidPrivateKey(format!("Failed to parse byte array: {}", e)))?;

    keypair_from_bytes(&bytes)
}

fn load_keypair_from_base58_format(private_key: &str) -> LiquidatorResult<Keypair> {
    let decoded = bs58::decode(private_key)
        .into_vec()
        .map_err(|e| LiquidatorError::InvalidPrivateKey(format!("Failed to decode base58: {}", e)))?;

    keypair_from_bytes(&decoded)
}

fn keypair_from_bytes(bytes: &[u8]) -> LiquidatorResult<Keypair> {
    if bytes.len() != SECRET_KEY_LEN {
        return Err(LiquidatorError::InvalidPrivateKey(format!(
            "expected {} bytes, got {}",
            SECRET_KEY_LEN,
            bytes.len()
        )));
    }

    Keypair::try_from(bytes).map_err(|e| LiquidatorError::InvalidPrivateKey(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signer::Signer;
    use std::io::Write;

    fn json_array(keypair: &Keypair) -> String {
        serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap()
    }

    #[test]
    fn test_load_base58_private_key() {
        let keypair = Keypair::new();
        let encoded = bs58::encode(keypair.to_bytes()).into_string();

        let loaded = load_keypair_from_private_key(&encoded).unwrap();
        assert_eq!(loaded.pubkey(), keypair.pubkey());
    }

    #[test]
    fn test_load_array_private_key() {
        let keypair = Keypair::new();
        let loaded = load_keypair_from_private_key(&json_array(&keypair)).unwrap();
        assert_eq!(loaded.pubkey(), keypair.pubkey());
    }

    #[test]
    fn test_load_keypair_file() {
        let keypair = Keypair::new();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", json_array(&keypair)).unwrap();

        let config = WalletConfig {
            keypair_path: Some(file.path().to_string_lossy().to_string()),
            private_key: None,
        };
        let loaded = load_wallet_keypair(&config).unwrap();
        assert_eq!(loaded.pubkey(), keypair.pubkey());
    }

    #[test]
    fn test_invalid_keypair_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_keypair_from_file(&file.path().to_string_lossy()).unwrap_err();
        assert!(matches!(err, LiquidatorError::KeypairFile { .. }));

        let err = load_keypair_from_file("/no/such/keypair.json").unwrap_err();
        assert!(matches!(err, LiquidatorError::KeypairFile { .. }));
    }

    #[test]
    fn test_invalid_private_keys() {
        assert!(load_keypair_from_private_key("").is_err());
        // '0' and 'l' are not in the base58 alphabet
        assert!(load_keypair_from_private_key("0l0l0l").is_err());
        // valid base58, wrong length
        assert!(load_keypair_from_private_key("3mJr7AoUXx2Wqd").is_err());
        assert!(load_keypair_from_private_key("[1,2,300]").is_err());
    }

    #[test]
    fn test_path_like_private_key_is_not_read_as_file() {
        let config = WalletConfig {
            keypair_path: None,
            private_key: Some("./id.json".to_string()),
        };
        assert!(matches!(
            load_wallet_keypair(&config),
            Err(LiquidatorError::InvalidPrivateKey(_))
        ));
    }
}
