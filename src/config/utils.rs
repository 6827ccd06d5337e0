use super::schemas::Config;
/// Configuration utilities - loading, layering and validation
///
/// Layers, lowest to highest priority:
/// 1. defaults from the schema definitions
/// 2. TOML file (optional)
/// 3. environment variables (`.env` is loaded by the binary beforehand)
/// 4. command-line overrides
///
/// A wallet secret set by a higher layer replaces either kind of secret from
/// the layers below it.
use crate::errors::{LiquidatorError, LiquidatorResult};
use crate::logger::{self, LogTag};
use solana_sdk::commitment_config::CommitmentConfig;
use std::path::Path;

/// Environment variable names
pub const ENV_RPC_URL: &str = "RPC_URL";
pub const ENV_KEYPAIR_PATH: &str = "KEYPAIR_PATH";
pub const ENV_PRIVATE_KEY: &str = "PRIVATE_KEY";

/// Values supplied on the command line. `None` leaves the lower layer alone.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub rpc_url: Option<String>,
    pub keypair_path: Option<String>,
    pub private_key: Option<String>,
    pub dry_run: bool,
}

/// Load configuration from a TOML file
///
/// A missing file is an error here: the caller only passes a path when the
/// user asked for one.
pub fn load_config_from_path(path: &str) -> LiquidatorResult<Config> {
    if !Path::new(path).exists() {
        return Err(LiquidatorError::Config(format!("Config file '{}' not found", path)));
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| LiquidatorError::Config(format!("Failed to read config file '{}': {}", path, e)))?;

    parse_config(&contents)
        .map_err(|e| LiquidatorError::Config(format!("Failed to parse config file '{}': {}", path, e)))
}

pub fn parse_config(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(contents)
}

/// Apply environment overrides using the given lookup.
///
/// Empty values are ignored so an unset `PRIVATE_KEY=` line in `.env` does
/// not count as a configured secret.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = get(ENV_RPC_URL) {
        config.rpc.url = url;
    }
    // Same rule as the command line: a secret from the environment replaces
    // the other kind from the file. Both in the environment stays a conflict.
    match (get(ENV_KEYPAIR_PATH), get(ENV_PRIVATE_KEY)) {
        (Some(path), Some(key)) => {
            config.wallet.keypair_path = Some(path);
            config.wallet.private_key = Some(key);
        }
        (Some(path), None) => {
            config.wallet.keypair_path = Some(path);
            config.wallet.private_key = None;
        }
        (None, Some(key)) => {
            config.wallet.private_key = Some(key);
            config.wallet.keypair_path = None;
        }
        (None, None) => {}
    }
}

pub fn apply_cli_overrides(config: &mut Config, cli: &CliOverrides) {
    if let Some(url) = &cli.rpc_url {
        config.rpc.url = url.clone();
    }
    // A secret given on the command line replaces whatever the lower layers
    // selected, including the other kind of secret.
    if let Some(path) = &cli.keypair_path {
        config.wallet.keypair_path = Some(path.clone());
        config.wallet.private_key = None;
    }
    if let Some(key) = &cli.private_key {
        config.wallet.private_key = Some(key.clone());
        config.wallet.keypair_path = None;
    }
    if cli.dry_run {
        config.seller.dry_run = true;
    }
}

/// Build the effective configuration from every layer and validate it
pub fn resolve_config(path: Option<&str>, cli: &CliOverrides) -> LiquidatorResult<Config> {
    let mut config = match path {
        Some(path) => {
            logger::info(LogTag::Config, &format!("Loading config from {}", path));
            load_config_from_path(path)?
        }
        None => Config::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    apply_cli_overrides(&mut config, cli);
    validate_config(&config)?;

    logger::debug(
        LogTag::Config,
        &format!(
            "RPC {} (commitment {}), dry_run={}, skip_preflight={}",
            config.rpc.url, config.rpc.commitment, config.seller.dry_run, config.seller.skip_preflight
        ),
    );

    Ok(config)
}

pub fn validate_config(config: &Config) -> LiquidatorResult<()> {
    if config.rpc.url.trim().is_empty() {
        return Err(LiquidatorError::Config("rpc.url is empty".to_string()));
    }
    if !config.rpc.url.starts_with("http://") && !config.rpc.url.starts_with("https://") {
        return Err(LiquidatorError::Config(format!(
            "rpc.url must be an http(s) URL, got '{}'",
            config.rpc.url
        )));
    }

    parse_commitment(&config.rpc.commitment)?;

    match (&config.wallet.keypair_path, &config.wallet.private_key) {
        (Some(_), Some(_)) => Err(LiquidatorError::Config(
            "Both wallet.keypair_path and wallet.private_key are set; choose one".to_string(),
        )),
        (None, None) => Err(LiquidatorError::Config(format!(
            "No wallet configured: set {} or {} (or wallet.keypair_path / wallet.private_key)",
            ENV_KEYPAIR_PATH, ENV_PRIVATE_KEY
        ))),
        _ => Ok(()),
    }
}

pub fn parse_commitment(value: &str) -> LiquidatorResult<CommitmentConfig> {
    match value.trim().to_lowercase().as_str() {
        "processed" => Ok(CommitmentConfig::processed()),
        "confirmed" => Ok(CommitmentConfig::confirmed()),
        "finalized" => Ok(CommitmentConfig::finalized()),
        other => Err(LiquidatorError::Config(format!(
            "Unknown commitment '{}': expected processed, confirmed or finalized",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with_key() -> Config {
        let mut config = Config::default();
        config.wallet.private_key = Some("secret".to_string());
        config
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.rpc.commitment, "processed");
        assert_eq!(config.rpc.confirm_timeout_secs, 60);
        assert!(config.seller.skip_preflight);
        assert!(!config.seller.dry_run);
        assert!(config.wallet.keypair_path.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = parse_config(
            r#"
            [rpc]
            url = "https://rpc.example.org"

            [wallet]
            keypair_path = "/home/me/id.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.rpc.url, "https://rpc.example.org");
        assert_eq!(config.rpc.commitment, "processed");
        assert_eq!(config.wallet.keypair_path.as_deref(), Some("/home/me/id.json"));
        assert!(config.seller.skip_preflight);
        validate_config(&config).unwrap();
    }

    #[test]
    fn test_env_overrides_ignore_empty_values() {
        let env: HashMap<&str, &str> = [
            (ENV_RPC_URL, "https://env.example.org"),
            (ENV_PRIVATE_KEY, "  "),
            (ENV_KEYPAIR_PATH, "./id.json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        apply_env_overrides(&mut config, |k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.rpc.url, "https://env.example.org");
        assert_eq!(config.wallet.keypair_path.as_deref(), Some("./id.json"));
        assert!(config.wallet.private_key.is_none());
    }

    #[test]
    fn test_env_secret_replaces_file_secret() {
        let env: HashMap<&str, &str> = [(ENV_KEYPAIR_PATH, "./id.json")].into_iter().collect();

        let mut config = config_with_key();
        apply_env_overrides(&mut config, |k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.wallet.keypair_path.as_deref(), Some("./id.json"));
        assert!(config.wallet.private_key.is_none());
        validate_config(&config).unwrap();
    }

    #[test]
    fn test_both_env_secrets_conflict() {
        let env: HashMap<&str, &str> =
            [(ENV_KEYPAIR_PATH, "./id.json"), (ENV_PRIVATE_KEY, "abc")].into_iter().collect();

        let mut config = Config::default();
        apply_env_overrides(&mut config, |k| env.get(k).map(|v| v.to_string()));

        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_cli_secret_replaces_other_source() {
        let mut config = Config::default();
        config.wallet.keypair_path = Some("./id.json".to_string());

        let cli = CliOverrides {
            private_key: Some("abc".to_string()),
            dry_run: true,
            ..Default::default()
        };
        apply_cli_overrides(&mut config, &cli);

        assert!(config.wallet.keypair_path.is_none());
        assert_eq!(config.wallet.private_key.as_deref(), Some("abc"));
        assert!(config.seller.dry_run);
    }

    #[test]
    fn test_validate_requires_exactly_one_secret() {
        let mut config = Config::default();
        assert!(validate_config(&config).is_err());

        config.wallet.private_key = Some("abc".to_string());
        config.wallet.keypair_path = Some("./id.json".to_string());
        assert!(validate_config(&config).is_err());

        config.wallet.keypair_path = None;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_url_and_commitment() {
        let mut config = config_with_key();
        config.rpc.url = "ws://localhost:8900".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = config_with_key();
        config.rpc.commitment = "single".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_parse_commitment() {
        assert_eq!(parse_commitment("Confirmed").unwrap(), CommitmentConfig::confirmed());
        assert_eq!(parse_commitment("processed").unwrap(), CommitmentConfig::processed());
        assert!(parse_commitment("max").is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let err = load_config_from_path("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
