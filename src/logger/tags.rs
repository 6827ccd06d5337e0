/// Log tags identify the pipeline stage a message comes from.
///
/// Each tag has a debug key used by `--debug <key>` to enable debug output
/// for that stage only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Config,
    Wallet,
    Rpc,
    Scanner,
    Classifier,
    Pumpfun,
    Seller,
}

impl LogTag {
    /// Key used on the command line (`--debug classifier`)
    pub fn to_debug_key(&self) -> String {
        match self {
            LogTag::System => "system",
            LogTag::Config => "config",
            LogTag::Wallet => "wallet",
            LogTag::Rpc => "rpc",
            LogTag::Scanner => "scanner",
            LogTag::Classifier => "classifier",
            LogTag::Pumpfun => "pumpfun",
            LogTag::Seller => "seller",
        }
        .to_string()
    }

    /// Uppercase label without colors
    pub fn to_plain_string(&self) -> String {
        self.to_debug_key().to_uppercase()
    }

    pub fn from_debug_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "system" => Some(LogTag::System),
            "config" => Some(LogTag::Config),
            "wallet" => Some(LogTag::Wallet),
            "rpc" => Some(LogTag::Rpc),
            "scanner" => Some(LogTag::Scanner),
            "classifier" => Some(LogTag::Classifier),
            "pumpfun" => Some(LogTag::Pumpfun),
            "seller" => Some(LogTag::Seller),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_plain_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_key_roundtrip() {
        for tag in [
            LogTag::System,
            LogTag::Config,
            LogTag::Wallet,
            LogTag::Rpc,
            LogTag::Scanner,
            LogTag::Classifier,
            LogTag::Pumpfun,
            LogTag::Seller,
        ] {
            assert_eq!(LogTag::from_debug_key(&tag.to_debug_key()), Some(tag));
        }
        assert_eq!(LogTag::from_debug_key(" RPC "), Some(LogTag::Rpc));
        assert_eq!(LogTag::from_debug_key("pool"), None);
    }
}
