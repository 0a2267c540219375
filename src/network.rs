//! Network constants and the coin/chain selector for the OAP SDK.

use std::fmt;
use std::str::FromStr;

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.blockcypher.com/v1";

/// Blockchain the asset endpoints run against.
///
/// Every endpoint path is prefixed with `/{coin}/{chain}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Network {
    /// Bitcoin main chain (`btc/main`)
    #[default]
    BitcoinMain,
    /// Bitcoin testnet3 (`btc/test3`)
    BitcoinTestnet,
    /// BlockCypher's internal test chain (`bcy/test`)
    BlockCypherTest,
    /// Any other coin/chain pair the service exposes
    Custom { coin: String, chain: String },
}

impl Network {
    /// Coin segment of the endpoint path.
    pub fn coin(&self) -> &str {
        match self {
            Network::BitcoinMain | Network::BitcoinTestnet => "btc",
            Network::BlockCypherTest => "bcy",
            Network::Custom { coin, .. } => coin,
        }
    }

    /// Chain segment of the endpoint path.
    pub fn chain(&self) -> &str {
        match self {
            Network::BitcoinMain => "main",
            Network::BitcoinTestnet => "test3",
            Network::BlockCypherTest => "test",
            Network::Custom { chain, .. } => chain,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.coin(), self.chain())
    }
}

impl FromStr for Network {
    type Err = String;

    /// Parse a `coin/chain` pair, e.g. `"btc/test3"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (coin, chain) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| format!("expected coin/chain, got '{}'", s))?;
        if coin.is_empty() || chain.is_empty() || chain.contains('/') {
            return Err(format!("expected coin/chain, got '{}'", s));
        }

        Ok(match (coin, chain) {
            ("btc", "main") => Network::BitcoinMain,
            ("btc", "test3") => Network::BitcoinTestnet,
            ("bcy", "test") => Network::BlockCypherTest,
            _ => Network::Custom {
                coin: coin.to_string(),
                chain: chain.to_string(),
            },
        })
    }
}
