//! Network identification and the URLs that depend on it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseNetworkError;

/// NearBlocks API base for mainnet.
pub const MAINNET_API_BASE: &str = "https://api.nearblocks.io";
/// NearBlocks API base for testnet.
pub const TESTNET_API_BASE: &str = "https://api-testnet.nearblocks.io";

/// The NEAR network a transaction hash is looked up on.
///
/// Hosts usually read this from user configuration; it only selects which
/// indexer and explorer hosts are used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// NEAR mainnet (production network).
    #[default]
    Mainnet,
    /// NEAR testnet (testing network).
    Testnet,
}

impl Network {
    /// Returns true if this is mainnet.
    pub fn is_mainnet(&self) -> bool {
        matches!(self, Network::Mainnet)
    }

    /// Returns true if this is testnet.
    pub fn is_testnet(&self) -> bool {
        matches!(self, Network::Testnet)
    }

    /// Returns the network identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }

    /// The NearBlocks API base URL for this network, without a trailing slash.
    pub fn api_base(&self) -> &'static str {
        match self {
            Network::Mainnet => MAINNET_API_BASE,
            Network::Testnet => TESTNET_API_BASE,
        }
    }

    /// The NEAR Explorer page for a transaction on this network.
    ///
    /// # Example
    ///
    /// ```
    /// use near_tx_viewer::Network;
    ///
    /// assert_eq!(
    ///     Network::Testnet.explorer_tx_url("abc"),
    ///     "https://explorer.testnet.near.org/transactions/abc"
    /// );
    /// ```
    pub fn explorer_tx_url(&self, hash: &str) -> String {
        format!("https://explorer.{}.near.org/transactions/{}", self.as_str(), hash)
    }
}

/// The Pikespeak page for a transaction. Pikespeak uses one host for all networks.
pub fn pikespeak_tx_url(hash: &str) -> String {
    format!("https://pikespeak.ai/transaction/{hash}")
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            _ => Err(ParseNetworkError(s.to_string())),
        }
    }
}
