//! Network descriptors and the configured target network.
//!
//! A [`NetworkDescriptor`] carries everything a wallet provider needs to
//! register a chain it does not know yet, so the descriptor doubles as the
//! `wallet_addEthereumChain` request payload. Field names serialize in the
//! camelCase form the provider expects.

use serde::{Deserialize, Serialize};

/// Native currency of a network, as registered with the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Immutable description of a target network.
///
/// One descriptor is configured as the application's target network; the
/// session layer verifies the provider's active chain against it and can
/// ask the provider to switch to it or register it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDescriptor {
    /// Canonical hex chain identifier, e.g. `0xaa36a7`.
    pub chain_id: String,
    pub chain_name: String,
    pub native_currency: NativeCurrency,
    pub rpc_urls: Vec<String>,
    pub block_explorer_urls: Vec<String>,
}

impl NetworkDescriptor {
    /// The Sepolia testnet, the network BlockVote runs on.
    pub fn sepolia() -> Self {
        Self {
            chain_id: "0xaa36a7".to_string(),
            chain_name: "Sepolia Testnet".to_string(),
            native_currency: NativeCurrency {
                name: "Sepolia ETH".to_string(),
                symbol: "SEP".to_string(),
                decimals: 18,
            },
            rpc_urls: vec!["https://sepolia.infura.io/v3/".to_string()],
            block_explorer_urls: vec!["https://sepolia.etherscan.io/".to_string()],
        }
    }

    /// Whether `chain_id` identifies this network.
    ///
    /// Hex chain identifiers are compared case-normalized; providers are
    /// inconsistent about the casing of the hex digits.
    pub fn matches_chain(&self, chain_id: &str) -> bool {
        normalize_chain_id(&self.chain_id) == normalize_chain_id(chain_id)
    }
}

fn normalize_chain_id(chain_id: &str) -> String {
    chain_id.trim().to_ascii_lowercase()
}
