//! Core types: networks, detected hashes, amounts and transaction records.

mod network;
mod transaction;
pub mod tx_hash;
mod units;

pub use network::{MAINNET_API_BASE, Network, TESTNET_API_BASE, pikespeak_tx_url};
pub use transaction::{TransactionRecord, TxStatus};
pub use tx_hash::TxHashMatch;
pub use units::NearToken;
