//! Error types for near-tx-viewer.
//!
//! # Error Hierarchy
//!
//! - [`Error`](enum@Error) — Main error type, returned by configuration and
//!   direct resolution calls
//!   - [`FetchError`] — Failures of a single NearBlocks request
//!   - [`ParseNetworkError`] — Unknown network name
//!
//! Matching and formatting never fail. A point annotation never returns a
//! [`FetchError`] either: it renders an "unavailable" notice instead.
//!
//! # Example
//!
//! ```rust,no_run
//! use near_tx_viewer::*;
//!
//! # async fn example() -> Result<(), Error> {
//! let viewer = TxViewer::mainnet().build()?;
//!
//! match viewer.resolve("6zgh2u9DqHHiXzdy9ouTP7oGky2T4nugqzqt9wJZwNFm").await {
//!     Ok(Some(tx)) => println!("signed by {:?}", tx.signer_account),
//!     Ok(None) => println!("not indexed yet"),
//!     Err(e) if e.is_timeout() => println!("NearBlocks is slow today"),
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use thiserror::Error;

/// Error parsing a network name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown network '{0}'. Expected 'mainnet' or 'testnet'")]
pub struct ParseNetworkError(pub String);

// ============================================================================
// Fetch Errors
// ============================================================================

/// Failure of a single JSON fetch.
///
/// Every variant is terminal for the call that produced it; nothing in this
/// crate retries.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("HTTP error: status {status}")]
    HttpStatus { status: u16 },

    #[error("JSON parse error: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
}

impl FetchError {
    /// Returns true if the request hit the fetch deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout(_))
    }

    /// The HTTP status code, for [`FetchError::HttpStatus`].
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus { status } => Some(*status),
            _ => None,
        }
    }
}

// ============================================================================
// Main Error Type
// ============================================================================

/// Main error type for near-tx-viewer operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    ParseNetwork(#[from] ParseNetworkError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
