//! Spot NEAR transaction hashes in text and explain them.
//!
//! **near-tx-viewer** is the engine behind an editor integration: it finds
//! base58 transaction hashes in a document, renders a markdown hover card for
//! the one under the cursor using the [NearBlocks](https://nearblocks.io) API,
//! and turns every hash into an explorer link.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use near_tx_viewer::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), near_tx_viewer::Error> {
//!     let viewer = TxViewer::mainnet().build()?;
//!     let text = "// fixed in 6zgh2u9DqHHiXzdy9ouTP7oGky2T4nugqzqt9wJZwNFm";
//!
//!     // Hover: one lookup, never fails
//!     if let Some(card) = viewer.annotate_at(text, 20).await {
//!         println!("{}", card.markdown);
//!     }
//!
//!     // Links: no network access
//!     for link in viewer.links(text) {
//!         println!("{:?} -> {}", link.range, link.target);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Behaviour
//!
//! 1. **Lexical detection**: 43-44 base58 characters standing alone as a word
//! 2. **One request per hover**: no caching, no retries, 8 second deadline
//! 3. **Hovers degrade**: not-found and failed lookups render as notices
//! 4. **Links are free**: document links never touch the network
//!
//! Offsets are byte offsets into the UTF-8 text.

pub mod annotate;
pub mod client;
pub mod error;
pub mod format;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{Error, FetchError, ParseNetworkError};
pub use types::*;

pub use annotate::{Annotation, LINK_TOOLTIP, Lookup, TxLink, annotate_at, link_all};

pub use client::{
    DEFAULT_TIMEOUT, HttpClient, NearBlocksResolver, TransactionSource, TxViewer, TxViewerBuilder,
};
