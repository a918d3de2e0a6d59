//! Client module for looking up transactions.
//!
//! - [`TxViewer`] — The configured entry point, the one most hosts need
//! - [`TxViewerBuilder`] — Fluent builder for configuring the viewer
//! - [`NearBlocksResolver`] — Transaction lookup against the NearBlocks API
//! - [`HttpClient`] — Single-attempt JSON GET with a deadline
//!
//! # Sources
//!
//! Lookups go through the [`TransactionSource`] trait. [`NearBlocksResolver`]
//! is the only implementation shipped here; hosts with their own indexer,
//! or tests, can provide another one via [`TxViewerBuilder::source`].

mod http;
mod resolver;
mod viewer;

pub use http::{DEFAULT_TIMEOUT, HttpClient};
pub use resolver::{NearBlocksResolver, TransactionSource};
pub use viewer::{TxViewer, TxViewerBuilder};
