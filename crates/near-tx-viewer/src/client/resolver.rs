//! Transaction lookup by hash.

use std::sync::Arc;

use futures::future::BoxFuture;
use serde_json::Value;
use tracing::debug;

use crate::error::FetchError;
use crate::types::{Network, TransactionRecord};

use super::http::HttpClient;

/// Something that can look up a transaction by hash.
///
/// `Ok(None)` means the source answered and does not know the hash. That is
/// a normal outcome, unlike an `Err`, which means no answer was obtained.
///
/// The annotation entry points take any source, so hosts can plug in their
/// own indexer or a fixed table in tests.
pub trait TransactionSource: Send + Sync {
    /// Look up `hash` on `network`.
    fn transaction<'a>(
        &'a self,
        hash: &'a str,
        network: Network,
    ) -> BoxFuture<'a, Result<Option<TransactionRecord>, FetchError>>;
}

/// Implement `TransactionSource` for `Arc<dyn TransactionSource>` for convenience.
impl TransactionSource for Arc<dyn TransactionSource> {
    fn transaction<'a>(
        &'a self,
        hash: &'a str,
        network: Network,
    ) -> BoxFuture<'a, Result<Option<TransactionRecord>, FetchError>> {
        (**self).transaction(hash, network)
    }
}

/// [`TransactionSource`] backed by the NearBlocks REST API.
#[derive(Clone, Debug)]
pub struct NearBlocksResolver {
    http: HttpClient,
    api_base: Option<String>,
}

impl NearBlocksResolver {
    /// Create a resolver using the public NearBlocks endpoints.
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            api_base: None,
        }
    }

    /// Use `api_base` for every network instead of the public endpoints.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// The lookup URL for `hash` on `network`.
    pub fn tx_url(&self, hash: &str, network: Network) -> String {
        let base = self.api_base.as_deref().unwrap_or(network.api_base());
        format!("{}/v1/txns/{}", base.trim_end_matches('/'), hash)
    }

    /// Fetch the transaction `hash` from NearBlocks.
    ///
    /// Returns `Ok(None)` when NearBlocks answers without a transaction.
    /// Fetch failures are passed through untouched.
    pub async fn resolve(
        &self,
        hash: &str,
        network: Network,
    ) -> Result<Option<TransactionRecord>, FetchError> {
        let payload = self.http.get_json(&self.tx_url(hash, network)).await?;
        let record = first_txn(&payload).map(TransactionRecord::from_json);
        if record.is_none() {
            debug!(hash, %network, "transaction not indexed");
        }
        Ok(record)
    }
}

impl TransactionSource for NearBlocksResolver {
    fn transaction<'a>(
        &'a self,
        hash: &'a str,
        network: Network,
    ) -> BoxFuture<'a, Result<Option<TransactionRecord>, FetchError>> {
        Box::pin(self.resolve(hash, network))
    }
}

/// `txns[0]`, unless missing or null.
fn first_txn(payload: &Value) -> Option<&Value> {
    payload
        .get("txns")
        .and_then(Value::as_array)
        .and_then(|txns| txns.first())
        .filter(|tx| !tx.is_null())
}
