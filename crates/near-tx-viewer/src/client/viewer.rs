//! The configured entry point.

use std::sync::Arc;
use std::time::Duration;

use crate::annotate::{self, Annotation, TxLink};
use crate::error::{Error, FetchError};
use crate::types::{Network, TransactionRecord};

use super::http::{DEFAULT_TIMEOUT, HttpClient};
use super::resolver::{NearBlocksResolver, TransactionSource};

/// A configured transaction viewer.
///
/// Bundles a network with a [`TransactionSource`] so a host only has to
/// hand over text and positions. Cloning is cheap; clones share the source.
///
/// # Example
///
/// ```rust,no_run
/// use near_tx_viewer::*;
///
/// # async fn example() -> Result<(), near_tx_viewer::Error> {
/// let viewer = TxViewer::testnet().build()?;
/// let text = std::fs::read_to_string("deploy.log").unwrap_or_default();
///
/// for link in viewer.links(&text) {
///     println!("{:?} -> {}", link.range, link.target);
/// }
///
/// if let Some(card) = viewer.annotate_at(&text, 120).await {
///     println!("{}", card.markdown);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TxViewer {
    source: Arc<dyn TransactionSource>,
    network: Network,
}

impl TxViewer {
    /// Create a builder for mainnet.
    pub fn mainnet() -> TxViewerBuilder {
        TxViewerBuilder::new(Network::Mainnet)
    }

    /// Create a builder for testnet.
    pub fn testnet() -> TxViewerBuilder {
        TxViewerBuilder::new(Network::Testnet)
    }

    /// Create a builder for `network`.
    pub fn builder(network: Network) -> TxViewerBuilder {
        TxViewerBuilder::new(network)
    }

    /// Create a viewer from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `NEAR_TX_VIEWER_NETWORK` (optional): `"mainnet"` or `"testnet"`.
    ///   Defaults to `"mainnet"` if not set.
    /// - `NEAR_TX_VIEWER_API_URL` (optional): NearBlocks-compatible API base
    ///   used instead of the public endpoint.
    /// - `NEAR_TX_VIEWER_TIMEOUT_MS` (optional): request deadline in
    ///   milliseconds. Defaults to 8000.
    ///
    /// # Errors
    ///
    /// Returns an error if the network name is unknown or the timeout is not
    /// a positive integer.
    pub fn from_env() -> Result<TxViewer, Error> {
        let network = match std::env::var("NEAR_TX_VIEWER_NETWORK") {
            Ok(name) => name.parse()?,
            Err(_) => Network::default(),
        };

        let mut builder = TxViewer::builder(network);

        if let Ok(url) = std::env::var("NEAR_TX_VIEWER_API_URL") {
            builder = builder.api_base(url);
        }

        if let Ok(ms) = std::env::var("NEAR_TX_VIEWER_TIMEOUT_MS") {
            let ms: u64 = ms
                .trim()
                .parse()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| {
                    Error::Config(format!(
                        "NEAR_TX_VIEWER_TIMEOUT_MS must be a positive integer, got '{ms}'"
                    ))
                })?;
            builder = builder.timeout(Duration::from_millis(ms));
        }

        builder.build()
    }

    /// Get the network this viewer looks hashes up on.
    pub fn network(&self) -> Network {
        self.network
    }

    /// A viewer sharing this one's source but using another network.
    pub fn with_network(&self, network: Network) -> TxViewer {
        TxViewer {
            source: self.source.clone(),
            network,
        }
    }

    /// The hover card for the hash at byte `offset` of `text`.
    ///
    /// See [`annotate::annotate_at`].
    pub async fn annotate_at(&self, text: &str, offset: usize) -> Option<Annotation> {
        annotate::annotate_at(&self.source, text, offset, self.network).await
    }

    /// Explorer links for every hash in `text`.
    ///
    /// See [`annotate::link_all`].
    pub fn links(&self, text: &str) -> Vec<TxLink> {
        annotate::link_all(text, self.network)
    }

    /// Look up a single transaction, surfacing fetch errors.
    pub async fn resolve(&self, hash: &str) -> Result<Option<TransactionRecord>, FetchError> {
        self.source.transaction(hash, self.network).await
    }
}

impl std::fmt::Debug for TxViewer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TxViewer")
            .field("network", &self.network)
            .finish_non_exhaustive()
    }
}

/// Builder for [`TxViewer`].
pub struct TxViewerBuilder {
    network: Network,
    timeout: Duration,
    api_base: Option<String>,
    source: Option<Arc<dyn TransactionSource>>,
}

impl TxViewerBuilder {
    fn new(network: Network) -> Self {
        Self {
            network,
            timeout: DEFAULT_TIMEOUT,
            api_base: None,
            source: None,
        }
    }

    /// Set the request deadline. Defaults to 8 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Query a NearBlocks-compatible API at `url` instead of the public one.
    pub fn api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = Some(url.into());
        self
    }

    /// Use a custom transaction source. Timeout and API base are then ignored.
    pub fn source(mut self, source: impl TransactionSource + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    /// Build the viewer.
    ///
    /// # Errors
    ///
    /// Fails if the timeout is zero or the HTTP client cannot be created.
    pub fn build(self) -> Result<TxViewer, Error> {
        let source = match self.source {
            Some(source) => source,
            None => {
                if self.timeout.is_zero() {
                    return Err(Error::Config("timeout must be non-zero".into()));
                }
                let mut resolver = NearBlocksResolver::new(HttpClient::with_timeout(self.timeout)?);
                if let Some(api_base) = self.api_base {
                    resolver = resolver.with_api_base(api_base);
                }
                Arc::new(resolver) as Arc<dyn TransactionSource>
            }
        };

        Ok(TxViewer {
            source,
            network: self.network,
        })
    }
}
