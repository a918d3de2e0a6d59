//! Hover annotations and document links for transaction hashes.
//!
//! These are the two entry points an editor integration calls:
//!
//! - [`annotate_at`] — the hover: find the hash under a position, look it
//!   up, and render a markdown card. Lookup failures become a notice in the
//!   card; this function never returns an error.
//! - [`link_all`] — the document links: one explorer link per hash in the
//!   text. No network access.

use std::fmt::Write as _;
use std::ops::Range;

use serde::Serialize;
use tracing::warn;

use crate::client::TransactionSource;
use crate::format::render_details;
use crate::types::{Network, TransactionRecord, pikespeak_tx_url, tx_hash};

/// Tooltip attached to every document link.
pub const LINK_TOOLTIP: &str = "Open NEAR transaction in explorer";

/// Characters of the hash shown in the card header.
const HEADER_HASH_CHARS: usize = 12;

/// What the lookup behind an [`Annotation`] produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "transaction")]
pub enum Lookup {
    /// The indexer returned the transaction.
    Found(TransactionRecord),
    /// The indexer answered but does not know the hash.
    NotFound,
    /// The indexer could not be reached or gave an unusable answer.
    Unavailable,
}

/// A rendered hover card for one transaction hash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// The hash under the cursor.
    pub hash: String,
    /// Byte range of the hash in the source text.
    pub range: Range<usize>,
    /// Network the hash was looked up on.
    pub network: Network,
    /// Lookup outcome.
    pub lookup: Lookup,
    /// The card, as markdown.
    pub markdown: String,
}

/// A clickable link covering one transaction hash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TxLink {
    /// The linked hash.
    pub hash: String,
    /// Byte range of the hash in the source text.
    pub range: Range<usize>,
    /// Explorer URL the link opens.
    pub target: String,
    /// Hover text for the link.
    pub tooltip: &'static str,
}

/// Build the hover card for the transaction hash at byte `offset` of `text`.
///
/// Returns `None`, without any lookup, when no hash covers `offset`.
///
/// # Example
///
/// ```rust,no_run
/// use near_tx_viewer::*;
///
/// # async fn example() -> Result<(), Error> {
/// let resolver = NearBlocksResolver::new(HttpClient::new()?);
/// let text = "deployed in 6zgh2u9DqHHiXzdy9ouTP7oGky2T4nugqzqt9wJZwNFm";
///
/// if let Some(card) = annotate_at(&resolver, text, 20, Network::Mainnet).await {
///     println!("{}", card.markdown);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn annotate_at<S>(
    source: &S,
    text: &str,
    offset: usize,
    network: Network,
) -> Option<Annotation>
where
    S: TransactionSource + ?Sized,
{
    let found = tx_hash::find_at(text, offset)?;
    let hash = found.as_str();

    let lookup = match source.transaction(hash, network).await {
        Ok(Some(tx)) => Lookup::Found(tx),
        Ok(None) => Lookup::NotFound,
        Err(e) => {
            warn!(hash, %network, error = %e, "transaction lookup failed");
            Lookup::Unavailable
        }
    };

    Some(Annotation {
        hash: hash.to_string(),
        range: found.range(),
        network,
        markdown: render_card(hash, network, &lookup),
        lookup,
    })
}

/// Document links for every transaction hash in `text`, in source order.
pub fn link_all(text: &str, network: Network) -> Vec<TxLink> {
    tx_hash::find_iter(text)
        .map(|m| TxLink {
            hash: m.as_str().to_string(),
            range: m.range(),
            target: network.explorer_tx_url(m.as_str()),
            tooltip: LINK_TOOLTIP,
        })
        .collect()
}

fn render_card(hash: &str, network: Network, lookup: &Lookup) -> String {
    let short = hash.get(..HEADER_HASH_CHARS).unwrap_or(hash);

    let mut md = String::new();
    let _ = write!(md, "### 🔍 NEAR Transaction: `{short}...`\n\n");
    let _ = writeln!(md, "- **Network:** {network}");
    match lookup {
        Lookup::Found(tx) => md.push_str(&render_details(tx)),
        Lookup::NotFound => md.push_str("- **Details:** transaction not found in NearBlocks\n"),
        Lookup::Unavailable => md.push_str("- **Details:** unavailable (API request failed)\n"),
    }
    let _ = write!(
        md,
        "\n[Open in NEAR Explorer]({})\n\n",
        network.explorer_tx_url(hash)
    );
    let _ = write!(md, "[Open in Pikespeak]({})", pikespeak_tx_url(hash));
    md
}
