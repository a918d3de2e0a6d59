//! Annotate - Play the editor host from the command line
//!
//! Covers: document links, hover card at a byte offset
//!
//! Run:
//!   cargo run --example annotate -- <file>            # list links
//!   cargo run --example annotate -- <file> <offset>   # hover card
//!
//! Configure with environment variables:
//!   NEAR_TX_VIEWER_NETWORK=testnet
//!   NEAR_TX_VIEWER_TIMEOUT_MS=3000
//!   RUST_LOG=near_tx_viewer=debug

use near_tx_viewer::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: annotate <file> [byte-offset]");
        std::process::exit(2);
    };
    let offset = args.next().map(|s| s.parse::<usize>()).transpose()?;

    let text = std::fs::read_to_string(&path)?;
    let viewer = TxViewer::from_env()?;

    match offset {
        None => {
            let links = viewer.links(&text);
            println!("{} transaction hash(es) on {}", links.len(), viewer.network());
            for link in links {
                println!("{:>8}..{:<8} {}", link.range.start, link.range.end, link.target);
            }
        }
        Some(offset) => match viewer.annotate_at(&text, offset).await {
            Some(card) => println!("{}", card.markdown),
            None => println!("No transaction hash at byte {offset}"),
        },
    }

    Ok(())
}
