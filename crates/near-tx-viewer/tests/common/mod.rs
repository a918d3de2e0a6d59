//! Mock NearBlocks backend for integration tests.

#![allow(dead_code)]

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

pub const HASH: &str = "6zgh2u9DqHHiXzdy9ouTP7oGky2T4nugqzqt9wJZwNFm";
pub const OTHER_HASH: &str = "9SyxvfCzmS5fNmkfD5cq2rGNVqSgpWPwB1ECEFbtSg2";

/// What the mock backend saw of one request.
#[derive(Clone, Debug, Default)]
pub struct SeenRequest {
    pub method: String,
    pub path: String,
    pub accept: Option<String>,
}

/// A running mock backend.
pub struct MockBackend {
    pub addr: SocketAddr,
    pub requests: Arc<Mutex<Vec<SeenRequest>>>,
}

impl MockBackend {
    /// Base URL to hand to the resolver.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of requests served so far.
    pub async fn request_count(&self) -> usize {
        self.requests.lock().await.len()
    }
}

/// Start a backend answering every request with `status` and `body`.
pub async fn start_backend(status: u16, body: impl Into<String>) -> MockBackend {
    let body = body.into();
    start_programmable_backend(move |_| {
        let body = body.clone();
        async move { (status, body) }
    })
    .await
}

/// Start a backend computing each response from the request path.
pub async fn start_programmable_backend<F, Fut>(f: F) -> MockBackend
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let f = Arc::new(f);

    let seen = requests.clone();
    tokio::spawn(async move {
        loop {
            let Ok((socket, _)) = listener.accept().await else {
                break;
            };
            let f = f.clone();
            let seen = seen.clone();
            tokio::spawn(async move {
                let (read, mut write) = socket.into_split();
                let mut reader = BufReader::new(read);

                let mut request = SeenRequest::default();
                let mut line = String::new();
                if reader.read_line(&mut line).await.unwrap_or(0) == 0 {
                    return;
                }
                let mut parts = line.split_whitespace();
                request.method = parts.next().unwrap_or_default().to_string();
                request.path = parts.next().unwrap_or_default().to_string();

                loop {
                    line.clear();
                    if reader.read_line(&mut line).await.unwrap_or(0) == 0 {
                        break;
                    }
                    let header = line.trim_end();
                    if header.is_empty() {
                        break;
                    }
                    if let Some((name, value)) = header.split_once(':') {
                        if name.eq_ignore_ascii_case("accept") {
                            request.accept = Some(value.trim().to_string());
                        }
                    }
                }

                let path = request.path.clone();
                seen.lock().await.push(request);

                let (status, body) = f(path).await;
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason(status),
                    body.len(),
                    body
                );
                let _ = write.write_all(response.as_bytes()).await;
                let _ = write.shutdown().await;
            });
        }
    });

    MockBackend { addr, requests }
}

/// Start a backend that accepts connections and never answers.
pub async fn start_silent_backend() -> MockBackend {
    start_programmable_backend(|_| async {
        tokio::time::sleep(Duration::from_secs(60)).await;
        (200, "{}".to_string())
    })
    .await
}

/// Start a backend that answers with `status` and promises a longer body
/// than it sends, then hangs up.
pub async fn start_truncated_backend(status: u16) -> MockBackend {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));

    let seen = requests.clone();
    tokio::spawn(async move {
        loop {
            let Ok((socket, _)) = listener.accept().await else {
                break;
            };
            let seen = seen.clone();
            tokio::spawn(async move {
                let (read, mut write) = socket.into_split();
                let mut reader = BufReader::new(read);
                let mut line = String::new();
                while reader.read_line(&mut line).await.unwrap_or(0) > 0 {
                    if line.trim_end().is_empty() {
                        break;
                    }
                    line.clear();
                }
                seen.lock().await.push(SeenRequest::default());

                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: 1000\r\nConnection: close\r\n\r\n{{\"mess",
                    status,
                    reason(status),
                );
                let _ = write.write_all(response.as_bytes()).await;
                let _ = write.shutdown().await;
            });
        }
    });

    MockBackend { addr, requests }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        204 => "No Content",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// A complete `txns[]` entry, shaped like a NearBlocks response.
pub fn full_txn(hash: &str) -> serde_json::Value {
    serde_json::json!({
        "transaction_hash": hash,
        "signer_account_id": "alice.near",
        "receiver_account_id": "wrap.near",
        "block_timestamp": "1700000000000000000",
        "block": { "block_height": 105_000_000u64 },
        "actions": [
            { "action": "FUNCTION_CALL", "method": "near_deposit" },
            { "action": "TRANSFER" }
        ],
        "outcomes": { "status": true },
        "outcomes_agg": { "transaction_fee": "1000000000000000000000" }
    })
}
