//! Transaction records as reported by the NearBlocks indexer.
//!
//! NearBlocks is loose about its response shapes: fields go missing, numbers
//! arrive as strings and vice versa. [`TransactionRecord::from_json`] reads a
//! raw `txns[]` entry field by field instead of deriving `Deserialize`, so one
//! odd field never costs the whole record.

use serde::Serialize;
use serde_json::Value;

use super::NearToken;

/// Final outcome of a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TxStatus {
    /// `outcomes.status == true`.
    Succeeded,
    /// `outcomes.status == false`.
    Failed,
    /// Any other non-null status value, in its string form.
    Other(String),
    /// Status absent or null.
    #[default]
    Unknown,
}

impl TxStatus {
    /// Classify a raw `outcomes.status` value.
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => TxStatus::Unknown,
            Some(Value::Bool(true)) => TxStatus::Succeeded,
            Some(Value::Bool(false)) => TxStatus::Failed,
            Some(Value::String(s)) => TxStatus::Other(s.clone()),
            Some(other) => TxStatus::Other(other.to_string()),
        }
    }
}

/// A single transaction as returned by `GET /v1/txns/{hash}`.
///
/// Every field is optional. Absent values are rendered as `unknown` (or a
/// zero fee) by the formatter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TransactionRecord {
    /// `transaction_hash`.
    pub hash: Option<String>,
    /// `signer_account_id`.
    pub signer_account: Option<String>,
    /// `receiver_account_id`.
    pub receiver_account: Option<String>,
    /// `block_timestamp`, nanoseconds since the Unix epoch, as sent.
    pub block_timestamp_nanos: Option<String>,
    /// `block.block_height`.
    pub block_height: Option<u64>,
    /// `outcomes.status`.
    pub status: TxStatus,
    /// `outcomes_agg.transaction_fee`, if it is a numeric yoctoNEAR amount.
    pub fee: Option<NearToken>,
    /// `actions[].action`, in order.
    pub actions: Vec<String>,
}

impl TransactionRecord {
    /// Build a record from one raw `txns[]` entry. Never fails.
    pub fn from_json(tx: &Value) -> Self {
        Self {
            hash: string_field(tx.get("transaction_hash")),
            signer_account: string_field(tx.get("signer_account_id")),
            receiver_account: string_field(tx.get("receiver_account_id")),
            block_timestamp_nanos: scalar_string(tx.get("block_timestamp")),
            block_height: tx
                .get("block")
                .and_then(|b| b.get("block_height"))
                .and_then(as_u64_lenient),
            status: TxStatus::from_json(tx.get("outcomes").and_then(|o| o.get("status"))),
            fee: scalar_string(tx.get("outcomes_agg").and_then(|o| o.get("transaction_fee")))
                .and_then(|s| NearToken::from_yocto_str(&s)),
            actions: tx
                .get("actions")
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|item| item.get("action").and_then(Value::as_str))
                        .filter(|action| !action.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

fn string_field(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(String::from)
}

/// Strings as-is, numbers in their JSON form; anything else is absent.
fn scalar_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn as_u64_lenient(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
