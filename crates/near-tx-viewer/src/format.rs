//! Markdown rendering of transaction records.
//!
//! Every function here is total: whatever the indexer sent, the result is
//! displayable text.

use std::fmt::{Display, Write as _};

use chrono::{Local, TimeZone};

use crate::types::{NearToken, TransactionRecord, TxStatus};

/// Placeholder for values the indexer did not provide.
pub const UNKNOWN: &str = "unknown";

/// Human label for a transaction status.
pub fn status_label(status: &TxStatus) -> &str {
    match status {
        TxStatus::Succeeded => "Success",
        TxStatus::Failed => "Failed",
        TxStatus::Other(s) => s,
        TxStatus::Unknown => "Unknown",
    }
}

/// Format a raw yoctoNEAR string as NEAR with six decimals.
///
/// Integers and float notation are both accepted. Absent or non-numeric
/// input is shown as zero.
///
/// ```
/// use near_tx_viewer::format::format_fee;
///
/// assert_eq!(format_fee(Some("1000000000000000000000")), "0.001000");
/// assert_eq!(format_fee(Some("1.5e24")), "1.500000");
/// assert_eq!(format_fee(Some("abc")), "0.000000");
/// assert_eq!(format_fee(None), "0.000000");
/// ```
pub fn format_fee(yocto: Option<&str>) -> String {
    yocto
        .and_then(NearToken::from_yocto_str)
        .unwrap_or_default()
        .to_string()
}

/// Format a nanosecond Unix timestamp in the local time zone.
///
/// Returns [`UNKNOWN`] for absent, non-numeric, non-positive or
/// unrepresentable input.
pub fn format_timestamp_ns(nanos: Option<&str>) -> String {
    format_timestamp_ns_in(nanos, &Local)
}

/// Like [`format_timestamp_ns`], in an explicit time zone.
pub fn format_timestamp_ns_in<Tz>(nanos: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(millis) = nanos.and_then(parse_nanos).map(|ns| ns / 1_000_000) else {
        return UNKNOWN.to_string();
    };
    let Ok(millis) = i64::try_from(millis) else {
        return UNKNOWN.to_string();
    };
    tz.timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Positive nanosecond count. Accepts integers and, as the indexer
/// occasionally sends them, float notation such as `1.7e18`.
fn parse_nanos(s: &str) -> Option<u128> {
    let s = s.trim();
    if let Ok(ns) = s.parse::<i128>() {
        return u128::try_from(ns).ok().filter(|ns| *ns > 0);
    }
    let ns: f64 = s.parse().ok()?;
    (ns.is_finite() && ns >= 1.0 && ns < u128::MAX as f64).then_some(ns as u128)
}

/// Join action kinds with `, `.
pub fn join_actions(actions: &[String]) -> String {
    actions.join(", ")
}

/// Render the detail block of an annotation.
///
/// One markdown bullet per field, in a fixed order. The actions line is
/// left out when there are none.
pub fn render_details(tx: &TransactionRecord) -> String {
    let signer = tx.signer_account.as_deref().unwrap_or(UNKNOWN);
    let receiver = tx.receiver_account.as_deref().unwrap_or(UNKNOWN);
    let block = tx
        .block_height
        .map(|h| h.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string());
    let fee = tx.fee.unwrap_or_default();
    let when = format_timestamp_ns(tx.block_timestamp_nanos.as_deref());

    let mut details = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(details, "- **Status:** {}", status_label(&tx.status));
    let _ = writeln!(details, "- **Signer:** `{signer}`");
    let _ = writeln!(details, "- **Receiver:** `{receiver}`");
    let _ = writeln!(details, "- **Block:** {block}");
    let _ = writeln!(details, "- **Fee:** {fee} NEAR");
    let _ = writeln!(details, "- **Timestamp:** {when}");
    if !tx.actions.is_empty() {
        let _ = writeln!(details, "- **Actions:** {}", join_actions(&tx.actions));
    }
    details
}
