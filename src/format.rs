//! Pure display formatting for raw transaction fields.

#[cfg(not(target_arch = "wasm32"))]
use std::time::SystemTime;
#[cfg(not(target_arch = "wasm32"))]
use std::time::UNIX_EPOCH;

use chrono::DateTime;
#[cfg(target_arch = "wasm32")]
use web_time::SystemTime;
#[cfg(target_arch = "wasm32")]
use web_time::UNIX_EPOCH;

/// Ticker code appended to formatted amounts.
pub const CURRENCY_CODE: &str = "ETH";

/// Unix seconds right now, platform-appropriate clock.
pub fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

/// Abbreviates an address (or any hex identifier) to `first6...last4`.
///
/// Anything empty or shorter than 10 characters cannot be abbreviated
/// and displays as "Invalid Address".
pub fn truncate_address(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() < 10 {
        return "Invalid Address".to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Human-readable elapsed time, largest whole unit only.
pub fn relative_time(timestamp_secs: i64) -> String {
    relative_time_at(timestamp_secs, now_unix())
}

fn relative_time_at(timestamp_secs: i64, now_secs: i64) -> String {
    if timestamp_secs > now_secs {
        return "Just now".to_string();
    }
    let elapsed = now_secs - timestamp_secs;
    if elapsed < 60 {
        format!("{} secs ago", elapsed)
    } else if elapsed < 3600 {
        format!("{} mins ago", elapsed / 60)
    } else if elapsed < 86400 {
        format!("{} hrs ago", elapsed / 3600)
    } else {
        format!("{} days ago", elapsed / 86400)
    }
}

/// Full timestamp in UTC, 24-hour clock, day-month-year order.
pub fn absolute_timestamp(timestamp_secs: i64) -> String {
    match DateTime::from_timestamp(timestamp_secs, 0) {
        Some(dt) => dt.format("%d-%m-%Y %H:%M:%S UTC").to_string(),
        None => "Invalid Timestamp".to_string(),
    }
}

/// Amount with exactly six decimal places and the currency code.
pub fn format_amount(value: f64) -> String {
    format!("{:.6} {}", value, CURRENCY_CODE)
}

/// Drops the parameter list from a decoded method signature,
/// e.g. `transfer(address,uint256)` becomes `transfer`.
pub fn simplify_method_name(raw: &str) -> &str {
    match raw.find('(') {
        Some(idx) => &raw[..idx],
        None => raw,
    }
}
