//! Display formatting for amounts and timestamps.

use chrono::{TimeZone, Utc};

/// Formats a whole-yen amount in ja-JP currency style: `￥50,000`.
pub fn format_yen(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("￥{}", grouped)
}

/// Formats epoch milliseconds as `YYYY/MM/DD HH:MM` in the given time zone.
///
/// Out-of-range timestamps fall back to the raw number.
pub fn format_timestamp<Tz: TimeZone>(timestamp_ms: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match Utc.timestamp_millis_opt(timestamp_ms).single() {
        Some(utc) => utc.with_timezone(tz).format("%Y/%m/%d %H:%M").to_string(),
        None => timestamp_ms.to_string(),
    }
}
