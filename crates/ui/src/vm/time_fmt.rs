use chrono::{DateTime, Utc};

/// Human date for receipts, e.g. "Nov 14, 2023 at 22:13 UTC".
#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%b %-d, %Y at %H:%M UTC").to_string()
}
