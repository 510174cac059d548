// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Format a date as English long month name and day, e.g. "April 14".
///
/// The day is the calendar day at the timestamp's own offset. chrono's `%B`
/// is always English, so this does not depend on the host locale.
pub fn format_month_day(date: DateTime<FixedOffset>) -> String {
    date.format("%B %-d").to_string()
}
