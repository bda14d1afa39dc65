//! Scale-aware number formatting so figures stay short in dense layouts.

use crate::text::pad_left;

const THOUSAND: u64 = 1_000;
const MILLION: u64 = 1_000_000;

/// Token count with one decimal of `k`/`M` scale, e.g. `1.5M`, `12.3k`, `999`.
#[must_use]
pub fn format_tokens(count: u64) -> String {
    if count >= MILLION {
        format!("{:.1}M", count as f64 / MILLION as f64)
    } else if count >= THOUSAND {
        format!("{:.1}k", count as f64 / THOUSAND as f64)
    } else {
        count.to_string()
    }
}

/// [`format_tokens`] right-aligned in `width` cells.
#[must_use]
pub fn format_tokens_fixed(count: u64, width: usize) -> String {
    pad_left(&format_tokens(count), width)
}

/// Integer-scaled count without decimals, e.g. `12k`, `3M`.
#[must_use]
pub fn format_number(count: u64) -> String {
    if count >= MILLION {
        format!("{}M", count / MILLION)
    } else if count >= THOUSAND {
        format!("{}k", count / THOUSAND)
    } else {
        count.to_string()
    }
}

/// Dollar amount: whole dollars from $100, one decimal from $10, else cents.
#[must_use]
pub fn format_cost(amount: f64) -> String {
    if amount >= 100.0 {
        format!("${amount:.0}")
    } else if amount >= 10.0 {
        format!("${amount:.1}")
    } else {
        format!("${amount:.2}")
    }
}

/// Like [`format_cost`] but drops the decimal from $10 upwards.
#[must_use]
pub fn format_cost_short(amount: f64) -> String {
    if amount >= 10.0 {
        format!("${amount:.0}")
    } else {
        format!("${amount:.2}")
    }
}

#[must_use]
pub fn format_percent(percent: i32) -> String {
    format!("{percent}%")
}

/// [`format_percent`] right-aligned in `width` cells.
#[must_use]
pub fn format_percent_fixed(percent: i32, width: usize) -> String {
    pad_left(&format_percent(percent), width)
}

/// Collapse a long path to `~/<last segment>`.
///
/// This is a narrow heuristic, not general elision: a path of at most
/// `max_chars` characters, or one with two or fewer `/`-separated segments, is
/// returned unchanged even when it stays too long. The result is never
/// truncated further.
#[must_use]
pub fn shorten_path(path: &str, max_chars: usize) -> String {
    if path.chars().count() <= max_chars {
        return path.to_string();
    }
    let mut segments = path.rsplit('/');
    let last = segments.next().unwrap_or(path);
    if segments.nth(1).is_some() {
        format!("~/{last}")
    } else {
        path.to_string()
    }
}
