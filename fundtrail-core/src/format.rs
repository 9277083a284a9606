//! Display formatting in the site's en-US conventions.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::numbers::floor_f64_to_u64;

static TAG_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"<[^>]*>").ok());

/// Group digits with commas and keep up to three fraction digits ("12,000", "1,234.5").
#[must_use]
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

/// `h:mm:ss` when at least an hour, otherwise `m:ss`.
#[must_use]
pub fn format_clock(total_seconds: u64) -> String {
    let hours = total_seconds / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Metres as kilometres: one decimal from 10 km up, two below.
#[must_use]
pub fn format_distance_km(meters: f64) -> String {
    let km = meters / 1_000.0;
    if km >= 10.0 {
        format!("{km:.1}")
    } else {
        format!("{km:.2}")
    }
}

/// Episode duration from a feed field.
///
/// Values that already look like a clock ("45:23") pass through; bare second
/// counts are converted; anything unparsable yields an empty string.
#[must_use]
pub fn format_duration_text(raw: &str) -> String {
    let raw = raw.trim();
    if raw.contains(':') {
        return raw.to_string();
    }
    let digits: String = raw.chars().take_while(char::is_ascii_digit).collect();
    digits
        .parse::<u64>()
        .map(format_clock)
        .unwrap_or_default()
}

/// Numeric variant of [`format_duration_text`].
#[must_use]
pub fn format_duration_seconds(seconds: f64) -> String {
    if seconds.is_finite() {
        format_clock(floor_f64_to_u64(seconds))
    } else {
        String::new()
    }
}

/// Remove anything that looks like a markup tag.
#[must_use]
pub fn strip_tags(html: &str) -> String {
    TAG_RE
        .as_ref()
        .map_or_else(|| html.to_string(), |re| re.replace_all(html, "").into_owned())
}

/// First `limit` characters of `text`.
#[must_use]
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    text.char_indices()
        .nth(limit)
        .map_or(text, |(idx, _)| &text[..idx])
}

/// Strip markup, cut to `limit` characters, trim and append an ellipsis.
#[must_use]
pub fn excerpt(html: &str, limit: usize) -> String {
    if html.is_empty() {
        return String::new();
    }
    let text = strip_tags(html);
    format!("{}...", truncate_chars(&text, limit).trim())
}

/// "Jan 5, 2025" from the date shapes feeds hand us; unknown shapes pass through.
#[must_use]
pub fn format_short_date(raw: &str) -> String {
    parse_feed_date(raw).map_or_else(
        || raw.to_string(),
        |date| date.format("%b %-d, %Y").to_string(),
    )
}

/// Parse the calendar date of a feed timestamp.
#[must_use]
pub fn parse_feed_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.date())
        .ok()
        .or_else(|| DateTime::parse_from_rfc2822(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}
