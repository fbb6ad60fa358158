//! Absolute and relative date wording for the card.
//!
//! Absolute dates are rendered in the timestamp's own offset. Relative wording
//! buckets the distance to `now` the way people read it on a feed: "less than
//! a minute", "about 3 hours", "over 2 years".

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Shown if a date cannot be formatted.
const NOT_AVAILABLE: &str = "N/A";

const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none], [year]");

const MINUTES_IN_HOUR: u64 = 60;
const MINUTES_IN_DAY: u64 = 1440;
const MINUTES_IN_MONTH: u64 = 43_200;
const MINUTES_IN_TWO_MONTHS: u64 = 86_400;

/// `"MMM d, yyyy"`, e.g. `Mar 5, 2024`.
pub fn format_date(ts: OffsetDateTime) -> String {
    ts.format(DATE_FORMAT)
        .unwrap_or_else(|_| NOT_AVAILABLE.to_owned())
}

/// Distance from `now` to `then` with a suffix: `"3 days ago"` or
/// `"in 3 days"` when `then` lies in the future.
pub fn format_relative(then: OffsetDateTime, now: OffsetDateTime) -> String {
    let seconds = (now - then).whole_seconds();
    let words = distance_words(seconds.unsigned_abs());
    if seconds < 0 {
        format!("in {words}")
    } else {
        format!("{words} ago")
    }
}

fn distance_words(seconds: u64) -> String {
    let minutes = div_round(seconds, 60);

    if minutes == 0 {
        return "less than a minute".to_owned();
    }
    if minutes < 45 {
        return counted(minutes, "minute");
    }
    if minutes < 90 {
        return "about 1 hour".to_owned();
    }
    if minutes < MINUTES_IN_DAY {
        return format!("about {}", counted(div_round(minutes, MINUTES_IN_HOUR), "hour"));
    }
    if minutes < 2520 {
        return "1 day".to_owned();
    }
    if minutes < MINUTES_IN_MONTH {
        return counted(div_round(minutes, MINUTES_IN_DAY), "day");
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        return format!("about {}", counted(div_round(minutes, MINUTES_IN_MONTH), "month"));
    }

    let months = minutes / MINUTES_IN_MONTH;
    if months < 12 {
        return counted(div_round(minutes, MINUTES_IN_MONTH), "month");
    }
    let years = months / 12;
    match months % 12 {
        0..3 => format!("about {}", counted(years, "year")),
        3..9 => format!("over {}", counted(years, "year")),
        _ => format!("almost {}", counted(years + 1, "year")),
    }
}

fn counted(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

fn div_round(n: u64, d: u64) -> u64 {
    (n + d / 2) / d
}
