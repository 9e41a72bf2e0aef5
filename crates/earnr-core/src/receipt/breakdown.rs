//! Per-day breakdown extraction for weekly reports.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use regex::{Captures, Regex};
use tracing::debug;

use super::amounts::parse_won;
use super::patterns::{DAY_LINE_AMOUNT, DAY_LINE_COUNT, DAY_LINE_FULL};
use crate::models::receipt::{DailyBreakdownEntry, Platform};

/// Kinds of per-day lines, tried in this order for each line.
#[derive(Clone, Copy)]
enum LineKind {
    Full,
    AmountOnly,
    CountOnly,
}

/// Extract per-day rows from weekly report text.
///
/// Weekly screens interleave a per-day amount line and a separate per-day
/// count line in either order; the merge tolerates both. `anchor_year`
/// supplies the year for lines carrying only month/day tokens (the year
/// is usually printed once, in the range header). Duplicate dates merge
/// keeping the larger amount; a delivery count already seen survives the
/// merge when the winning line lacks one. Output is sorted ascending by
/// date. An empty result is valid: weekly header, no parsable rows.
pub fn extract_breakdown(
    text: &str,
    platform: Platform,
    anchor_year: i32,
) -> Vec<DailyBreakdownEntry> {
    let mut entries = Vec::new();

    for line in text.lines() {
        for (kind, rx) in day_line_rules(platform) {
            if let Some(caps) = rx.captures(line) {
                if let Some(entry) = build_entry(&caps, kind, anchor_year) {
                    entries.push(entry);
                }
                // first matching pattern wins for this line
                break;
            }
        }
    }

    debug!(rows = entries.len(), "scanned weekly breakdown lines");
    merge_entries(entries)
}

// The known platforms currently share the same per-day line shapes
// (optional year prefix, optional weekday suffix); a platform that
// diverges gets its own table here.
fn day_line_rules(_platform: Platform) -> [(LineKind, &'static Regex); 3] {
    [
        (LineKind::Full, &*DAY_LINE_FULL),
        (LineKind::AmountOnly, &*DAY_LINE_AMOUNT),
        (LineKind::CountOnly, &*DAY_LINE_COUNT),
    ]
}

fn build_entry(
    caps: &Captures<'_>,
    kind: LineKind,
    anchor_year: i32,
) -> Option<DailyBreakdownEntry> {
    let year = match caps.name("y") {
        Some(m) => m.as_str().parse().ok()?,
        None => anchor_year,
    };
    let month: u32 = caps.name("m")?.as_str().parse().ok()?;
    let day: u32 = caps.name("d")?.as_str().parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    let amount = match kind {
        LineKind::Full | LineKind::AmountOnly => parse_won(caps.name("amt")?.as_str())?,
        // completed by an amount-bearing line for the same date
        LineKind::CountOnly => 0,
    };
    let delivery_count = match kind {
        LineKind::Full | LineKind::CountOnly => caps.name("cnt")?.as_str().parse().ok(),
        LineKind::AmountOnly => None,
    };

    Some(DailyBreakdownEntry { date, amount, delivery_count })
}

fn merge_entries(entries: Vec<DailyBreakdownEntry>) -> Vec<DailyBreakdownEntry> {
    let mut by_date: BTreeMap<NaiveDate, DailyBreakdownEntry> = BTreeMap::new();

    for entry in entries {
        by_date
            .entry(entry.date)
            .and_modify(|kept| {
                if entry.amount > kept.amount {
                    let delivery_count = entry.delivery_count.or(kept.delivery_count);
                    *kept = DailyBreakdownEntry { delivery_count, ..entry };
                } else if kept.delivery_count.is_none() {
                    kept.delivery_count = entry.delivery_count;
                }
            })
            .or_insert(entry);
    }

    by_date.into_values().collect()
}
