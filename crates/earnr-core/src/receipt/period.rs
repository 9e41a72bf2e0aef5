//! Reporting-period extraction.

use chrono::{Datelike, NaiveDate};
use regex::{Captures, Regex};
use tracing::{debug, warn};

use super::patterns::{
    DATE_KOREAN_MD, DATE_MD_WEEKDAY, DATE_SLASH_MD, DATE_YMD, WEEK_RANGE_KOREAN, WEEK_RANGE_MD,
    WEEK_RANGE_YMD,
};
use crate::clock::BusinessClock;
use crate::models::receipt::{PeriodKind, Platform};

/// Determine the reporting period the text describes.
///
/// Weekly-range patterns run before any single-date pattern so a range
/// separator is never misread as two stray dates, and platform-specific
/// single-date formats run before the generic fallback. Never fails:
/// with no date token at all, the current business day is assumed.
pub fn extract_period(text: &str, platform: Platform, clock: &dyn BusinessClock) -> PeriodKind {
    let today = clock.today();

    if let Some(period) = match_weekly(text, today.year()) {
        return period;
    }

    for rx in single_date_patterns(platform) {
        if let Some(date) = match_single_date(rx, text, today.year()) {
            if date > today {
                warn!(%date, %today, "recognized date is in the future, clamping to business today");
                return PeriodKind::SingleDay { date: today };
            }
            return PeriodKind::SingleDay { date };
        }
    }

    debug!("no date token recognized, assuming business today");
    PeriodKind::SingleDay { date: today }
}

fn match_weekly(text: &str, fallback_year: i32) -> Option<PeriodKind> {
    for rx in [&*WEEK_RANGE_YMD, &*WEEK_RANGE_KOREAN, &*WEEK_RANGE_MD] {
        if let Some(caps) = rx.captures(text) {
            let start = captured_date(&caps, "y1", "m1", "d1", fallback_year);
            let end = captured_date(&caps, "y2", "m2", "d2", fallback_year);
            if let (Some(start), Some(end)) = (start, end) {
                return Some(PeriodKind::weekly(start, end));
            }
        }
    }
    None
}

fn single_date_patterns(platform: Platform) -> Vec<&'static Regex> {
    let mut patterns: Vec<&'static Regex> = match platform {
        Platform::Baemin => vec![&*DATE_MD_WEEKDAY, &*DATE_KOREAN_MD],
        Platform::Coupang => vec![&*DATE_YMD],
        Platform::Other => Vec::new(),
    };
    patterns.extend([&*DATE_YMD, &*DATE_KOREAN_MD, &*DATE_MD_WEEKDAY, &*DATE_SLASH_MD]);
    patterns
}

fn match_single_date(rx: &Regex, text: &str, fallback_year: i32) -> Option<NaiveDate> {
    let caps = rx.captures(text)?;
    captured_date(&caps, "y", "m", "d", fallback_year)
}

/// Build a date from named capture groups; a missing year group falls
/// back to the clock's year.
fn captured_date(
    caps: &Captures<'_>,
    year_group: &str,
    month_group: &str,
    day_group: &str,
    fallback_year: i32,
) -> Option<NaiveDate> {
    let year = match caps.name(year_group) {
        Some(m) => m.as_str().parse().ok()?,
        None => fallback_year,
    };
    let month: u32 = caps.name(month_group)?.as_str().parse().ok()?;
    let day: u32 = caps.name(day_group)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn clock() -> FixedClock {
        FixedClock::kst(2025, 5, 29, 12, 0)
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_full_date() {
        let period = extract_period("2025.05.20 배달 내역", Platform::Coupang, &clock());
        assert_eq!(period, PeriodKind::SingleDay { date: day(2025, 5, 20) });
    }

    #[test]
    fn test_weekday_date_infers_year() {
        let period = extract_period("05/29 목", Platform::Baemin, &clock());
        assert_eq!(period, PeriodKind::SingleDay { date: day(2025, 5, 29) });
    }

    #[test]
    fn test_korean_month_day() {
        let period = extract_period("5월 20일 수행 내역", Platform::Baemin, &clock());
        assert_eq!(period, PeriodKind::SingleDay { date: day(2025, 5, 20) });
    }

    #[test]
    fn test_weekly_range_full_dates() {
        let period = extract_period("2025.2.19 ~ 2025.2.25", Platform::Coupang, &clock());
        assert_eq!(
            period,
            PeriodKind::WeeklyRange { start: day(2025, 2, 19), end: day(2025, 2, 25) }
        );
    }

    #[test]
    fn test_weekly_range_bare_month_day_infers_year() {
        let period = extract_period("5/19 ~ 5/25 주간 내역", Platform::Other, &clock());
        assert_eq!(
            period,
            PeriodKind::WeeklyRange { start: day(2025, 5, 19), end: day(2025, 5, 25) }
        );
    }

    #[test]
    fn test_weekly_range_korean_dates() {
        let period = extract_period("2월 19일 ~ 2월 25일", Platform::Baemin, &clock());
        assert_eq!(
            period,
            PeriodKind::WeeklyRange { start: day(2025, 2, 19), end: day(2025, 2, 25) }
        );
    }

    #[test]
    fn test_reversed_range_is_normalized() {
        let period = extract_period("2025.2.25 ~ 2025.2.19", Platform::Coupang, &clock());
        assert_eq!(
            period,
            PeriodKind::WeeklyRange { start: day(2025, 2, 19), end: day(2025, 2, 25) }
        );
    }

    #[test]
    fn test_future_date_clamps_to_today() {
        let period = extract_period("2026.05.29 배달 내역", Platform::Coupang, &clock());
        assert_eq!(period, PeriodKind::SingleDay { date: day(2025, 5, 29) });
    }

    #[test]
    fn test_no_date_defaults_to_today() {
        let period = extract_period("배달 내역 53,920원", Platform::Baemin, &clock());
        assert_eq!(period, PeriodKind::SingleDay { date: day(2025, 5, 29) });
    }

    #[test]
    fn test_before_rollover_default_is_previous_day() {
        let night = FixedClock::kst(2025, 5, 30, 2, 0);
        let period = extract_period("배달 내역", Platform::Other, &night);
        assert_eq!(period, PeriodKind::SingleDay { date: day(2025, 5, 29) });
    }

    #[test]
    fn test_invalid_calendar_date_falls_through() {
        // 13th month cannot build a date; the generic fallback defaults
        // to business today instead of failing.
        let period = extract_period("2025.13.40", Platform::Coupang, &clock());
        assert_eq!(period, PeriodKind::SingleDay { date: day(2025, 5, 29) });
    }
}
