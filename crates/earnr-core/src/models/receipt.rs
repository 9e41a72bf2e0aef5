//! Data models for one receipt extraction call.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Delivery platform that produced the earnings screen.
///
/// Closed set: adding a platform means adding a variant plus its pattern
/// tables, not a plugin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// Baemin Connect (배민커넥트).
    Baemin,
    /// Coupang Eats delivery partner (쿠팡이츠).
    Coupang,
    /// Unrecognized or unsupported platform; generic patterns apply.
    #[default]
    Other,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Baemin => "baemin",
            Platform::Coupang => "coupang",
            Platform::Other => "other",
        };
        f.write_str(name)
    }
}

/// Reporting period covered by the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PeriodKind {
    /// A single business day.
    SingleDay { date: NaiveDate },
    /// A weekly report over an inclusive date range.
    WeeklyRange { start: NaiveDate, end: NaiveDate },
}

impl PeriodKind {
    /// Build a weekly range, normalizing ordering so `start <= end` always
    /// holds.
    pub fn weekly(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            PeriodKind::WeeklyRange { start: a, end: b }
        } else {
            PeriodKind::WeeklyRange { start: b, end: a }
        }
    }

    pub fn is_weekly(&self) -> bool {
        matches!(self, PeriodKind::WeeklyRange { .. })
    }

    /// Whether `date` falls inside the period.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            PeriodKind::SingleDay { date: day } => *day == date,
            PeriodKind::WeeklyRange { start, end } => *start <= date && date <= *end,
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodKind::SingleDay { date } => write!(f, "{}", date),
            PeriodKind::WeeklyRange { start, end } => write!(f, "{} ~ {}", start, end),
        }
    }
}

/// One per-day row of a weekly report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBreakdownEntry {
    pub date: NaiveDate,

    /// Earnings for the day in won.
    pub amount: u64,

    /// Deliveries for the day, when the screen shows one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_count: Option<u32>,
}

/// Structured output of one extraction call. Immutable once assembled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Platform whose pattern set drove the extraction (the caller's hint).
    pub platform: Platform,

    /// Reporting period the screen covers.
    pub period: PeriodKind,

    /// Total earnings in won; 0 when no amount token was recognized.
    pub amount: u64,

    /// Total delivery count; 0 when no count token was recognized.
    pub delivery_count: u32,

    /// Composite extraction confidence in [0, 1].
    pub confidence: f64,

    /// Per-day rows, present only for weekly reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Vec<DailyBreakdownEntry>>,

    /// The recognized text the result was extracted from.
    pub raw_text: String,
}

/// Business-rule verdict over an [`ExtractionResult`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// False when the record must be rejected and re-captured.
    pub is_valid: bool,

    /// Human-readable issues; advisory when `is_valid` is true.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ValidationOutcome {
    /// Valid with no warnings at all.
    pub fn is_clean(&self) -> bool {
        self.is_valid && self.warnings.is_empty()
    }
}

/// The pair handed back to the caller: extraction plus its verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub result: ExtractionResult,
    pub validation: ValidationOutcome,
}
