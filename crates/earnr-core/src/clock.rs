//! Business-day clock with a 06:00 rollover.
//!
//! Rider shifts run past midnight, so "today" changes at 06:00 local time
//! rather than 00:00. Production reads the system clock pinned to KST;
//! tests inject a fixed instant.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};

/// Hour of day (local) at which the business day rolls over.
pub const ROLLOVER_HOUR: u32 = 6;

/// KST offset in seconds (+09:00).
const KST_OFFSET_SECS: i32 = 9 * 3600;

/// Narrow clock interface injected into the engine.
pub trait BusinessClock: Send + Sync {
    /// Current instant in the regional offset.
    fn now(&self) -> DateTime<FixedOffset>;

    /// The current business day: before 06:00 local this is still the
    /// previous calendar date.
    fn today(&self) -> NaiveDate {
        let now = self.now();
        let rollover = NaiveTime::from_hms_opt(ROLLOVER_HOUR, 0, 0).unwrap();
        if now.time() < rollover {
            now.date_naive() - Duration::days(1)
        } else {
            now.date_naive()
        }
    }

    /// Whether `date` is the current business day. Callers use this to
    /// gate reward points for freshly submitted receipts.
    fn is_business_today(&self, date: NaiveDate) -> bool {
        date == self.today()
    }
}

/// System clock pinned to Korea Standard Time.
#[derive(Debug, Clone, Copy, Default)]
pub struct KstClock;

impl BusinessClock for KstClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&kst())
    }
}

/// Fixed clock for tests and replay.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<FixedOffset>);

impl FixedClock {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self(instant)
    }

    /// Fixed KST instant from date and time components.
    pub fn kst(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        let instant = kst()
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .unwrap();
        Self(instant)
    }
}

impl BusinessClock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

fn kst() -> FixedOffset {
    FixedOffset::east_opt(KST_OFFSET_SECS).unwrap()
}
