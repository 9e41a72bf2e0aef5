//! Core library for delivery earnings receipt analysis.
//!
//! Delivery riders upload a screenshot of their in-app earnings screen;
//! an external OCR engine turns it into raw text. This crate takes that
//! text plus the rider's platform choice and produces a structured,
//! confidence-scored, validated earnings record:
//! - platform classification against per-platform keyword/pattern sets
//! - reporting-period detection (single day or weekly range, with a
//!   06:00 business-day rollover)
//! - per-day breakdown extraction for weekly reports
//! - total amount / delivery-count extraction
//! - composite confidence score and business-rule validation
//!
//! The pipeline is a pure function of its inputs: no I/O, no shared
//! state, no error paths. Malformed text degrades to a zeroed result
//! that validation rejects with inspectable warnings.

pub mod clock;
pub mod error;
pub mod models;
pub mod receipt;

pub use clock::{BusinessClock, FixedClock, KstClock};
pub use error::{EarnrError, Result};
pub use models::config::EngineConfig;
pub use models::receipt::{
    Analysis, DailyBreakdownEntry, ExtractionResult, PeriodKind, Platform, ValidationOutcome,
};
pub use receipt::{ReceiptAnalyzer, ReceiptParser};
