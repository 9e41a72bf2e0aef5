//! Receipt text extraction and classification.
//!
//! Six independent stages, each a total function over the recognized
//! text: platform classification, period extraction, weekly per-day
//! breakdown, amount/count extraction, confidence scoring, and
//! validation. [`ReceiptAnalyzer`] wires them into one pipeline.

mod analyzer;
pub mod amounts;
pub mod breakdown;
pub mod classifier;
pub mod confidence;
pub mod patterns;
pub mod period;
pub mod validate;

pub use analyzer::ReceiptAnalyzer;

use crate::clock::BusinessClock;
use crate::models::receipt::{Analysis, Platform};

/// Trait for turning recognized screen text into a validated analysis.
pub trait ReceiptParser {
    /// Analyze one screen text under the rider's platform hint.
    fn parse(&self, text: &str, hint: Platform, clock: &dyn BusinessClock) -> Analysis;
}
