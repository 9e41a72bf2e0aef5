//! Full extraction pipeline over one recognized screen text.

use chrono::Datelike;
use tracing::{debug, info};

use super::{ReceiptParser, amounts, breakdown, classifier, confidence, period, validate};
use crate::clock::BusinessClock;
use crate::models::config::EngineConfig;
use crate::models::receipt::{Analysis, ExtractionResult, PeriodKind, Platform};

/// Stateless analysis pipeline: classification, period, breakdown,
/// amount/count, confidence, validation. Safe to share across threads
/// and to call concurrently for independent uploads.
pub struct ReceiptAnalyzer {
    config: EngineConfig,
}

impl ReceiptAnalyzer {
    /// Analyzer with default (KRW-calibrated) bounds.
    pub fn new() -> Self {
        Self { config: EngineConfig::default() }
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline.
    ///
    /// The rider's platform hint always routes extraction; the
    /// classifier's independent guess is advisory and logged when the two
    /// disagree. A hint of [`Platform::Other`] falls back to generic
    /// patterns throughout.
    pub fn analyze(&self, text: &str, hint: Platform, clock: &dyn BusinessClock) -> Analysis {
        let detected = classifier::classify(text);
        if detected != hint {
            info!(%hint, %detected, "classifier disagrees with platform hint, keeping the hint");
        } else {
            debug!(%hint, "classifier agrees with platform hint");
        }

        let period = period::extract_period(text, hint, clock);

        let breakdown = match period {
            PeriodKind::WeeklyRange { start, .. } => {
                let entries: Vec<_> = breakdown::extract_breakdown(text, hint, start.year())
                    .into_iter()
                    .filter(|entry| period.contains(entry.date))
                    .collect();
                Some(entries)
            }
            PeriodKind::SingleDay { .. } => None,
        };

        let amount = amounts::extract_amount(text, hint);
        let delivery_count = amounts::extract_count(text, hint);

        let confidence = confidence::score(text, hint, &self.config.confidence);

        let result = ExtractionResult {
            platform: hint,
            period,
            amount,
            delivery_count,
            confidence,
            breakdown,
            raw_text: text.to_string(),
        };

        let validation = validate::validate(&result, &self.config.validation);
        debug!(
            platform = %result.platform,
            period = %result.period,
            amount = result.amount,
            delivery_count = result.delivery_count,
            confidence = result.confidence,
            is_valid = validation.is_valid,
            "receipt analysis complete"
        );

        Analysis { result, validation }
    }
}

impl Default for ReceiptAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptParser for ReceiptAnalyzer {
    fn parse(&self, text: &str, hint: Platform, clock: &dyn BusinessClock) -> Analysis {
        self.analyze(text, hint, clock)
    }
}
