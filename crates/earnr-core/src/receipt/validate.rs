//! Business-rule validation of an assembled extraction result.

use crate::models::config::ValidationConfig;
use crate::models::receipt::{ExtractionResult, ValidationOutcome};

/// Validate an extraction against business-rule bounds. Pure and total.
///
/// A missing amount or delivery count rejects the record outright and the
/// caller prompts for a re-capture. Every other rule is an advisory
/// warning: suspicious values are surfaced, not silently rejected.
pub fn validate(result: &ExtractionResult, config: &ValidationConfig) -> ValidationOutcome {
    let mut warnings = Vec::new();
    let mut is_valid = true;

    if result.amount == 0 {
        is_valid = false;
        warnings.push("no amount detected".to_string());
    }

    if result.delivery_count == 0 {
        is_valid = false;
        warnings.push("no delivery count detected".to_string());
    }

    if result.confidence < config.min_confidence {
        warnings.push("low recognition confidence, request a clearer image".to_string());
    }

    if result.amount > config.max_amount {
        warnings.push("amount unusually high".to_string());
    }

    if result.amount > 0 && result.amount < config.min_amount {
        warnings.push("amount unusually low".to_string());
    }

    if result.amount > 0 && result.delivery_count > 0 {
        let average = result.amount / u64::from(result.delivery_count);
        if average < config.min_per_delivery || average > config.max_per_delivery {
            warnings.push("per-delivery average out of expected range".to_string());
        }
    }

    if result.delivery_count > config.max_delivery_count {
        warnings.push("delivery count unusually high".to_string());
    }

    ValidationOutcome { is_valid, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::receipt::{PeriodKind, Platform};
    use chrono::NaiveDate;

    fn result(amount: u64, delivery_count: u32, confidence: f64) -> ExtractionResult {
        ExtractionResult {
            platform: Platform::Baemin,
            period: PeriodKind::SingleDay {
                date: NaiveDate::from_ymd_opt(2025, 5, 29).unwrap(),
            },
            amount,
            delivery_count,
            confidence,
            breakdown: None,
            raw_text: String::new(),
        }
    }

    fn config() -> ValidationConfig {
        ValidationConfig::default()
    }

    #[test]
    fn test_clean_result_passes() {
        let outcome = validate(&result(53_920, 17, 0.95), &config());
        assert!(outcome.is_valid);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_missing_amount_is_fatal() {
        let outcome = validate(&result(0, 17, 0.95), &config());
        assert!(!outcome.is_valid);
        assert!(outcome.warnings.iter().any(|w| w == "no amount detected"));
    }

    #[test]
    fn test_missing_count_is_fatal() {
        let outcome = validate(&result(53_920, 0, 0.95), &config());
        assert!(!outcome.is_valid);
        assert!(outcome.warnings.iter().any(|w| w == "no delivery count detected"));
    }

    #[test]
    fn test_low_confidence_warns_without_rejecting() {
        let outcome = validate(&result(53_920, 17, 0.5), &config());
        assert!(outcome.is_valid);
        assert!(outcome
            .warnings
            .iter()
            .any(|w| w.contains("low recognition confidence")));
    }

    #[test]
    fn test_low_confidence_never_rescues_invalid_result() {
        // Dropping confidence must not flip a rejected record to valid.
        for confidence in [0.69, 0.4, 0.0] {
            let outcome = validate(&result(0, 17, confidence), &config());
            assert!(!outcome.is_valid);
            assert!(outcome
                .warnings
                .iter()
                .any(|w| w.contains("low recognition confidence")));
        }
    }

    #[test]
    fn test_amount_bounds_warn() {
        let high = validate(&result(1_500_000, 80, 0.9), &config());
        assert!(high.is_valid);
        assert!(high.warnings.iter().any(|w| w == "amount unusually high"));

        let low = validate(&result(4_000, 1, 0.9), &config());
        assert!(low.is_valid);
        assert!(low.warnings.iter().any(|w| w == "amount unusually low"));
    }

    #[test]
    fn test_per_delivery_average_band() {
        let high_avg = validate(&result(60_000, 1, 0.9), &config());
        assert!(high_avg.is_valid);
        assert!(high_avg
            .warnings
            .iter()
            .any(|w| w == "per-delivery average out of expected range"));

        let low_avg = validate(&result(10_000, 10, 0.9), &config());
        assert!(low_avg
            .warnings
            .iter()
            .any(|w| w == "per-delivery average out of expected range"));
    }

    #[test]
    fn test_count_ceiling_warns() {
        let outcome = validate(&result(500_000, 120, 0.9), &config());
        assert!(outcome.is_valid);
        assert!(outcome.warnings.iter().any(|w| w == "delivery count unusually high"));
    }
}
