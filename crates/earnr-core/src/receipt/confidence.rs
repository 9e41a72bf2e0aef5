//! Composite extraction-confidence scoring.

use super::patterns::{BAEMIN_QUALITY, COUPANG_QUALITY, GENERIC_QUALITY, Marker};
use crate::models::config::ConfidenceConfig;
use crate::models::receipt::Platform;

/// Score how trustworthy an extraction from `text` is, clamped to [0, 1].
///
/// A fixed marker set per platform contributes weighted hits. Texts below
/// the short threshold are penalized (truncated OCR output
/// under-represents every marker); texts above the long threshold get a
/// small corroboration bonus. An unknown platform scores against the
/// generic set plus a flat base.
pub fn score(text: &str, platform: Platform, config: &ConfidenceConfig) -> f64 {
    let (markers, base): (&[(Marker, f64)], f64) = match platform {
        Platform::Baemin => (&BAEMIN_QUALITY, 0.0),
        Platform::Coupang => (&COUPANG_QUALITY, 0.0),
        Platform::Other => (&GENERIC_QUALITY, config.unknown_base),
    };

    let mut score = base
        + markers
            .iter()
            .filter(|(marker, _)| marker.is_match(text))
            .map(|(_, weight)| weight)
            .sum::<f64>();

    let chars = text.chars().count();
    if chars < config.short_text_chars {
        score *= config.short_text_penalty;
    } else if chars > config.long_text_chars {
        score *= config.long_text_bonus;
    }

    score.clamp(0.0, 1.0)
}
