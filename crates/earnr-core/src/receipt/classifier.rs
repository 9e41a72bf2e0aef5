//! Platform classification from recognized screen text.

use tracing::debug;

use super::patterns::{BAEMIN_SIGNALS, COUPANG_SIGNALS, Marker};
use crate::models::receipt::Platform;

/// Minimum summed signal weight before a platform is trusted.
const ACTIVATION_THRESHOLD: f64 = 2.0;

/// Candidate platforms in priority order; the earlier one wins score ties.
const CANDIDATES: [Platform; 2] = [Platform::Baemin, Platform::Coupang];

/// Classify which platform produced the screen text.
///
/// Total and deterministic. Low-signal or ambiguous text yields
/// [`Platform::Other`], which downstream stages treat as "use generic
/// patterns".
pub fn classify(text: &str) -> Platform {
    let mut best = Platform::Other;
    let mut best_score = 0.0;

    for platform in CANDIDATES {
        let score = signal_score(text, signals_for(platform));
        debug!(%platform, score, "platform signal score");
        if score >= ACTIVATION_THRESHOLD && score > best_score {
            best = platform;
            best_score = score;
        }
    }

    best
}

fn signals_for(platform: Platform) -> &'static [(Marker, f64)] {
    match platform {
        Platform::Baemin => &BAEMIN_SIGNALS,
        Platform::Coupang => &COUPANG_SIGNALS,
        Platform::Other => &[],
    }
}

fn signal_score(text: &str, signals: &[(Marker, f64)]) -> f64 {
    signals
        .iter()
        .filter(|(marker, _)| marker.is_match(text))
        .map(|(_, weight)| weight)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusive_title_classifies_baemin() {
        assert_eq!(classify("배민커넥트 수행 내역"), Platform::Baemin);
    }

    #[test]
    fn test_exclusive_title_classifies_coupang() {
        assert_eq!(classify("쿠팡이츠 배달 파트너 정산"), Platform::Coupang);
    }

    #[test]
    fn test_screen_phrases_reach_threshold() {
        assert_eq!(classify("오늘 배달 내역 05/29 목"), Platform::Baemin);
    }

    #[test]
    fn test_single_weak_marker_stays_unknown() {
        // 1.5 < activation threshold
        assert_eq!(classify("배민"), Platform::Other);
    }

    #[test]
    fn test_no_markers_is_unknown() {
        assert_eq!(classify("asdf qwerty 123"), Platform::Other);
        assert_eq!(classify(""), Platform::Other);
    }

    #[test]
    fn test_tie_prefers_priority_order() {
        // Both platforms score exactly 2.0 here.
        assert_eq!(classify("오늘 배달 내역 배달 파트너"), Platform::Baemin);
    }

    #[test]
    fn test_stronger_signal_wins() {
        // Coupang's exclusive title beats Baemin's generic phrase.
        assert_eq!(classify("쿠팡이츠 오늘 배달 내역"), Platform::Coupang);
    }
}
