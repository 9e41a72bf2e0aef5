//! Total earnings and delivery-count extraction.

use super::patterns::{
    AMOUNT_SYMBOL, AMOUNT_WON, BAEMIN_TOTAL, COUNT_BARE, COUNT_LABELED, COUPANG_TOTAL,
};
use crate::models::receipt::Platform;

/// Extract the total earnings in won. Total function: 0 on no match.
///
/// Platform-anchored earnings phrases win over the generic currency scan.
/// The first match stands: these screens place the total prominently
/// near the top, so no further disambiguation is needed here.
pub fn extract_amount(text: &str, platform: Platform) -> u64 {
    let anchored = match platform {
        Platform::Baemin => BAEMIN_TOTAL.captures(text),
        Platform::Coupang => COUPANG_TOTAL.captures(text),
        Platform::Other => None,
    };
    if let Some(caps) = anchored {
        if let Some(amount) = parse_won(&caps[1]) {
            return amount;
        }
    }

    for rx in [&*AMOUNT_WON, &*AMOUNT_SYMBOL] {
        if let Some(caps) = rx.captures(text) {
            if let Some(amount) = parse_won(&caps[1]) {
                return amount;
            }
        }
    }

    0
}

/// Extract the total delivery count. Total function: 0 on no match.
///
/// The 건 label may precede or follow the number depending on platform;
/// the labeled form is tried first, then any bare count token.
pub fn extract_count(text: &str, platform: Platform) -> u32 {
    let anchored = match platform {
        Platform::Baemin | Platform::Coupang => COUNT_LABELED.captures(text),
        Platform::Other => None,
    };
    if let Some(caps) = anchored {
        if let Ok(count) = caps[1].parse() {
            return count;
        }
    }

    if let Some(caps) = COUNT_BARE.captures(text) {
        if let Ok(count) = caps[1].parse() {
            return count;
        }
    }

    0
}

/// Parse a comma-separated won token ("53,920") into an integer.
pub(crate) fn parse_won(s: &str) -> Option<u64> {
    s.replace(',', "").parse().ok()
}
