//! Regex and keyword tables for Korean delivery earnings screens.

use lazy_static::lazy_static;
use regex::Regex;

/// A weighted text marker: a literal screen phrase or a compiled pattern.
#[derive(Debug)]
pub enum Marker {
    Word(&'static str),
    Pattern(&'static Regex),
}

impl Marker {
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Marker::Word(word) => text.contains(word),
            Marker::Pattern(rx) => rx.is_match(text),
        }
    }
}

lazy_static! {
    // Currency amounts (won, thousands separators: "53,920원", "₩53,920")
    pub static ref AMOUNT_WON: Regex = Regex::new(
        r"(\d+(?:,\d{3})*)\s*원"
    ).unwrap();

    pub static ref AMOUNT_SYMBOL: Regex = Regex::new(
        r"₩\s*(\d+(?:,\d{3})*)"
    ).unwrap();

    // Delivery counts ("배달 17건", "총 23건", bare "17건")
    pub static ref COUNT_LABELED: Regex = Regex::new(
        r"(?:배달|총)\s*(\d+)\s*건"
    ).unwrap();

    pub static ref COUNT_BARE: Regex = Regex::new(
        r"(\d+)\s*건"
    ).unwrap();

    // Earnings-total anchors ("오늘 예상 수입 53,920원", "총 수입 94,800원")
    pub static ref BAEMIN_TOTAL: Regex = Regex::new(
        r"(?:예상\s*)?수입[^\d\n]*(\d+(?:,\d{3})*)\s*원"
    ).unwrap();

    pub static ref COUPANG_TOTAL: Regex = Regex::new(
        r"(?:총\s*수입|정산\s*금액|총\s*정산)[^\d\n]*(\d+(?:,\d{3})*)\s*원"
    ).unwrap();

    // Single-date formats
    pub static ref DATE_YMD: Regex = Regex::new(
        r"(?P<y>\d{4})[.\-/](?P<m>\d{1,2})[.\-/](?P<d>\d{1,2})"
    ).unwrap();

    pub static ref DATE_KOREAN_MD: Regex = Regex::new(
        r"(?:(?P<y>\d{4})년\s*)?(?P<m>\d{1,2})월\s*(?P<d>\d{1,2})일"
    ).unwrap();

    pub static ref DATE_MD_WEEKDAY: Regex = Regex::new(
        r"(?P<m>\d{1,2})[/.](?P<d>\d{1,2})\s*\(?[월화수목금토일]\)?"
    ).unwrap();

    pub static ref DATE_SLASH_MD: Regex = Regex::new(
        r"(?P<m>\d{1,2})/(?P<d>\d{1,2})"
    ).unwrap();

    // Weekly ranges: two date tokens around a separator
    pub static ref WEEK_RANGE_YMD: Regex = Regex::new(
        r"(?P<y1>\d{4})[.\-/](?P<m1>\d{1,2})[.\-/](?P<d1>\d{1,2})\s*[~∼～-]\s*(?P<y2>\d{4})[.\-/](?P<m2>\d{1,2})[.\-/](?P<d2>\d{1,2})"
    ).unwrap();

    pub static ref WEEK_RANGE_KOREAN: Regex = Regex::new(
        r"(?:(?P<y1>\d{4})년\s*)?(?P<m1>\d{1,2})월\s*(?P<d1>\d{1,2})일\s*[~∼～-]\s*(?:(?P<y2>\d{4})년\s*)?(?P<m2>\d{1,2})월\s*(?P<d2>\d{1,2})일"
    ).unwrap();

    pub static ref WEEK_RANGE_MD: Regex = Regex::new(
        r"(?P<m1>\d{1,2})[./](?P<d1>\d{1,2})\s*[~∼～-]\s*(?P<m2>\d{1,2})[./](?P<d2>\d{1,2})"
    ).unwrap();

    // Per-day lines of a weekly report ("2025.2.19 54,800원 13건",
    // "5/19(월) 54,800원", "2025.2.19 13건")
    pub static ref DAY_LINE_FULL: Regex = Regex::new(
        r"^\s*(?:(?P<y>\d{4})[.\-/])?(?P<m>\d{1,2})[.\-/](?P<d>\d{1,2})\s*\(?[월화수목금토일]?\)?[^\d\n]*(?P<amt>\d+(?:,\d{3})*)\s*원[^\d\n]*(?P<cnt>\d+)\s*건"
    ).unwrap();

    pub static ref DAY_LINE_AMOUNT: Regex = Regex::new(
        r"^\s*(?:(?P<y>\d{4})[.\-/])?(?P<m>\d{1,2})[.\-/](?P<d>\d{1,2})\s*\(?[월화수목금토일]?\)?[^\d\n]*(?P<amt>\d+(?:,\d{3})*)\s*원"
    ).unwrap();

    pub static ref DAY_LINE_COUNT: Regex = Regex::new(
        r"^\s*(?:(?P<y>\d{4})[.\-/])?(?P<m>\d{1,2})[.\-/](?P<d>\d{1,2})\s*\(?[월화수목금토일]?\)?[^\d\n]*(?P<cnt>\d+)\s*건"
    ).unwrap();

    // Classifier signals. An exclusive screen title outweighs several
    // generic markers; the activation threshold lives in the classifier.
    pub static ref BAEMIN_SIGNALS: Vec<(Marker, f64)> = vec![
        (Marker::Word("배민커넥트"), 3.0),
        (Marker::Word("배달의민족"), 3.0),
        (Marker::Word("배민"), 1.5),
        (Marker::Word("오늘 배달 내역"), 2.0),
        (Marker::Word("이번 주 배달 내역"), 2.0),
        (Marker::Word("오늘 예상 수입"), 1.5),
        (Marker::Pattern(&*DATE_MD_WEEKDAY), 1.0),
    ];

    pub static ref COUPANG_SIGNALS: Vec<(Marker, f64)> = vec![
        (Marker::Word("쿠팡이츠"), 3.0),
        (Marker::Word("쿠팡"), 1.5),
        (Marker::Word("배달 파트너"), 2.0),
        (Marker::Word("이츠"), 1.0),
        (Marker::Word("총 수입"), 1.0),
        (Marker::Word("정산"), 1.0),
        (Marker::Pattern(&*DATE_YMD), 0.5),
    ];

    // Confidence markers; weights per platform sum to at most 1.0.
    pub static ref BAEMIN_QUALITY: Vec<(Marker, f64)> = vec![
        (Marker::Word("배달 내역"), 0.35),
        (Marker::Pattern(&*COUNT_BARE), 0.25),
        (Marker::Pattern(&*AMOUNT_WON), 0.25),
        (Marker::Pattern(&*DATE_MD_WEEKDAY), 0.15),
    ];

    pub static ref COUPANG_QUALITY: Vec<(Marker, f64)> = vec![
        (Marker::Word("쿠팡이츠"), 0.30),
        (Marker::Word("수입"), 0.20),
        (Marker::Pattern(&*AMOUNT_WON), 0.20),
        (Marker::Pattern(&*COUNT_BARE), 0.15),
        (Marker::Pattern(&*DATE_YMD), 0.15),
    ];

    pub static ref GENERIC_QUALITY: Vec<(Marker, f64)> = vec![
        (Marker::Pattern(&*AMOUNT_WON), 0.25),
        (Marker::Pattern(&*COUNT_BARE), 0.20),
        (Marker::Pattern(&*DATE_YMD), 0.15),
    ];
}
