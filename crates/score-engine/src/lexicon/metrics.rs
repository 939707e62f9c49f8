//! Pattern matchers for quantified values: percentages, currency amounts,
//! multipliers and counted groups of people.

use std::sync::LazyLock;

use regex::Regex;

static PERCENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\d+(?:\.\d+)?\s*(?:%|percent\b)").unwrap());

static CURRENCY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[$€£]\s*\d[\d,]*(?:\.\d+)?(?:\s*(?:k|m|b|mm|bn|million|billion)\b)?")
        .unwrap()
});

static MULTIPLIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b\d+(?:\.\d+)?x\b").unwrap());

static PEOPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:team|group)\s+of\s+\d+\b|\b\d+\+?\s*(?:people|engineers|developers|designers|analysts|managers|members|reports|employees|stakeholders)\b",
    )
    .unwrap()
});

/// Number of quantified-value matches in the text. Raw match count, not
/// distinct: "cut costs 10% and lifted margin 5%" scores two.
pub fn metric_matches(text: &str) -> usize {
    PERCENT.find_iter(text).count()
        + CURRENCY.find_iter(text).count()
        + MULTIPLIER.find_iter(text).count()
        + PEOPLE.find_iter(text).count()
}

/// True when the text carries any quantified evidence at all, pattern match
/// or bare digit.
pub fn has_quantified_value(text: &str) -> bool {
    metric_matches(text) > 0 || text.chars().any(|c| c.is_ascii_digit())
}
