//! Stage 2: machine parseability. Mirrors how an applicant tracking system
//! tokenizes a bullet before any human sees it.

use crate::lexicon::{self, Lexicon};

use super::StageScore;

const FIRST_VERB_POINTS: u32 = 25;
const IDEAL_LENGTH_POINTS: u32 = 20;
const ACCEPTABLE_LENGTH_POINTS: u32 = 10;
const DIGIT_POINTS: u32 = 25;
const CLEAN_CHARS_POINTS: u32 = 15;
const INDUSTRY_STRONG_POINTS: u32 = 15;
const INDUSTRY_WEAK_POINTS: u32 = 8;

const IDEAL_WORDS: std::ops::RangeInclusive<usize> = 15..=35;
const ACCEPTABLE_WORDS: std::ops::RangeInclusive<usize> = 10..=50;

pub fn score_ats(text: &str, lexicon: &Lexicon) -> StageScore {
    if text.trim().is_empty() {
        return StageScore::new(0, vec!["empty bullet: nothing for a parser to read".to_string()]);
    }

    let lower = text.to_lowercase();
    let toks = lexicon::tokens(text);
    let mut score = 0;
    let mut details = Vec::new();

    match lexicon::first_word(text) {
        Some(first) if lexicon.action_verbs.contains(&first.as_str()) => {
            score += FIRST_VERB_POINTS;
            details.push(format!("opens with action verb '{first}' (+{FIRST_VERB_POINTS})"));
        }
        _ => details.push("does not open with an action verb".to_string()),
    }

    let wc = lexicon::word_count(text);
    if IDEAL_WORDS.contains(&wc) {
        score += IDEAL_LENGTH_POINTS;
        details.push(format!("word count {wc} in ideal range (+{IDEAL_LENGTH_POINTS})"));
    } else if ACCEPTABLE_WORDS.contains(&wc) {
        score += ACCEPTABLE_LENGTH_POINTS;
        details.push(format!(
            "word count {wc} in acceptable range (+{ACCEPTABLE_LENGTH_POINTS})"
        ));
    } else {
        details.push(format!("word count {wc} outside parse-friendly range"));
    }

    if lexicon::has_digit(text) {
        score += DIGIT_POINTS;
        details.push(format!("contains quantified data (+{DIGIT_POINTS})"));
    } else {
        details.push("no digits found".to_string());
    }

    let hostile: String = lexicon
        .parser_hostile
        .iter()
        .copied()
        .filter(|c| text.contains(*c))
        .collect();
    if hostile.is_empty() {
        score += CLEAN_CHARS_POINTS;
        details.push(format!("no parser-hostile characters (+{CLEAN_CHARS_POINTS})"));
    } else {
        details.push(format!("parser-hostile characters present: {hostile}"));
    }

    let industry = lexicon::distinct_hits(&lower, &toks, lexicon.industry_terms);
    match industry.len() {
        0 => details.push("no recognized industry terms".to_string()),
        1 => {
            score += INDUSTRY_WEAK_POINTS;
            details.push(format!(
                "industry terms: {} (+{INDUSTRY_WEAK_POINTS})",
                industry.join(", ")
            ));
        }
        _ => {
            score += INDUSTRY_STRONG_POINTS;
            details.push(format!(
                "industry terms: {} (+{INDUSTRY_STRONG_POINTS})",
                industry.join(", ")
            ));
        }
    }

    StageScore::new(score, details)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> StageScore {
        score_ats(text, Lexicon::current())
    }

    #[test]
    fn test_empty_text_scores_zero() {
        assert_eq!(score("").score, 0);
        assert_eq!(score("  \t ").score, 0);
    }

    #[test]
    fn test_opening_action_verb_scores_25() {
        let with = score("Led the quarterly planning process for the platform roadmap org group");
        let without = score("Was leading the quarterly planning process for the platform roadmap org");
        assert_eq!(with.score - without.score, 25);
    }

    #[test]
    fn test_word_count_bands() {
        // 4 words: outside both bands
        let short = score("Shipped the new dashboard");
        assert!(short.details.iter().any(|d| d.contains("outside parse-friendly range")));

        // 10 words: acceptable band only
        let acceptable = score("Increased revenue by 25% through strategic pricing analysis with stakeholders");
        assert!(acceptable.details.iter().any(|d| d.contains("acceptable range (+10)")));

        // 16 words: ideal band
        let ideal = score(
            "Led a cross-functional team of 8 engineers, reducing deployment time by 40% and increasing release cadence.",
        );
        assert!(ideal.details.iter().any(|d| d.contains("ideal range (+20)")));
    }

    #[test]
    fn test_digit_check() {
        let with = score("Shipped 3 releases");
        let without = score("Shipped the releases");
        assert_eq!(with.score - without.score, 25);
    }

    #[test]
    fn test_parser_hostile_characters_forfeit_points() {
        let clean = score("Shipped 3 releases");
        let hostile = score("Shipped 3 releases • on time");
        assert_eq!(clean.score - hostile.score, 15);
        assert!(hostile.details.iter().any(|d| d.contains("parser-hostile")));
    }

    #[test]
    fn test_industry_term_tiers() {
        let none = score("Grew the garden for the neighbours");
        assert!(none.details.iter().any(|d| d.contains("no recognized industry terms")));

        let one = score("Owned pricing for the product line");
        assert!(one.details.iter().any(|d| d.contains("(+8)")));

        let two = score("Owned pricing and the platform roadmap");
        assert!(two.details.iter().any(|d| d.contains("(+15)")));
    }

    #[test]
    fn test_full_marks_bullet() {
        let s = score(
            "Led a cross-functional team of 8 engineers, reducing deployment time by 40% and increasing release cadence.",
        );
        assert_eq!(s.score, 100);
    }
}
