//! Stage 3: the tired-recruiter heuristic. A few seconds per bullet; the
//! first eight words do most of the work.

use crate::lexicon::{self, metrics, Lexicon};

use super::StageScore;

const HOOK_WINDOW: usize = 8;
const HOOK_FULL_POINTS: u32 = 30;
const HOOK_VERB_POINTS: u32 = 15;
const CONCISE_POINTS: u32 = 20;
const WORDY_POINTS: u32 = 10;
const SO_WHAT_FULL_POINTS: u32 = 25;
const SO_WHAT_PARTIAL_POINTS: u32 = 12;
const LOW_JARGON_POINTS: u32 = 15;
const SOME_JARGON_POINTS: u32 = 8;
const NOT_GENERIC_POINTS: u32 = 10;

const CONCISE_WORDS: usize = 30;
const WORDY_WORDS: usize = 45;

pub fn score_recruiter_ux(text: &str, lexicon: &Lexicon) -> StageScore {
    if text.trim().is_empty() {
        return StageScore::new(0, vec!["empty bullet: nothing to scan".to_string()]);
    }

    let lower = text.to_lowercase();
    let toks = lexicon::tokens(text);
    let mut score = 0;
    let mut details = Vec::new();

    // Hook: what lands inside the first eight words.
    let hook: String = text
        .split_whitespace()
        .take(HOOK_WINDOW)
        .collect::<Vec<_>>()
        .join(" ");
    let hook_lower = hook.to_lowercase();
    let hook_toks = lexicon::tokens(&hook);
    let hook_verb = lexicon
        .action_verbs
        .iter()
        .any(|v| lexicon::contains_term(&hook_lower, &hook_toks, v));
    let hook_evidence = lexicon
        .impact_terms
        .iter()
        .any(|t| lexicon::contains_term(&hook_lower, &hook_toks, t))
        || lexicon::has_digit(&hook);
    if hook_verb && hook_evidence {
        score += HOOK_FULL_POINTS;
        details.push(format!("strong hook in first {HOOK_WINDOW} words (+{HOOK_FULL_POINTS})"));
    } else if hook_verb {
        score += HOOK_VERB_POINTS;
        details.push(format!(
            "action verb in first {HOOK_WINDOW} words, no early evidence (+{HOOK_VERB_POINTS})"
        ));
    } else {
        details.push(format!("weak opening: no action verb in first {HOOK_WINDOW} words"));
    }

    let wc = lexicon::word_count(text);
    if wc <= CONCISE_WORDS {
        score += CONCISE_POINTS;
        details.push(format!("concise at {wc} words (+{CONCISE_POINTS})"));
    } else if wc <= WORDY_WORDS {
        score += WORDY_POINTS;
        details.push(format!("slightly long at {wc} words (+{WORDY_POINTS})"));
    } else {
        details.push(format!("too long to scan at {wc} words"));
    }

    // So-what: an outcome connective plus a quantified outcome.
    let connective = lexicon
        .outcome_connectives
        .iter()
        .any(|c| lexicon::contains_term(&lower, &toks, c));
    let quantified = metrics::has_quantified_value(text);
    if connective && quantified {
        score += SO_WHAT_FULL_POINTS;
        details.push(format!("quantified outcome framing (+{SO_WHAT_FULL_POINTS})"));
    } else if connective || quantified {
        score += SO_WHAT_PARTIAL_POINTS;
        details.push(format!("partial outcome framing (+{SO_WHAT_PARTIAL_POINTS})"));
    } else {
        details.push("no outcome framing: what changed because of this?".to_string());
    }

    let jargon = lexicon::distinct_hits(&lower, &toks, lexicon.jargon_terms);
    if jargon.len() <= 1 {
        score += LOW_JARGON_POINTS;
        details.push(format!("jargon under control (+{LOW_JARGON_POINTS})"));
    } else if jargon.len() <= 2 {
        score += SOME_JARGON_POINTS;
        details.push(format!("jargon terms: {} (+{SOME_JARGON_POINTS})", jargon.join(", ")));
    } else {
        details.push(format!("jargon-heavy: {}", jargon.join(", ")));
    }

    let generic = lexicon::distinct_hits(&lower, &toks, lexicon.generic_phrases);
    if generic.is_empty() {
        score += NOT_GENERIC_POINTS;
        details.push(format!("no generic filler (+{NOT_GENERIC_POINTS})"));
    } else {
        details.push(format!("generic filler: {}", generic.join(", ")));
    }

    StageScore::new(score, details)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> StageScore {
        score_recruiter_ux(text, Lexicon::current())
    }

    #[test]
    fn test_empty_text_scores_zero() {
        assert_eq!(score("").score, 0);
    }

    #[test]
    fn test_hook_full_needs_verb_and_evidence() {
        let full = score("Increased revenue for the region");
        assert!(full.details.iter().any(|d| d.contains("strong hook")));

        let verb_only = score("Increased the quality of planning");
        assert!(verb_only.details.iter().any(|d| d.contains("no early evidence")));

        // "increased" sits past the eight-word window
        let neither = score("The quality of planning over recent quarters has increased substantially");
        assert!(neither.details.iter().any(|d| d.contains("weak opening")));
    }

    #[test]
    fn test_digit_counts_as_hook_evidence() {
        let s = score("Led 3 launches");
        assert!(s.details.iter().any(|d| d.contains("strong hook")));
    }

    #[test]
    fn test_conciseness_bands() {
        let concise = score("Led 3 launches");
        assert!(concise.details.iter().any(|d| d.contains("concise")));

        let wordy = score(&"word ".repeat(40));
        assert!(wordy.details.iter().any(|d| d.contains("slightly long")));

        let too_long = score(&"word ".repeat(50));
        assert!(too_long.details.iter().any(|d| d.contains("too long to scan")));
    }

    #[test]
    fn test_so_what_full_partial_and_absent() {
        let full = score("Overhauled onboarding, reducing churn by 12%");
        assert!(full.details.iter().any(|d| d.contains("quantified outcome framing")));

        let connective_only = score("Overhauled onboarding, reducing churn");
        assert!(connective_only.details.iter().any(|d| d.contains("partial outcome framing")));

        let quantified_only = score("Owned 3 onboarding modules");
        assert!(quantified_only.details.iter().any(|d| d.contains("partial outcome framing")));

        let neither = score("Owned the onboarding modules");
        assert!(neither.details.iter().any(|d| d.contains("no outcome framing")));
    }

    #[test]
    fn test_jargon_density_bands() {
        let low = score("Owned the synergy workstream");
        assert!(low.details.iter().any(|d| d.contains("jargon under control")));

        let some = score("Owned the synergy workstream to leverage the ecosystem audit");
        // synergy + leverage + ecosystem = 3 distinct terms
        assert!(some.details.iter().any(|d| d.contains("jargon-heavy")));

        let two = score("Owned the synergy workstream across the ecosystem");
        assert!(two.details.iter().any(|d| d.contains("(+8)")));
    }

    #[test]
    fn test_generic_filler_forfeits_points() {
        let generic = score("Responsible for the payments platform");
        assert!(generic.details.iter().any(|d| d.contains("generic filler: responsible for")));

        let specific = score("Rebuilt the payments platform");
        assert!(specific.details.iter().any(|d| d.contains("no generic filler")));
    }

    #[test]
    fn test_weak_bullet_total() {
        // hook 0, concise 20, so-what 0, jargon 15, genericity 0
        assert_eq!(score("Worked on a project").score, 35);
    }

    #[test]
    fn test_strong_bullet_total() {
        let s = score(
            "Led a cross-functional team of 8 engineers, reducing deployment time by 40% and increasing release cadence.",
        );
        assert_eq!(s.score, 100);
    }
}
