//! Stage 1: raw lexical strength. Counts distinct action verbs, quantified
//! metrics, impact vocabulary and organizational-scope signals, each with
//! its own cap.

use crate::lexicon::{self, metrics, Lexicon};

use super::StageScore;

const VERB_POINTS: u32 = 8;
const VERB_CAP: u32 = 25;
const METRIC_POINTS: u32 = 15;
const METRIC_CAP: u32 = 30;
const IMPACT_POINTS: u32 = 8;
const IMPACT_CAP: u32 = 25;
const SCOPE_POINTS: u32 = 10;
const SCOPE_CAP: u32 = 20;

pub fn score_indicators(text: &str, lexicon: &Lexicon) -> StageScore {
    if text.trim().is_empty() {
        return StageScore::new(
            0,
            vec![
                "missing strong action verbs".to_string(),
                "no quantified metrics".to_string(),
            ],
        );
    }

    let lower = text.to_lowercase();
    let toks = lexicon::tokens(text);
    let mut details = Vec::new();

    let verbs = lexicon::distinct_hits(&lower, &toks, lexicon.action_verbs);
    let verb_pts = (verbs.len() as u32 * VERB_POINTS).min(VERB_CAP);
    if verbs.is_empty() {
        details.push("missing strong action verbs".to_string());
    } else {
        details.push(format!("action verbs: {} (+{verb_pts})", verbs.join(", ")));
    }

    let metric_count = metrics::metric_matches(text) as u32;
    let metric_pts = (metric_count * METRIC_POINTS).min(METRIC_CAP);
    if metric_count == 0 {
        details.push("no quantified metrics".to_string());
    } else {
        details.push(format!("quantified metrics: {metric_count} (+{metric_pts})"));
    }

    let impact = lexicon::distinct_hits(&lower, &toks, lexicon.impact_terms);
    let impact_pts = (impact.len() as u32 * IMPACT_POINTS).min(IMPACT_CAP);
    if impact.is_empty() {
        details.push("no impact vocabulary".to_string());
    } else {
        details.push(format!("impact terms: {} (+{impact_pts})", impact.join(", ")));
    }

    let scope = lexicon::distinct_hits(&lower, &toks, lexicon.scope_terms);
    let scope_pts = (scope.len() as u32 * SCOPE_POINTS).min(SCOPE_CAP);
    if scope.is_empty() {
        details.push("no organizational scope signals".to_string());
    } else {
        details.push(format!("scope signals: {} (+{scope_pts})", scope.join(", ")));
    }

    StageScore::new(verb_pts + metric_pts + impact_pts + scope_pts, details)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> StageScore {
        score_indicators(text, Lexicon::current())
    }

    #[test]
    fn test_empty_text_scores_zero_with_explanation() {
        let s = score("");
        assert_eq!(s.score, 0);
        assert!(s.details.iter().any(|d| d.contains("missing strong action verbs")));
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert_eq!(score("   ").score, 0);
    }

    #[test]
    fn test_weak_bullet_scores_zero() {
        assert_eq!(score("Worked on a project").score, 0);
    }

    #[test]
    fn test_strong_bullet_scores_all_categories() {
        // verb 8 + metrics capped 30 + impact 8 + scope 10
        let s = score(
            "Led a cross-functional team of 8 engineers, reducing deployment time by 40% and increasing release cadence.",
        );
        assert_eq!(s.score, 56);
    }

    #[test]
    fn test_verb_points_capped_at_25() {
        // four distinct verbs would be 32 uncapped
        let s = score("Led, built, shipped and launched the platform");
        assert!(s.details.iter().any(|d| d.contains("+25")));
    }

    #[test]
    fn test_repeated_verb_counts_once() {
        let single = score("Led the rollout");
        let repeated = score("Led the rollout and led the migration");
        assert_eq!(single.score, repeated.score);
    }

    #[test]
    fn test_metric_matches_count_raw_occurrences() {
        let one = score("Cut latency 10%");
        let two = score("Cut latency 10% and 5%");
        assert_eq!(two.score - one.score, 15);
    }

    #[test]
    fn test_metric_points_capped_at_30() {
        let s = score("Grew revenue 10%, margin 5%, retention 3% and adoption 2%");
        // 4 matches would be 60 uncapped; verb 8 + metrics 30 + impact 25 (capped)
        assert!(s.details.iter().any(|d| d.contains("quantified metrics: 4 (+30)")));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(score("LED THE TEAM").score, score("led the team").score);
    }

    #[test]
    fn test_score_never_exceeds_100() {
        let s = score(
            "Led, built, shipped, launched and scaled enterprise global cross-functional stakeholder programs, growing revenue 10%, margin 5%, retention 8%, adoption 4% for a team of 9 engineers with executive leadership",
        );
        assert!(s.score <= 100);
    }
}
