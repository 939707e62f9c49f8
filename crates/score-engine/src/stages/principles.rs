//! Stage 4: product-management framing. Delegates to a `PrincipleMatcher`
//! capability so the keyword scanner can later be swapped for a semantic
//! backend without touching the aggregator or arbiter contracts.

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::lexicon::{self, metrics};

use super::StageScore;

/// One PM principle category a matcher can flag as missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principle {
    pub id: String,
    pub name: String,
}

/// Matcher output contract: aggregate score plus the uncovered categories,
/// in category order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrincipleReport {
    pub score: u32,
    pub missing_principles: Vec<Principle>,
}

/// The principle-matching capability behind Stage 4. Carried as
/// `Arc<dyn PrincipleMatcher>` so backends can be swapped at construction
/// time. Implement this to replace keyword scanning with anything smarter.
pub trait PrincipleMatcher: Send + Sync {
    fn analyze(&self, text: &str) -> Result<PrincipleReport, EngineError>;
}

const POINTS_PER_CATEGORY: u32 = 20;

struct Category {
    id: &'static str,
    name: &'static str,
    terms: &'static [&'static str],
    accepts_digits: bool,
}

const OUTCOME_TERMS: &[&str] = &[
    "accelerated",
    "achieved",
    "boosted",
    "cut",
    "decreased",
    "delivered",
    "driving",
    "drove",
    "grew",
    "improved",
    "improving",
    "increased",
    "increasing",
    "launched",
    "reduced",
    "reducing",
    "resulted",
    "resulting",
    "shipped",
];

const USER_TERMS: &[&str] = &[
    "audience",
    "client",
    "clients",
    "customer",
    "customers",
    "member",
    "members",
    "patient",
    "patients",
    "shopper",
    "shoppers",
    "user",
    "users",
];

const COLLABORATION_TERMS: &[&str] = &[
    "aligned",
    "collaborated",
    "collaborating",
    "coordinated",
    "cross-functional",
    "facilitated",
    "leading",
    "led",
    "mentored",
    "partnered",
    "partnering",
    "stakeholder",
    "stakeholders",
    "team",
    "teams",
];

const PROBLEM_SOLVING_TERMS: &[&str] = &[
    "analysis",
    "analyzed",
    "automated",
    "debugged",
    "diagnosed",
    "eliminated",
    "identified",
    "investigated",
    "optimized",
    "redesigned",
    "resolved",
    "root cause",
    "simplified",
    "solved",
    "solving",
    "streamlined",
];

const CATEGORIES: &[Category] = &[
    Category {
        id: "outcome",
        name: "Outcome language",
        terms: OUTCOME_TERMS,
        accepts_digits: false,
    },
    Category {
        id: "data",
        name: "Quantified data",
        terms: &[],
        accepts_digits: true,
    },
    Category {
        id: "user",
        name: "User-centric language",
        terms: USER_TERMS,
        accepts_digits: false,
    },
    Category {
        id: "collaboration",
        name: "Collaboration & leadership",
        terms: COLLABORATION_TERMS,
        accepts_digits: false,
    },
    Category {
        id: "problem_solving",
        name: "Problem-solving language",
        terms: PROBLEM_SOLVING_TERMS,
        accepts_digits: false,
    },
];

/// Default Stage 4 backend: a keyword-category scanner awarding 20 points
/// per category with at least one hit. Pure, fast, deterministic.
#[derive(Debug, Clone, Default)]
pub struct KeywordPrincipleMatcher;

impl PrincipleMatcher for KeywordPrincipleMatcher {
    fn analyze(&self, text: &str) -> Result<PrincipleReport, EngineError> {
        let lower = text.to_lowercase();
        let toks = lexicon::tokens(text);
        let mut score = 0;
        let mut missing = Vec::new();

        for category in CATEGORIES {
            let present = if category.accepts_digits {
                metrics::has_quantified_value(text)
            } else {
                category
                    .terms
                    .iter()
                    .any(|t| lexicon::contains_term(&lower, &toks, t))
            };
            if present {
                score += POINTS_PER_CATEGORY;
            } else {
                missing.push(Principle {
                    id: category.id.to_string(),
                    name: category.name.to_string(),
                });
            }
        }

        Ok(PrincipleReport {
            score,
            missing_principles: missing,
        })
    }
}

/// Qualitative banding copy shown next to the Stage 4 score.
fn band(score: u32) -> &'static str {
    match score {
        s if s >= 80 => "strong across all dimensions",
        s if s >= 60 => "good, minor gaps",
        s if s >= 40 => "present, needs strengthening",
        _ => "weak framing",
    }
}

pub fn score_pm_intelligence(
    text: &str,
    matcher: &dyn PrincipleMatcher,
) -> Result<StageScore, EngineError> {
    if text.trim().is_empty() {
        let names: Vec<&str> = CATEGORIES.iter().map(|c| c.name).collect();
        return Ok(StageScore::new(
            0,
            vec![band(0).to_string(), format!("missing: {}", names.join(", "))],
        ));
    }

    let report = matcher.analyze(text)?;
    let mut details = vec![band(report.score).to_string()];
    if !report.missing_principles.is_empty() {
        let names: Vec<&str> = report
            .missing_principles
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        details.push(format!("missing: {}", names.join(", ")));
    }
    Ok(StageScore::new(report.score, details))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(text: &str) -> PrincipleReport {
        KeywordPrincipleMatcher.analyze(text).unwrap()
    }

    #[test]
    fn test_all_five_categories_present_scores_100() {
        let r = report("Led the team, solved checkout friction for customers, increasing conversion 15%");
        assert_eq!(r.score, 100);
        assert!(r.missing_principles.is_empty());
    }

    #[test]
    fn test_no_categories_present_scores_zero() {
        let r = report("Worked on a project");
        assert_eq!(r.score, 0);
        assert_eq!(r.missing_principles.len(), 5);
    }

    #[test]
    fn test_missing_principles_keep_category_order() {
        let r = report("Worked on a project");
        let ids: Vec<&str> = r.missing_principles.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["outcome", "data", "user", "collaboration", "problem_solving"]);
    }

    #[test]
    fn test_digit_satisfies_quantified_data_category() {
        let r = report("Maintained 4 services");
        assert!(!r.missing_principles.iter().any(|p| p.id == "data"));
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(band(80), "strong across all dimensions");
        assert_eq!(band(60), "good, minor gaps");
        assert_eq!(band(40), "present, needs strengthening");
        assert_eq!(band(39), "weak framing");
    }

    #[test]
    fn test_stage_details_lead_with_banding() {
        let s = score_pm_intelligence("Worked on a project", &KeywordPrincipleMatcher).unwrap();
        assert_eq!(s.score, 0);
        assert_eq!(s.details[0], "weak framing");
        assert!(s.details[1].starts_with("missing: "));
    }

    #[test]
    fn test_full_score_has_no_missing_detail() {
        let s = score_pm_intelligence(
            "Led the team, solved checkout friction for customers, increasing conversion 15%",
            &KeywordPrincipleMatcher,
        )
        .unwrap();
        assert_eq!(s.details, vec!["strong across all dimensions".to_string()]);
    }

    #[test]
    fn test_empty_text_scores_zero_without_calling_matcher() {
        struct PanickyMatcher;
        impl PrincipleMatcher for PanickyMatcher {
            fn analyze(&self, _text: &str) -> Result<PrincipleReport, EngineError> {
                panic!("must not be called for empty text");
            }
        }
        let s = score_pm_intelligence("   ", &PanickyMatcher).unwrap();
        assert_eq!(s.score, 0);
        assert_eq!(s.details[0], "weak framing");
    }
}
