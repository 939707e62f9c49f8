//! Categorized vocabularies and the text helpers shared by every scoring
//! stage. The tables themselves live in `terms` as a versioned immutable
//! snapshot; quantified-value pattern matchers live in `metrics`.

pub mod metrics;
mod terms;

/// One immutable snapshot of the categorized vocabularies. Versioned so
/// point values can be re-tuned against a known table and golden test
/// fixtures stay stable across refactors.
#[derive(Debug)]
pub struct Lexicon {
    pub version: &'static str,
    pub action_verbs: &'static [&'static str],
    pub impact_terms: &'static [&'static str],
    pub scope_terms: &'static [&'static str],
    pub industry_terms: &'static [&'static str],
    pub jargon_terms: &'static [&'static str],
    pub generic_phrases: &'static [&'static str],
    pub outcome_connectives: &'static [&'static str],
    pub parser_hostile: &'static [char],
}

pub const LEXICON_V1: Lexicon = Lexicon {
    version: "v1",
    action_verbs: terms::ACTION_VERBS,
    impact_terms: terms::IMPACT_TERMS,
    scope_terms: terms::SCOPE_TERMS,
    industry_terms: terms::INDUSTRY_TERMS,
    jargon_terms: terms::JARGON_TERMS,
    generic_phrases: terms::GENERIC_PHRASES,
    outcome_connectives: terms::OUTCOME_CONNECTIVES,
    parser_hostile: terms::PARSER_HOSTILE_CHARS,
};

impl Lexicon {
    /// The table every analyzer uses unless one is pinned explicitly.
    pub fn current() -> &'static Lexicon {
        &LEXICON_V1
    }
}

/// Lowercased tokens with edge punctuation stripped. Inner hyphens and
/// slashes survive, so "cross-functional" and "CI/CD" stay single tokens.
pub fn tokens(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn has_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

/// First token of the text, normalized for table lookup.
pub fn first_word(text: &str) -> Option<String> {
    tokens(text).into_iter().next()
}

/// Case-insensitive term membership. Single-word terms must match a whole
/// token; phrase and symbol terms match as substrings of the lowered text.
pub fn contains_term(text_lower: &str, toks: &[String], term: &str) -> bool {
    let token_like = !term.contains(' ')
        && term.chars().all(|c| c.is_alphanumeric() || c == '-');
    if token_like {
        toks.iter().any(|t| t == term)
    } else {
        text_lower.contains(term)
    }
}

/// Distinct table terms present in the text, in table order. Repeated
/// occurrences of one term count once.
pub fn distinct_hits<'a>(
    text_lower: &str,
    toks: &[String],
    table: &'a [&'a str],
) -> Vec<&'a str> {
    table
        .iter()
        .copied()
        .filter(|term| contains_term(text_lower, toks, term))
        .collect()
}
