//! Score arbiter: compares an original bullet against its tailored rewrite
//! and keeps whichever version measures better. Ties keep the tailored
//! version; an edit that is no worse is accepted.

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::analysis::{BulletAnalyzer, FourStageAnalysis};
use crate::errors::EngineError;
use crate::stages::Stage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Original,
    Tailored,
}

/// A stage where the tailored bullet scored below the original. Built even
/// when the tailored side wins overall, so a comparison view can show
/// "accepted, but this dimension regressed".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageDropDetail {
    pub stage: Stage,
    pub stage_name: String,
    pub original_score: u32,
    pub tailored_score: u32,
    pub drop: u32,
}

/// Outcome of one original/tailored comparison. `bullet` holds the winning
/// text verbatim, unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArbiterDecision {
    pub bullet: String,
    pub winner: Winner,
    pub original: FourStageAnalysis,
    pub tailored: FourStageAnalysis,
    pub score_delta: i32,
    pub rejection_reasons: Vec<StageDropDetail>,
}

impl ArbiterDecision {
    /// Total score of whichever side won.
    pub fn chosen_total(&self) -> u32 {
        match self.winner {
            Winner::Original => self.original.total_score,
            Winner::Tailored => self.tailored.total_score,
        }
    }
}

/// Aggregate outcome over a bullet list. `optimised_bullets` mirrors input
/// order regardless of how positions were decided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArbiterResult {
    pub optimised_bullets: Vec<String>,
    pub decisions: Vec<ArbiterDecision>,
    pub original_total_score: u32,
    pub optimised_total_score: u32,
    pub methodology_preserved: bool,
}

/// Scores both versions independently and keeps the better one.
/// `score_delta >= 0` keeps the tailored text, so a tie accepts the edit.
pub fn arbitrate_bullet(
    analyzer: &BulletAnalyzer,
    original: &str,
    tailored: &str,
) -> Result<ArbiterDecision, EngineError> {
    let original_analysis = analyzer.analyze(original)?;
    let tailored_analysis = analyzer.analyze(tailored)?;
    let score_delta =
        tailored_analysis.total_score as i32 - original_analysis.total_score as i32;
    let winner = if score_delta >= 0 {
        Winner::Tailored
    } else {
        Winner::Original
    };
    let bullet = match winner {
        Winner::Tailored => tailored.to_string(),
        Winner::Original => original.to_string(),
    };
    let rejection_reasons = stage_drops(&original_analysis, &tailored_analysis);
    debug!(score_delta, ?winner, "bullet arbitrated");

    Ok(ArbiterDecision {
        bullet,
        winner,
        original: original_analysis,
        tailored: tailored_analysis,
        score_delta,
        rejection_reasons,
    })
}

/// Pairs the two lists positionally and arbitrates each pair.
///
/// Length mismatches:
/// - extra tailored bullet: the baseline is the empty string, which scores
///   zero in every stage, so it is accepted unconditionally with
///   `score_delta` equal to its own total
/// - missing tailored bullet: the original stands in for itself, a
///   zero-delta tie that keeps the content unchanged
pub fn arbitrate_bullets(
    analyzer: &BulletAnalyzer,
    original_bullets: &[String],
    tailored_bullets: &[String],
) -> Result<ArbiterResult, EngineError> {
    let len = original_bullets.len().max(tailored_bullets.len());
    let mut decisions = Vec::with_capacity(len);
    for i in 0..len {
        let decision = match (original_bullets.get(i), tailored_bullets.get(i)) {
            (Some(original), Some(tailored)) => arbitrate_bullet(analyzer, original, tailored)?,
            (None, Some(tailored)) => accept_added_bullet(analyzer, tailored)?,
            (Some(original), None) => arbitrate_bullet(analyzer, original, original)?,
            (None, None) => unreachable!("index bounded by the longer list"),
        };
        decisions.push(decision);
    }

    let optimised_bullets = decisions.iter().map(|d| d.bullet.clone()).collect();
    let original_total_score = mean_score(decisions.iter().map(|d| d.original.total_score));
    let optimised_total_score = mean_score(decisions.iter().map(|d| d.chosen_total()));
    let methodology_preserved = decisions
        .iter()
        .all(|d| d.chosen_total() >= d.original.total_score);
    if !methodology_preserved {
        // Integrity signal, not a failure path: a correct build never hits it.
        error!("methodology violation: a chosen bullet scored below its original");
    }

    Ok(ArbiterResult {
        optimised_bullets,
        decisions,
        original_total_score,
        optimised_total_score,
        methodology_preserved,
    })
}

/// Every stage where the tailored score fell below the original, in stage
/// order.
fn stage_drops(
    original: &FourStageAnalysis,
    tailored: &FourStageAnalysis,
) -> Vec<StageDropDetail> {
    Stage::ALL
        .iter()
        .filter_map(|&stage| {
            let original_score = original.stage(stage).score;
            let tailored_score = tailored.stage(stage).score;
            (tailored_score < original_score).then(|| StageDropDetail {
                stage,
                stage_name: stage.display_name().to_string(),
                original_score,
                tailored_score,
                drop: original_score - tailored_score,
            })
        })
        .collect()
}

/// A tailored bullet with no original counterpart. Accepted unconditionally
/// against the zero-scoring empty baseline.
fn accept_added_bullet(
    analyzer: &BulletAnalyzer,
    tailored: &str,
) -> Result<ArbiterDecision, EngineError> {
    let original_analysis = analyzer.analyze("")?;
    let tailored_analysis = analyzer.analyze(tailored)?;
    let score_delta = tailored_analysis.total_score as i32;

    Ok(ArbiterDecision {
        bullet: tailored.to_string(),
        winner: Winner::Tailored,
        original: original_analysis,
        tailored: tailored_analysis,
        score_delta,
        rejection_reasons: Vec::new(),
    })
}

/// Rounded integer mean; 0 for an empty list.
fn mean_score<I>(scores: I) -> u32
where
    I: ExactSizeIterator<Item = u32>,
{
    let n = scores.len();
    if n == 0 {
        return 0;
    }
    let sum: u32 = scores.sum();
    (sum as f64 / n as f64).round() as u32
}
