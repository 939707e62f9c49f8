//! Four-stage aggregation: one bullet in, four independent stage scores and
//! a weighted total out.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::lexicon::Lexicon;
use crate::stages::{ats, indicators, recruiter, Stage, StageScore};
use crate::stages::principles::{self, KeywordPrincipleMatcher, PrincipleMatcher};

/// Stage weights for the combined total. Fixed design constants summing to
/// 1.0; changing them is a product decision and must re-validate the golden
/// scenarios. One instance is applied to both sides of every comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageWeights {
    pub indicators: f64,
    pub ats: f64,
    pub recruiter_ux: f64,
    pub pm_intelligence: f64,
}

impl Default for StageWeights {
    fn default() -> Self {
        Self {
            indicators: 0.20,
            ats: 0.30,
            recruiter_ux: 0.20,
            pm_intelligence: 0.30,
        }
    }
}

/// Full four-stage breakdown for one bullet. Recomputed fresh on every
/// call; identical text yields an identical analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FourStageAnalysis {
    pub indicators: StageScore,
    pub ats: StageScore,
    pub recruiter_ux: StageScore,
    pub pm_intelligence: StageScore,
    pub total_score: u32,
}

impl FourStageAnalysis {
    pub fn stage(&self, stage: Stage) -> &StageScore {
        match stage {
            Stage::Indicators => &self.indicators,
            Stage::Ats => &self.ats,
            Stage::RecruiterUx => &self.recruiter_ux,
            Stage::PmIntelligence => &self.pm_intelligence,
        }
    }
}

/// Scores bullets through all four stages. Holds the principle-matcher
/// backend and the stage weights; term tables come from the current
/// lexicon snapshot.
pub struct BulletAnalyzer {
    matcher: Arc<dyn PrincipleMatcher>,
    weights: StageWeights,
    lexicon: &'static Lexicon,
}

impl Default for BulletAnalyzer {
    fn default() -> Self {
        Self::new(Arc::new(KeywordPrincipleMatcher))
    }
}

impl BulletAnalyzer {
    pub fn new(matcher: Arc<dyn PrincipleMatcher>) -> Self {
        Self {
            matcher,
            weights: StageWeights::default(),
            lexicon: Lexicon::current(),
        }
    }

    pub fn with_weights(mut self, weights: StageWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn weights(&self) -> &StageWeights {
        &self.weights
    }

    /// Runs all four stages on one bullet and combines them into the
    /// weighted total.
    pub fn analyze(&self, text: &str) -> Result<FourStageAnalysis, EngineError> {
        let indicators = indicators::score_indicators(text, self.lexicon);
        let ats = ats::score_ats(text, self.lexicon);
        let recruiter_ux = recruiter::score_recruiter_ux(text, self.lexicon);
        let pm_intelligence = principles::score_pm_intelligence(text, self.matcher.as_ref())?;
        let total_score = weighted_total(
            &self.weights,
            &indicators,
            &ats,
            &recruiter_ux,
            &pm_intelligence,
        );
        Ok(FourStageAnalysis {
            indicators,
            ats,
            recruiter_ux,
            pm_intelligence,
            total_score,
        })
    }
}

/// `round(w1*indicators + w2*ats + w3*recruiter_ux + w4*pm)`, clamped into
/// [0, 100].
fn weighted_total(
    weights: &StageWeights,
    indicators: &StageScore,
    ats: &StageScore,
    recruiter_ux: &StageScore,
    pm_intelligence: &StageScore,
) -> u32 {
    let sum = weights.indicators * indicators.score as f64
        + weights.ats * ats.score as f64
        + weights.recruiter_ux * recruiter_ux.score as f64
        + weights.pm_intelligence * pm_intelligence.score as f64;
    sum.round().clamp(0.0, 100.0) as u32
}
