//! Deterministic CV bullet scoring and arbitration.
//!
//! Scores an original and a tailored version of a resume achievement line
//! across four independent dimensions (lexical strength, ATS structure,
//! recruiter scan-ability, PM framing), combines them into a weighted
//! total, and keeps whichever version measures better. The contract with
//! the surrounding product: an automated rewrite can never make a bullet's
//! measured quality worse.
//!
//! Everything here is pure and synchronous; callers own persistence,
//! presentation and any parallelism across bullet positions.

pub mod analysis;
pub mod arbiter;
pub mod errors;
pub mod lexicon;
pub mod stages;

pub use analysis::{BulletAnalyzer, FourStageAnalysis, StageWeights};
pub use arbiter::{
    arbitrate_bullet, arbitrate_bullets, ArbiterDecision, ArbiterResult, StageDropDetail, Winner,
};
pub use errors::EngineError;
pub use stages::principles::{
    KeywordPrincipleMatcher, Principle, PrincipleMatcher, PrincipleReport,
};
pub use stages::{Stage, StageScore};
