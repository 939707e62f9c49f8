use thiserror::Error;

/// Engine-level error type.
///
/// The built-in keyword scorers are total over their input and never fail;
/// this exists for pluggable `PrincipleMatcher` backends (semantic scoring,
/// remote models) that can.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Principle matcher error: {0}")]
    Matcher(String),
}
