//! Severity scoring: fixed base risk by gap type, adjusted by testing
//! burden and precedent strength, clamped to 0-100 and banded.

pub mod base_risk;
pub mod scorer;

pub use base_risk::base_risk;
pub use scorer::{score, ScoringSignals};
