//! The analysis pipeline and its request/result types.

pub mod pipeline;
pub mod types;

pub use pipeline::ComparisonEngine;
pub use types::{AnalysisRequest, AnalysisSummary, GapAnalysis};
