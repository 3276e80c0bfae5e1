//! Core analysis pipeline

pub mod analysis;
pub mod analyzer;
pub mod classifier;
pub mod clip;
pub mod dsp;

pub use analyzer::{classify, CoughAnalyzer};
pub use classifier::{ClassificationResult, DebugFeatures, RiskLabel, ScoreBreakdown};
pub use clip::AudioClip;
pub use dsp::TimeDomainFeatures;
