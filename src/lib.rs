//! CoughCheckr - Acoustic cough classification for respiratory screening
//!
//! A deterministic analysis pipeline that takes a decoded mono PCM clip and
//! produces a respiratory-pathology risk estimate.
//!
//! ## Pipeline
//!
//! 1. **Time-domain pass**: RMS energy, zero-crossing rate, peak amplitude
//!    over the whole clip
//! 2. **Pre-emphasis**: first-order high-pass (0.97) before framing
//! 3. **Frame selection**: highest-energy 512-sample window, hop 256
//! 4. **Spectral engine**: Hamming window + 512-point FFT, lower-half power
//!    spectrum
//! 5. **Mel filterbank**: 26 triangular filters between 0 Hz and Nyquist
//! 6. **Cepstral transform**: DCT-II down to 13 MFCCs
//! 7. **Classifier**: speech and low-volume gates, then three pathology
//!    bands with a content-derived de-aliasing nuance
//!
//! The pipeline is pure and synchronous; callers embedding it in an
//! interactive surface are responsible for running it off the UI thread.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use coughcheckr::{classify, AudioClip};
//!
//! let clip = AudioClip::new(samples, 16000)?;
//! let result = classify(&clip)?;
//! println!("{} (risk {})", result.label.label(), result.risk_score);
//! ```
//!
//! ## Module structure
//!
//! - `core` - analysis pipeline and DSP utilities
//! - `config` - classifier tuning constants
//! - `cli` - WAV ingestion and output formatting for the binary
//! - `testgen` - deterministic synthetic clips for the bench and tests

// Core analysis functionality
pub mod core;

// Classifier tuning
pub mod config;

// Command-line interface support
pub mod cli;

// Error types
pub mod error;

// Synthetic signal generation
pub mod testgen;

// Re-export commonly used types at crate root for convenience
pub use crate::config::ClassifierTuning;
pub use crate::core::{
    classify, AudioClip, ClassificationResult, CoughAnalyzer, DebugFeatures, RiskLabel,
    TimeDomainFeatures,
};
pub use crate::error::AnalysisError;
