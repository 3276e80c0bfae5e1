//! Spectral analysis stages: frame selection, Mel filterbank, MFCC

pub mod frame;
pub mod mel;
pub mod mfcc;

pub use frame::{select_peak_frame, AnalysisFrame};
pub use mel::{hz_to_mel, mel_to_hz, MelFilterbank};
pub use mfcc::{dct_ii, extract_mfcc, MfccParams};
