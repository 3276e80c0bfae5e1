// src/config/tuning.rs
//
// Classifier tuning constants, lifted out of the scoring code so they can be
// adjusted and tested independently of the algorithm shape.

use serde::{Deserialize, Serialize};

/// Tuning constants for the pathology scorer.
///
/// `Default` reproduces the calibrated production values. All thresholds
/// operate on normalized features: RMS and peak in [0,1] sample units, ZCR as
/// a fraction of samples, MFCCs unnormalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierTuning {
    /// First-order high-pass coefficient applied before framing
    pub pre_emphasis: f32,
    /// ZCR below this is treated as overly tonal (vowel-like)
    pub tonal_zcr_threshold: f32,
    /// MFCC[1] above this indicates speech-like low-frequency dominance
    pub speech_mfcc_threshold: f32,
    /// Cough probability below this (with audible signal) gates to non-cough
    pub cough_probability_gate: f32,
    /// RMS above this counts as audible signal for the non-cough gate
    pub noise_floor_rms: f32,
    /// Normalized signal strength below this gates to low-volume
    pub min_signal_strength: f32,
    /// RMS multiplier when deriving signal strength
    pub rms_gain: f32,
    /// ZCR multiplier inside the pathology score
    pub zcr_gain: f32,
    /// Divisor normalizing summed |MFCC[2..13]| into roughness
    pub roughness_divisor: f32,
    /// Roughness weight in the pathology score
    pub roughness_weight: f32,
    /// ZCR weight in the pathology score
    pub zcr_weight: f32,
    /// Pathology score above this lands in the high-risk band
    pub high_risk_threshold: f32,
    /// Pathology score above this lands in the moderate band
    pub moderate_risk_threshold: f32,
    /// Penalty applied to cough probability for tonal signals
    pub tonal_penalty: f32,
    /// Penalty applied to cough probability for speech-like signals
    pub speech_penalty: f32,
    /// Per-coefficient multiplier in the content fingerprint
    pub fingerprint_multiplier: f32,
    /// Modulus of the de-aliasing nuance (offset range is ±modulus/2)
    pub nuance_modulus: f32,
    /// Lowest risk score emitted on the pathology path
    pub risk_floor: u8,
    /// Highest risk score emitted on the pathology path
    pub risk_ceiling: u8,
}

impl Default for ClassifierTuning {
    fn default() -> Self {
        Self {
            pre_emphasis: 0.97,
            tonal_zcr_threshold: 0.05,
            speech_mfcc_threshold: 20.0,
            cough_probability_gate: 0.5,
            noise_floor_rms: 0.01,
            min_signal_strength: 0.2,
            rms_gain: 12.0,
            zcr_gain: 5.0,
            roughness_divisor: 50.0,
            roughness_weight: 0.6,
            zcr_weight: 0.4,
            high_risk_threshold: 0.65,
            moderate_risk_threshold: 0.45,
            tonal_penalty: 0.4,
            speech_penalty: 0.3,
            fingerprint_multiplier: 31.0,
            nuance_modulus: 6.0,
            risk_floor: 10,
            risk_ceiling: 99,
        }
    }
}
