// src/core/classifier.rs
//
// Pathology scorer: turns time-domain features and the cepstral vector into
// a label and a bounded risk score.

use serde::{Deserialize, Serialize};

use crate::config::ClassifierTuning;
use crate::core::dsp::TimeDomainFeatures;

/// Classification outcome category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    /// Gate 1: the clip does not sound like a cough at all
    NonCough,
    /// Gate 2: too quiet to analyze reliably
    LowVolume,
    /// Strong roughness and irregularity
    HighRisk,
    /// Some spectral texture variability
    ModerateIrregularity,
    /// Clear, unobstructed cough
    Normal,
}

impl RiskLabel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLabel::NonCough => "Non-Cough Sound Detected",
            RiskLabel::LowVolume => "Low Volume / Inconclusive",
            RiskLabel::HighRisk => "High Risk / Potential Obstruction Signatures",
            RiskLabel::ModerateIrregularity => "Moderate Irregularity",
            RiskLabel::Normal => "Normal Respiratory Pattern",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RiskLabel::NonCough => {
                "Analysis reliability low. Please record a cough, not speech."
            }
            RiskLabel::LowVolume => "Please record closer to the microphone.",
            RiskLabel::HighRisk => {
                "Detected significant roughness and irregularity consistent with obstruction."
            }
            RiskLabel::ModerateIrregularity => {
                "Detected some spectral texture variability. Monitor symptoms."
            }
            RiskLabel::Normal => "Cough sounds clear. No significant obstruction detected.",
        }
    }

    /// True for the three pathology bands (neither gate fired)
    pub fn is_pathology_band(&self) -> bool {
        matches!(
            self,
            RiskLabel::HighRisk | RiskLabel::ModerateIrregularity | RiskLabel::Normal
        )
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            RiskLabel::NonCough => "?",
            RiskLabel::LowVolume => "~",
            RiskLabel::HighRisk => "✗",
            RiskLabel::ModerateIrregularity => "⚠",
            RiskLabel::Normal => "✓",
        }
    }

    pub fn color_code(&self) -> &'static str {
        match self {
            RiskLabel::NonCough => "\x1b[90m",             // gray
            RiskLabel::LowVolume => "\x1b[36m",            // cyan
            RiskLabel::HighRisk => "\x1b[31m",             // red
            RiskLabel::ModerateIrregularity => "\x1b[33m", // yellow
            RiskLabel::Normal => "\x1b[32m",               // green
        }
    }
}

/// Intermediate scores, all derived before any gating decision
#[derive(Debug, Clone, Copy)]
pub struct ScoreBreakdown {
    /// Summed |MFCC[2..]| normalized into [0,1]; acoustic wetness proxy
    pub roughness: f32,
    /// RMS scaled into [0,1]
    pub signal_strength: f32,
    /// Weighted roughness + noisiness, in [0,1]
    pub pathology_score: f32,
    /// Starts at 1.0, reduced by tonal and speech-like penalties; may go
    /// negative before gating
    pub cough_probability: f32,
}

/// Raw features attached to every result for diagnostics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugFeatures {
    pub rms: f32,
    pub zcr: f32,
    pub roughness: f32,
    /// First five cepstral coefficients
    pub mfcc: [f32; 5],
}

/// Final classification with bounded risk score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: RiskLabel,
    /// Rounded and clamped; exactly 10 or 20 on the gated paths, within
    /// [risk_floor, risk_ceiling] on the pathology path
    pub risk_score: u8,
    pub description: String,
    pub features: DebugFeatures,
}

/// Derive the intermediate scores from the raw features
pub fn compute_scores(
    features: &TimeDomainFeatures,
    mfcc: &[f32],
    tuning: &ClassifierTuning,
) -> ScoreBreakdown {
    let spectral_roughness: f32 = mfcc.iter().skip(2).map(|c| c.abs()).sum();
    let roughness = (spectral_roughness / tuning.roughness_divisor).min(1.0);

    let signal_strength = (features.rms * tuning.rms_gain).min(1.0);

    let pathology_score = roughness * tuning.roughness_weight
        + (features.zcr * tuning.zcr_gain).min(1.0) * tuning.zcr_weight;

    let mut cough_probability = 1.0f32;
    if features.zcr < tuning.tonal_zcr_threshold {
        cough_probability -= tuning.tonal_penalty;
    }
    if mfcc.len() > 1 && mfcc[1] > tuning.speech_mfcc_threshold {
        cough_probability -= tuning.speech_penalty;
    }

    ScoreBreakdown {
        roughness,
        signal_strength,
        pathology_score,
        cough_probability,
    }
}

/// Content-derived fingerprint used for the de-aliasing nuance.
///
/// Not randomness: two acoustically distinct clips landing in the same
/// coarse band still get slightly different scores, while identical input
/// always reproduces the same value.
fn fingerprint(mfcc: &[f32], multiplier: f32) -> f32 {
    mfcc.iter()
        .enumerate()
        .map(|(i, &c)| c * (i + 1) as f32 * multiplier)
        .sum()
}

/// Apply the gates and pathology bands, in this exact order:
/// non-cough gate, low-volume gate, then the three bands with the
/// fingerprint nuance added on the band path only.
pub fn classify_features(
    features: &TimeDomainFeatures,
    mfcc: &[f32],
    tuning: &ClassifierTuning,
) -> ClassificationResult {
    let scores = compute_scores(features, mfcc, tuning);

    let (label, risk_score) = if scores.cough_probability < tuning.cough_probability_gate
        && features.rms > tuning.noise_floor_rms
    {
        (RiskLabel::NonCough, 20)
    } else if scores.signal_strength < tuning.min_signal_strength {
        (RiskLabel::LowVolume, 10)
    } else {
        let (label, base) = if scores.pathology_score > tuning.high_risk_threshold {
            (RiskLabel::HighRisk, 70.0 + scores.pathology_score * 29.0)
        } else if scores.pathology_score > tuning.moderate_risk_threshold {
            (RiskLabel::ModerateIrregularity, 50.0 + scores.pathology_score * 20.0)
        } else {
            (RiskLabel::Normal, 15.0 + scores.pathology_score * 20.0)
        };

        let print = fingerprint(mfcc, tuning.fingerprint_multiplier);
        let nuance = print.abs() % tuning.nuance_modulus - tuning.nuance_modulus / 2.0;
        let risk = (base + nuance)
            .round()
            .clamp(tuning.risk_floor as f32, tuning.risk_ceiling as f32);
        (label, risk as u8)
    };

    let mut first_five = [0.0f32; 5];
    for (slot, &c) in first_five.iter_mut().zip(mfcc.iter()) {
        *slot = c;
    }

    ClassificationResult {
        label,
        risk_score,
        description: label.description().to_string(),
        features: DebugFeatures {
            rms: features.rms,
            zcr: features.zcr,
            roughness: scores.roughness,
            mfcc: first_five,
        },
    }
}
