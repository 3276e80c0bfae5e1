// src/core/analyzer.rs
//
// High-level analysis API tying the pipeline stages together. Both the CLI
// and the verification bench go through this single entry point.

use log::{debug, warn};

use crate::config::ClassifierTuning;
use crate::core::analysis::{extract_mfcc, MfccParams};
use crate::core::classifier::{classify_features, ClassificationResult};
use crate::core::clip::AudioClip;
use crate::core::dsp::analyze_time_domain;
use crate::error::AnalysisError;

/// Cough analyzer with configurable tuning and frame geometry
pub struct CoughAnalyzer {
    tuning: ClassifierTuning,
    params: MfccParams,
}

impl CoughAnalyzer {
    /// Create an analyzer with the default production tuning
    pub fn new() -> Self {
        Self {
            tuning: ClassifierTuning::default(),
            params: MfccParams::default(),
        }
    }

    pub fn with_tuning(mut self, tuning: ClassifierTuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn with_params(mut self, params: MfccParams) -> Self {
        self.params = params;
        self
    }

    pub fn tuning(&self) -> &ClassifierTuning {
        &self.tuning
    }

    /// Run the full pipeline over one clip.
    ///
    /// Pure and synchronous; concurrent calls for independent clips share no
    /// state. Any failure aborts the whole analysis with no partial result.
    pub fn analyze(&self, clip: &AudioClip) -> Result<ClassificationResult, AnalysisError> {
        let time_domain = analyze_time_domain(clip)?;

        if time_domain.peak_amplitude >= 0.99 {
            warn!(
                "clip peaks at {:.3}, recording is likely clipped and the spectral estimate degraded",
                time_domain.peak_amplitude
            );
        }

        let mfcc = extract_mfcc(
            clip.samples(),
            clip.sample_rate(),
            &self.params,
            self.tuning.pre_emphasis,
        )?;

        let result = classify_features(&time_domain, &mfcc, &self.tuning);
        debug!(
            "features: strength={:.2} roughness={:.2} zcr={:.2} -> {} ({})",
            (time_domain.rms * self.tuning.rms_gain).min(1.0),
            result.features.roughness,
            time_domain.zcr,
            result.label.label(),
            result.risk_score
        );
        Ok(result)
    }
}

impl Default for CoughAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify one clip with the default tuning
pub fn classify(clip: &AudioClip) -> Result<ClassificationResult, AnalysisError> {
    CoughAnalyzer::new().analyze(clip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classifier::RiskLabel;

    #[test]
    fn test_all_zero_clip_is_low_volume() {
        let clip = AudioClip::new(vec![0.0; 16000], 16000).unwrap();
        let result = classify(&clip).unwrap();
        assert_eq!(result.label, RiskLabel::LowVolume);
        assert_eq!(result.risk_score, 10);
        assert_eq!(result.features.rms, 0.0);
        assert_eq!(result.features.zcr, 0.0);
    }

    #[test]
    fn test_short_clip_rejected() {
        let clip = AudioClip::new(vec![0.5; 300], 16000).unwrap();
        assert!(matches!(
            classify(&clip),
            Err(AnalysisError::ClipTooShort { .. })
        ));
    }

    #[test]
    fn test_custom_tuning_changes_gate() {
        // raise the low-volume threshold so a moderately loud clip gates
        let mut tuning = ClassifierTuning::default();
        tuning.min_signal_strength = 2.0;
        let analyzer = CoughAnalyzer::new().with_tuning(tuning);
        let samples: Vec<f32> = (0..16000)
            .map(|i| (2.0 * std::f32::consts::PI * 900.0 * i as f32 / 16000.0).sin() * 0.4)
            .collect();
        let clip = AudioClip::new(samples, 16000).unwrap();
        let result = analyzer.analyze(&clip).unwrap();
        assert_eq!(result.label, RiskLabel::LowVolume);
    }
}
