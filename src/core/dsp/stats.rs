//! Time-domain signal statistics

use serde::{Deserialize, Serialize};

use crate::core::clip::AudioClip;
use crate::error::AnalysisError;

/// Time-domain features computed over the entire clip, not the selected frame
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimeDomainFeatures {
    /// Root-mean-square amplitude, a loudness proxy
    pub rms: f32,
    /// Zero-crossing rate, fraction of adjacent-sample sign changes
    pub zcr: f32,
    /// Maximum absolute amplitude; consulted for clipping diagnostics only
    pub peak_amplitude: f32,
}

/// Single pass over the clip: sum of squares, peak, and sign changes.
///
/// A crossing is counted when the current sample is non-negative and the
/// previous was negative, or vice versa.
pub fn analyze_time_domain(clip: &AudioClip) -> Result<TimeDomainFeatures, AnalysisError> {
    let samples = clip.samples();
    if samples.is_empty() {
        // AudioClip::new already rejects this, but the division below must
        // never see a zero count
        return Err(AnalysisError::InvalidInput("clip has no samples".into()));
    }

    let mut sum_squares = 0.0f32;
    let mut peak = 0.0f32;
    let mut crossings = 0usize;

    for i in 0..samples.len() {
        let val = samples[i];
        sum_squares += val * val;
        peak = peak.max(val.abs());

        if i > 0 {
            let prev = samples[i - 1];
            if (val >= 0.0 && prev < 0.0) || (val < 0.0 && prev >= 0.0) {
                crossings += 1;
            }
        }
    }

    let count = samples.len() as f32;
    Ok(TimeDomainFeatures {
        rms: (sum_squares / count).sqrt(),
        zcr: crossings as f32 / count,
        peak_amplitude: peak,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip(samples: Vec<f32>) -> AudioClip {
        AudioClip::new(samples, 16000).unwrap()
    }

    #[test]
    fn test_silence() {
        let features = analyze_time_domain(&clip(vec![0.0; 1024])).unwrap();
        assert_eq!(features.rms, 0.0);
        assert_eq!(features.zcr, 0.0);
        assert_eq!(features.peak_amplitude, 0.0);
    }

    #[test]
    fn test_alternating_signal_zcr() {
        // +1, -1, +1, ... crosses at every step after the first sample
        let samples: Vec<f32> = (0..1000).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        let features = analyze_time_domain(&clip(samples)).unwrap();
        assert!((features.zcr - 999.0 / 1000.0).abs() < 1e-6);
        assert!((features.rms - 1.0).abs() < 1e-6);
        assert_eq!(features.peak_amplitude, 1.0);
    }

    #[test]
    fn test_rms_of_constant() {
        let features = analyze_time_domain(&clip(vec![0.25; 512])).unwrap();
        assert!((features.rms - 0.25).abs() < 1e-6);
        assert_eq!(features.zcr, 0.0);
    }

    #[test]
    fn test_peak_tracks_negative_excursions() {
        let features = analyze_time_domain(&clip(vec![0.1, -0.9, 0.2])).unwrap();
        assert!((features.peak_amplitude - 0.9).abs() < 1e-6);
    }
}
