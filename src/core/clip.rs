// src/core/clip.rs
//
// Decoded audio clip container. Decoding itself (WAV parsing, channel
// downmix) lives in the CLI layer; the core only ever sees normalized mono
// samples plus a sample rate.

use crate::error::AnalysisError;

/// Mono PCM clip, samples nominally in [-1.0, 1.0]
#[derive(Debug, Clone)]
pub struct AudioClip {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl AudioClip {
    /// Validate and wrap decoded samples.
    ///
    /// Fails with `InvalidInput` for an empty clip or a zero sample rate;
    /// every later pipeline stage may assume both invariants hold.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Result<Self, AnalysisError> {
        if samples.is_empty() {
            return Err(AnalysisError::InvalidInput("clip has no samples".into()));
        }
        if sample_rate == 0 {
            return Err(AnalysisError::InvalidInput(
                "sample rate must be positive".into(),
            ));
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}
