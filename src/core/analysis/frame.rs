//! Max-energy frame selection

use crate::error::AnalysisError;

/// Fixed-length analysis frame cut from the pre-emphasized signal
#[derive(Debug, Clone)]
pub struct AnalysisFrame {
    samples: Vec<f32>,
    offset: usize,
}

impl AnalysisFrame {
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Start offset of the frame within the emphasized signal
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Slide a `frame_len` window across the emphasized signal with the given hop
/// and keep the offset with the largest summed absolute amplitude, the most
/// likely cough burst.
///
/// A signal shorter than one frame is rejected with `ClipTooShort` instead of
/// silently defaulting to offset 0.
pub fn select_peak_frame(
    emphasized: &[f32],
    frame_len: usize,
    hop: usize,
) -> Result<AnalysisFrame, AnalysisError> {
    if emphasized.len() < frame_len {
        return Err(AnalysisError::ClipTooShort {
            len: emphasized.len(),
            required: frame_len,
        });
    }

    let mut best_offset = 0usize;
    let mut max_energy = 0.0f32;
    let mut offset = 0usize;
    while offset + frame_len < emphasized.len() {
        let energy: f32 = emphasized[offset..offset + frame_len]
            .iter()
            .map(|s| s.abs())
            .sum();
        if energy > max_energy {
            max_energy = energy;
            best_offset = offset;
        }
        offset += hop;
    }

    Ok(AnalysisFrame {
        samples: emphasized[best_offset..best_offset + frame_len].to_vec(),
        offset: best_offset,
    })
}
