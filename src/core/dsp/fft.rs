//! FFT processing with windowing

use num_complex::Complex;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

use super::windows::{create_window, WindowType};
use crate::error::AnalysisError;

/// Windowed FFT power-spectrum computation over fixed-size frames
pub struct FftProcessor {
    fft: Arc<dyn Fft<f32>>,
    window: Vec<f32>,
    fft_size: usize,
}

impl FftProcessor {
    /// Plan an FFT of `fft_size` points with the given analysis window.
    ///
    /// The radix-2 transform requires `fft_size` to be an exact power of two;
    /// this is validated here rather than deep inside the pipeline.
    pub fn new(fft_size: usize, window_type: WindowType) -> Result<Self, AnalysisError> {
        if fft_size < 2 || !fft_size.is_power_of_two() {
            return Err(AnalysisError::InvalidInput(format!(
                "FFT size must be a power of two, got {fft_size}"
            )));
        }
        let mut planner = FftPlanner::new();
        Ok(Self {
            fft: planner.plan_fft_forward(fft_size),
            window: create_window(fft_size, window_type),
            fft_size,
        })
    }

    /// Compute the power spectrum of one frame.
    ///
    /// The frame is tapered by the analysis window, transformed, and reduced
    /// to the lower half of the spectrum (real-signal symmetry):
    /// `P[k] = (Re[k]^2 + Im[k]^2) / fft_size` for `k < fft_size / 2`.
    pub fn power_spectrum(&self, frame: &[f32]) -> Vec<f32> {
        debug_assert_eq!(frame.len(), self.fft_size);

        let mut buffer: Vec<Complex<f32>> = frame
            .iter()
            .take(self.fft_size)
            .enumerate()
            .map(|(i, &s)| Complex::new(s * self.window[i], 0.0))
            .collect();
        buffer.resize(self.fft_size, Complex::new(0.0, 0.0));

        self.fft.process(&mut buffer);

        let norm = self.fft_size as f32;
        buffer[..self.fft_size / 2]
            .iter()
            .map(|c| (c.re * c.re + c.im * c.im) / norm)
            .collect()
    }

    pub fn fft_size(&self) -> usize {
        self.fft_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_rejects_non_power_of_two() {
        assert!(FftProcessor::new(500, WindowType::Hamming).is_err());
        assert!(FftProcessor::new(0, WindowType::Hamming).is_err());
        assert!(FftProcessor::new(512, WindowType::Hamming).is_ok());
    }

    #[test]
    fn test_spectrum_length_and_nonnegativity() {
        let proc = FftProcessor::new(512, WindowType::Hamming).unwrap();
        let frame: Vec<f32> = (0..512).map(|i| (i as f32 * 0.1).sin()).collect();
        let spectrum = proc.power_spectrum(&frame);
        assert_eq!(spectrum.len(), 256);
        assert!(spectrum.iter().all(|&p| p >= 0.0));
    }

    #[test]
    fn test_tone_peaks_at_expected_bin() {
        // 16 cycles over 512 samples -> energy concentrated at bin 16
        let proc = FftProcessor::new(512, WindowType::Rectangular).unwrap();
        let frame: Vec<f32> = (0..512)
            .map(|i| (2.0 * PI * 16.0 * i as f32 / 512.0).sin())
            .collect();
        let spectrum = proc.power_spectrum(&frame);
        let peak_bin = spectrum
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(peak_bin, 16);
    }

    #[test]
    fn test_silence_has_zero_spectrum() {
        let proc = FftProcessor::new(512, WindowType::Hamming).unwrap();
        let spectrum = proc.power_spectrum(&[0.0; 512]);
        assert!(spectrum.iter().all(|&p| p == 0.0));
    }
}
