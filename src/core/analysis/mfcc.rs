// src/core/analysis/mfcc.rs
//
// MFCC extraction over the single highest-energy frame of a clip. The
// classifier works on one burst rather than a full frame grid: coughs are
// short impulsive events and the loudest window carries the signature.

use serde::{Deserialize, Serialize};

use super::frame::select_peak_frame;
use super::mel::MelFilterbank;
use crate::core::dsp::{pre_emphasis, FftProcessor, WindowType};
use crate::error::AnalysisError;

/// MFCC extraction parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MfccParams {
    pub fft_size: usize,
    pub hop_size: usize,
    pub num_filters: usize,
    pub num_cepstra: usize,
}

impl Default for MfccParams {
    fn default() -> Self {
        Self {
            fft_size: 512,
            hop_size: 256,
            num_filters: 26,
            num_cepstra: 13,
        }
    }
}

/// DCT-II of the filterbank log energies, truncated to `num_cepstra`
/// coefficients: `mfcc[n] = sum_m energy[m] * cos(pi * n * (m + 0.5) / M)`.
pub fn dct_ii(energies: &[f32], num_cepstra: usize) -> Vec<f32> {
    let m_total = energies.len() as f32;
    (0..num_cepstra)
        .map(|n| {
            energies
                .iter()
                .enumerate()
                .map(|(m, &e)| {
                    e * (std::f32::consts::PI * n as f32 * (m as f32 + 0.5) / m_total).cos()
                })
                .sum()
        })
        .collect()
}

/// Run the spectral half of the pipeline: pre-emphasis, max-energy frame
/// selection, Hamming window + FFT, Mel filterbank, DCT.
///
/// Coefficient 0 is the overall log-energy term; 1..num_cepstra carry
/// spectral shape. Fails with `ClipTooShort` when the emphasized signal does
/// not contain a full frame.
pub fn extract_mfcc(
    samples: &[f32],
    sample_rate: u32,
    params: &MfccParams,
    pre_emphasis_coeff: f32,
) -> Result<Vec<f32>, AnalysisError> {
    let emphasized = pre_emphasis(samples, pre_emphasis_coeff);
    let frame = select_peak_frame(&emphasized, params.fft_size, params.hop_size)?;

    let fft = FftProcessor::new(params.fft_size, WindowType::Hamming)?;
    let power_spectrum = fft.power_spectrum(frame.samples());

    let filterbank = MelFilterbank::new(params.num_filters, params.fft_size, sample_rate);
    let energies = filterbank.apply(&power_spectrum);

    Ok(dct_ii(&energies, params.num_cepstra))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dct_of_zero_energies_is_zero() {
        let mfcc = dct_ii(&[0.0; 26], 13);
        assert_eq!(mfcc.len(), 13);
        assert!(mfcc.iter().all(|&c| c == 0.0));
    }

    #[test]
    fn test_dct_first_coefficient_is_energy_sum() {
        // cos(0) = 1 for n = 0, so mfcc[0] is the plain sum
        let energies: Vec<f32> = (0..26).map(|i| i as f32 * 0.1).collect();
        let mfcc = dct_ii(&energies, 13);
        let sum: f32 = energies.iter().sum();
        assert!((mfcc[0] - sum).abs() < 1e-4);
    }

    #[test]
    fn test_extract_returns_thirteen_coefficients() {
        let samples: Vec<f32> = (0..8000)
            .map(|i| (2.0 * std::f32::consts::PI * 700.0 * i as f32 / 16000.0).sin() * 0.5)
            .collect();
        let mfcc = extract_mfcc(&samples, 16000, &MfccParams::default(), 0.97).unwrap();
        assert_eq!(mfcc.len(), 13);
        assert!(mfcc.iter().all(|c| c.is_finite()));
    }

    #[test]
    fn test_extract_rejects_short_signal() {
        let err = extract_mfcc(&[0.1; 400], 16000, &MfccParams::default(), 0.97).unwrap_err();
        assert!(matches!(err, AnalysisError::ClipTooShort { .. }));
    }
}
