//! Mel-scale triangular filterbank

/// Convert frequency in Hz to Mel
pub fn hz_to_mel(hz: f32) -> f32 {
    1125.0 * (1.0 + hz / 700.0).ln()
}

/// Convert Mel back to frequency in Hz
pub fn mel_to_hz(mel: f32) -> f32 {
    700.0 * ((mel / 1125.0).exp() - 1.0)
}

/// Bank of triangular filters spaced uniformly on the Mel scale between 0 Hz
/// and Nyquist.
///
/// Filter edges come from `num_filters + 2` equally spaced Mel points mapped
/// to spectrum bins via `bin = floor((fft_size + 1) * f / sample_rate)`.
#[derive(Debug, Clone)]
pub struct MelFilterbank {
    bin_points: Vec<usize>,
    num_filters: usize,
}

impl MelFilterbank {
    pub fn new(num_filters: usize, fft_size: usize, sample_rate: u32) -> Self {
        let mel_min = hz_to_mel(0.0);
        let mel_max = hz_to_mel(sample_rate as f32 / 2.0);

        let bin_points = (0..num_filters + 2)
            .map(|i| {
                let mel = mel_min + (mel_max - mel_min) * i as f32 / (num_filters + 1) as f32;
                let hz = mel_to_hz(mel);
                ((fft_size + 1) as f32 * hz / sample_rate as f32).floor() as usize
            })
            .collect();

        Self {
            bin_points,
            num_filters,
        }
    }

    /// Spectrum-bin boundaries of the filters (`num_filters + 2` entries)
    pub fn bin_points(&self) -> &[usize] {
        &self.bin_points
    }

    pub fn num_filters(&self) -> usize {
        self.num_filters
    }

    /// Aggregate a power spectrum into per-filter log energies.
    ///
    /// Each filter is a rising ramp from the previous boundary to its center
    /// followed by a falling ramp to the next boundary. Result per filter is
    /// `ln(sum)` when the weighted sum is positive, `0.0` otherwise (a silent
    /// band must not produce `ln(0)`).
    pub fn apply(&self, power_spectrum: &[f32]) -> Vec<f32> {
        let mut energies = Vec::with_capacity(self.num_filters);

        for m in 1..=self.num_filters {
            let lower = self.bin_points[m - 1];
            let center = self.bin_points[m];
            let upper = self.bin_points[m + 1];

            let mut sum = 0.0f32;
            for k in lower..center {
                sum += power_spectrum[k] * (k - lower) as f32 / (center - lower) as f32;
            }
            for k in center..upper {
                sum += power_spectrum[k] * (upper - k) as f32 / (upper - center) as f32;
            }

            energies.push(if sum > 0.0 { sum.ln() } else { 0.0 });
        }

        energies
    }
}
