// src/testgen/mod.rs
//
// Synthetic clip generation for the verification bench and integration
// tests. Noise generators take an explicit seed so every run reproduces the
// same clip, keeping the whole bench deterministic.
//
// Every generator requires a positive duration and sample rate: a clip must
// contain at least one sample, the same invariant `AudioClip::new` enforces.
// Debug builds assert the invariant; release builds clamp to a one-sample
// clip rather than panic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::PI;

use crate::core::clip::AudioClip;

fn sample_count(duration_secs: f32, sample_rate: u32) -> usize {
    debug_assert!(sample_rate > 0, "generators require a positive sample rate");
    let n = (duration_secs * sample_rate as f32) as usize;
    debug_assert!(n >= 1, "generators require a positive duration");
    n.max(1)
}

/// Pure sine tone
pub fn sine(duration_secs: f32, sample_rate: u32, freq: f32, amplitude: f32) -> AudioClip {
    let n = sample_count(duration_secs, sample_rate);
    let samples = (0..n)
        .map(|i| (2.0 * PI * freq * i as f32 / sample_rate as f32).sin() * amplitude)
        .collect();
    AudioClip::new(samples, sample_rate).unwrap_or_else(|_| unreachable!())
}

/// Flat white noise
pub fn white_noise(duration_secs: f32, sample_rate: u32, amplitude: f32, seed: u64) -> AudioClip {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = sample_count(duration_secs, sample_rate);
    let samples = (0..n)
        .map(|_| rng.gen_range(-1.0f32..1.0) * amplitude)
        .collect();
    AudioClip::new(samples, sample_rate).unwrap_or_else(|_| unreachable!())
}

/// Dry cough surrogate: white noise under a fast exponential decay
pub fn dry_burst(duration_secs: f32, sample_rate: u32, amplitude: f32, seed: u64) -> AudioClip {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = sample_count(duration_secs, sample_rate);
    let samples = (0..n)
        .map(|i| {
            let envelope = (-3.0 * i as f32 / n as f32).exp();
            rng.gen_range(-1.0f32..1.0) * amplitude * envelope
        })
        .collect();
    AudioClip::new(samples, sample_rate).unwrap_or_else(|_| unreachable!())
}

/// Wet cough surrogate: noise mixed with a 150 Hz rumble (crackles) under a
/// slower decay
pub fn wet_burst(duration_secs: f32, sample_rate: u32, amplitude: f32, seed: u64) -> AudioClip {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = sample_count(duration_secs, sample_rate);
    let samples = (0..n)
        .map(|i| {
            let envelope = (-2.0 * i as f32 / n as f32).exp();
            let noise = rng.gen_range(-1.0f32..1.0);
            let rumble = (2.0 * PI * 150.0 * i as f32 / sample_rate as f32).sin();
            (noise * 0.6 + rumble * 0.4) * amplitude * envelope
        })
        .collect();
    AudioClip::new(samples, sample_rate).unwrap_or_else(|_| unreachable!())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generators_produce_expected_lengths() {
        assert_eq!(sine(1.0, 16000, 440.0, 0.5).len(), 16000);
        assert_eq!(white_noise(0.5, 16000, 0.5, 7).len(), 8000);
        assert_eq!(dry_burst(0.5, 16000, 0.8, 7).len(), 8000);
        assert_eq!(wet_burst(0.5, 16000, 0.8, 7).len(), 8000);
    }

    #[test]
    fn test_seeded_noise_is_reproducible() {
        let a = white_noise(0.1, 16000, 0.5, 42);
        let b = white_noise(0.1, 16000, 0.5, 42);
        assert_eq!(a.samples(), b.samples());
        let c = white_noise(0.1, 16000, 0.5, 43);
        assert_ne!(a.samples(), c.samples());
    }

    #[test]
    fn test_burst_decays() {
        let clip = dry_burst(0.5, 16000, 0.8, 1);
        let head: f32 = clip.samples()[..800].iter().map(|s| s.abs()).sum();
        let tail: f32 = clip.samples()[7200..].iter().map(|s| s.abs()).sum();
        assert!(head > tail * 4.0);
    }

    #[test]
    fn test_shortest_positive_duration_yields_one_sample() {
        // one sample period is the smallest duration the invariant allows
        let clip = sine(1.0 / 16000.0, 16000, 440.0, 0.5);
        assert_eq!(clip.len(), 1);
        assert_eq!(clip.sample_rate(), 16000);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "positive duration")]
    fn test_zero_duration_asserts() {
        sine(0.0, 16000, 440.0, 0.5);
    }

    #[test]
    fn test_amplitude_bounds() {
        let clip = wet_burst(0.5, 16000, 0.8, 3);
        assert!(clip.samples().iter().all(|s| s.abs() <= 0.8));
    }
}
