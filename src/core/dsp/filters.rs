//! Signal filtering utilities

/// Apply a first-order pre-emphasis filter (boosts high frequencies).
///
/// `y[0] = x[0]`, `y[i] = x[i] - coefficient * x[i-1]`. Applied once to the
/// whole clip before frame selection so the max-energy window is picked on
/// the emphasized signal.
pub fn pre_emphasis(samples: &[f32], coefficient: f32) -> Vec<f32> {
    if samples.is_empty() {
        return vec![];
    }

    let mut output = Vec::with_capacity(samples.len());
    output.push(samples[0]);
    for i in 1..samples.len() {
        output.push(samples[i] - coefficient * samples[i - 1]);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pre_emphasis_preserves_length_and_first_sample() {
        let input = vec![0.5, 0.5, 0.5, 0.5];
        let out = pre_emphasis(&input, 0.97);
        assert_eq!(out.len(), 4);
        assert_eq!(out[0], 0.5);
        // constant signal collapses to x * (1 - c)
        assert!((out[1] - 0.5 * 0.03).abs() < 1e-6);
    }

    #[test]
    fn test_pre_emphasis_empty() {
        assert!(pre_emphasis(&[], 0.97).is_empty());
    }

    #[test]
    fn test_pre_emphasis_attenuates_dc() {
        // DC should be almost entirely removed; an alternating signal is not
        let dc: Vec<f32> = vec![1.0; 256];
        let nyquist: Vec<f32> = (0..256).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        let dc_energy: f32 = pre_emphasis(&dc, 0.97)[1..].iter().map(|x| x * x).sum();
        let ny_energy: f32 = pre_emphasis(&nyquist, 0.97)[1..].iter().map(|x| x * x).sum();
        assert!(ny_energy > dc_energy * 100.0);
    }
}
