//! Window function implementations

use std::f32::consts::PI;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowType {
    Rectangular,
    Hann,
    Hamming,
}

/// Create window coefficients
pub fn create_window(size: usize, window_type: WindowType) -> Vec<f32> {
    let denom = (size - 1) as f32;
    (0..size)
        .map(|i| {
            let x = i as f32;
            match window_type {
                WindowType::Rectangular => 1.0,
                WindowType::Hann => 0.5 * (1.0 - (2.0 * PI * x / denom).cos()),
                WindowType::Hamming => 0.54 - 0.46 * (2.0 * PI * x / denom).cos(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hamming_endpoints() {
        let window = create_window(512, WindowType::Hamming);
        assert_eq!(window.len(), 512);
        // 0.54 - 0.46 at both edges
        assert!((window[0] - 0.08).abs() < 1e-6);
        assert!((window[511] - 0.08).abs() < 1e-6);
    }

    #[test]
    fn test_hamming_peak_at_center() {
        let window = create_window(512, WindowType::Hamming);
        let center = window[255].max(window[256]);
        assert!(center > 0.999);
        assert!(window.iter().all(|&w| w <= 1.0 + 1e-6));
    }

    #[test]
    fn test_hann_window() {
        let window = create_window(4, WindowType::Hann);
        assert!(window[0].abs() < 0.01);
    }
}
