//! Digital Signal Processing utilities

pub mod fft;
pub mod filters;
pub mod stats;
pub mod windows;

pub use fft::FftProcessor;
pub use filters::pre_emphasis;
pub use stats::{analyze_time_domain, TimeDomainFeatures};
pub use windows::{create_window, WindowType};
