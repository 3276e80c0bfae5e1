//! Configuration module for CoughCheckr

mod tuning;

pub use tuning::ClassifierTuning;
