//! Command-line interface support: WAV ingestion and result formatting

pub mod decode;
pub mod output;

pub use decode::read_wav;
pub use output::{format_json, format_result};
