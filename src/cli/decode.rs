// src/cli/decode.rs
//
// WAV ingestion for the CLI. The core pipeline only ever sees normalized
// mono samples; this is the external-decoder seam the library assumes.

use std::path::Path;

use crate::core::clip::AudioClip;
use crate::error::AnalysisError;

/// Read a WAV file into a normalized mono clip.
///
/// Integer formats are scaled to [-1.0, 1.0] by their bit depth;
/// multi-channel audio is downmixed by averaging across channels.
pub fn read_wav(path: &Path) -> Result<AudioClip, AnalysisError> {
    let reader = hound::WavReader::open(path)
        .map_err(|e| AnalysisError::Decode(format!("{}: {e}", path.display())))?;
    let spec = reader.spec();

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<Result<_, _>>()
            .map_err(|e| AnalysisError::Decode(format!("{}: {e}", path.display())))?,
        hound::SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<Result<_, _>>()
                .map_err(|e| AnalysisError::Decode(format!("{}: {e}", path.display())))?
        }
    };

    let channels = spec.channels as usize;
    let mono = if channels <= 1 {
        interleaved
    } else {
        interleaved
            .chunks_exact(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
            .collect()
    };

    AudioClip::new(mono, spec.sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_decode_error() {
        let err = read_wav(Path::new("/nonexistent/clip.wav")).unwrap_err();
        assert!(matches!(err, AnalysisError::Decode(_)));
    }

    #[test]
    fn test_round_trip_through_wav() {
        let dir = std::env::temp_dir();
        let path = dir.join("coughcheckr_decode_test.wav");

        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 16000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for i in 0..1024 {
            let v = ((i as f32 / 37.0).sin() * 0.5 * 32768.0) as i16;
            // identical channels so the downmix is the identity
            writer.write_sample(v).unwrap();
            writer.write_sample(v).unwrap();
        }
        writer.finalize().unwrap();

        let clip = read_wav(&path).unwrap();
        assert_eq!(clip.sample_rate(), 16000);
        assert_eq!(clip.len(), 1024);
        assert!(clip.samples().iter().all(|s| s.abs() <= 0.51));

        std::fs::remove_file(&path).ok();
    }
}
