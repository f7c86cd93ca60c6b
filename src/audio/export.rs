//! PCM conversion and debug WAV export

/// Convert f32 samples (-1.0 to 1.0) to 16-bit PCM
///
/// Out-of-range samples are clamped.
pub fn to_pcm_i16(samples: &[f32]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| (s.clamp(-1.0, 1.0) * i16::MAX as f32) as i16)
        .collect()
}

/// Write mono f32 samples to a WAV file for auditioning cues
///
/// Requires the `wav-export` feature.
#[cfg(feature = "wav-export")]
pub fn write_wav(samples: &[f32], sample_rate: u32, path: &std::path::Path) -> std::io::Result<()> {
    use hound::{SampleFormat, WavSpec, WavWriter};

    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec).map_err(std::io::Error::other)?;
    for sample in to_pcm_i16(samples) {
        writer.write_sample(sample).map_err(std::io::Error::other)?;
    }
    writer.finalize().map_err(std::io::Error::other)?;

    Ok(())
}
