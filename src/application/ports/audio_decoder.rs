use crate::domain::{AudioFormat, Waveform};

/// Decodes an uploaded audio container into the canonical 16 kHz mono
/// waveform the recognition boundary accepts.
pub trait AudioDecoder: Send + Sync {
    fn decode(&self, data: &[u8], format: AudioFormat) -> Result<Waveform, AudioDecoderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioDecoderError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
}
