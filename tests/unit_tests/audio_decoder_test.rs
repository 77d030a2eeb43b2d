use lectern::application::ports::{AudioDecoder, AudioDecoderError};
use lectern::domain::AudioFormat;
use lectern::infrastructure::audio::SymphoniaAudioDecoder;

fn build_wav(sample_rate: u32, samples: &[i16]) -> Vec<u8> {
    let num_samples = samples.len() as u32;
    let byte_rate = sample_rate * 2;
    let data_size = num_samples * 2;
    let file_size = 36 + data_size;

    let mut wav = Vec::with_capacity(44 + data_size as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&file_size.to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes()); // block align
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());
    for &s in samples {
        wav.extend_from_slice(&s.to_le_bytes());
    }
    wav
}

#[test]
fn given_16khz_wav_when_decoding_then_returns_samples_unresampled() {
    let wav = build_wav(16_000, &vec![0i16; 1600]);
    let decoder = SymphoniaAudioDecoder;

    let waveform = decoder.decode(&wav, AudioFormat::Wav).unwrap();

    assert_eq!(waveform.samples().len(), 1600);
    assert!((waveform.duration_secs() - 0.1).abs() < 0.01);
}

#[test]
fn given_44khz_wav_when_decoding_then_resamples_to_16khz() {
    let wav = build_wav(44_100, &vec![0i16; 4410]);
    let decoder = SymphoniaAudioDecoder;

    let waveform = decoder.decode(&wav, AudioFormat::Wav).unwrap();

    // 0.1s of audio lands at ~1600 samples after resampling
    assert!(!waveform.is_empty());
    assert!(waveform.samples().len() <= 1600);
    assert!(waveform.samples().len() > 1400);
}

#[test]
fn given_corrupted_bytes_when_decoding_then_returns_decoding_error() {
    let decoder = SymphoniaAudioDecoder;

    let result = decoder.decode(&[0xFFu8; 128], AudioFormat::Wav);

    assert!(matches!(result, Err(AudioDecoderError::DecodingFailed(_))));
}

#[test]
fn given_empty_bytes_when_decoding_then_returns_decoding_error() {
    let decoder = SymphoniaAudioDecoder;

    let result = decoder.decode(&[], AudioFormat::Wav);

    assert!(matches!(result, Err(AudioDecoderError::DecodingFailed(_))));
}
