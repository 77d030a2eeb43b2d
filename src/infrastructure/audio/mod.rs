mod pcm_decoder;
mod wav_encoder;

pub use pcm_decoder::SymphoniaAudioDecoder;
pub use wav_encoder::encode_wav;
