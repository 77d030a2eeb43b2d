use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{RecognitionError, SpeechRecognizer};
use crate::domain::Waveform;
use crate::infrastructure::audio::encode_wav;
use crate::infrastructure::text::sanitize_transcript;

/// Remote speech-to-text over HTTP: the normalized waveform is re-encoded
/// as WAV and posted to a transcription endpoint.
pub struct HttpSpeechRecognizer {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    language: Option<String>,
}

impl HttpSpeechRecognizer {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        language: Option<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: model.unwrap_or_else(|| "whisper-1".to_string()),
            language,
        }
    }
}

#[async_trait]
impl SpeechRecognizer for HttpSpeechRecognizer {
    async fn recognize(&self, waveform: &Waveform) -> Result<String, RecognitionError> {
        let url = format!("{}/audio/transcriptions", self.base_url);
        let wav_bytes = encode_wav(waveform);

        let file_part = multipart::Part::bytes(wav_bytes)
            .file_name("lecture.wav")
            .mime_str("audio/wav")
            .map_err(|e| RecognitionError::ServiceUnavailable(format!("mime: {}", e)))?;

        let mut form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "text")
            .part("file", file_part);

        if let Some(language) = &self.language {
            form = form.text("language", language.clone());
        }

        tracing::debug!(
            model = %self.model,
            duration_secs = waveform.duration_secs(),
            "Sending audio to recognition service"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| RecognitionError::ServiceUnavailable(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(RecognitionError::ServiceUnavailable(format!(
                "status {}: {}",
                status, body
            )));
        }

        let raw = response
            .text()
            .await
            .map_err(|e| RecognitionError::ServiceUnavailable(format!("body: {}", e)))?;

        let transcript = sanitize_transcript(&raw);

        // The service answers 200 with an empty body when it finds no speech
        if transcript.is_empty() {
            return Err(RecognitionError::Unintelligible);
        }

        tracing::info!(chars = transcript.len(), "Transcription completed");

        Ok(transcript)
    }
}
