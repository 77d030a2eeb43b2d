use lectern::domain::{Transcript, TranscriptFailure};

#[test]
fn given_recognized_transcript_when_reading_then_exposes_text_and_no_banner() {
    let transcript = Transcript::Recognized("Cells need energy.".to_string());

    assert!(transcript.is_recognized());
    assert_eq!(transcript.text(), Some("Cells need energy."));
    assert_eq!(transcript.banner(), None);
}

#[test]
fn given_unintelligible_failure_when_reading_then_exposes_banner_only() {
    let transcript = Transcript::Failed(TranscriptFailure::Unintelligible);

    assert!(!transcript.is_recognized());
    assert_eq!(transcript.text(), None);
    assert_eq!(transcript.banner(), Some("Could not understand the audio."));
}

#[test]
fn given_service_failure_when_reading_then_exposes_banner_only() {
    let transcript = Transcript::Failed(TranscriptFailure::ServiceUnavailable);

    assert_eq!(transcript.text(), None);
    assert_eq!(
        transcript.banner(),
        Some("Speech recognition service unavailable.")
    );
}
