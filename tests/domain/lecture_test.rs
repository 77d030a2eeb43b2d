use lectern::domain::AudioFormat;

#[test]
fn given_known_extensions_when_parsing_then_returns_format() {
    assert_eq!(
        AudioFormat::from_extension("lecture.wav"),
        Some(AudioFormat::Wav)
    );
    assert_eq!(
        AudioFormat::from_extension("lecture.MP3"),
        Some(AudioFormat::Mp3)
    );
    assert_eq!(
        AudioFormat::from_extension("lecture.m4a"),
        Some(AudioFormat::M4a)
    );
    assert_eq!(
        AudioFormat::from_extension("lecture.ogg"),
        Some(AudioFormat::Ogg)
    );
}

#[test]
fn given_unknown_extension_when_parsing_then_returns_none() {
    assert_eq!(AudioFormat::from_extension("slides.pdf"), None);
    assert_eq!(AudioFormat::from_extension("noextension"), None);
}

#[test]
fn given_audio_mime_when_parsing_then_returns_format() {
    assert_eq!(AudioFormat::from_mime("audio/wav"), Some(AudioFormat::Wav));
    assert_eq!(AudioFormat::from_mime("audio/mpeg"), Some(AudioFormat::Mp3));
    assert_eq!(AudioFormat::from_mime("audio/mp4"), Some(AudioFormat::M4a));
    assert_eq!(AudioFormat::from_mime("audio/ogg"), Some(AudioFormat::Ogg));
}

#[test]
fn given_unknown_mime_when_parsing_then_returns_none() {
    assert_eq!(AudioFormat::from_mime("application/pdf"), None);
}
