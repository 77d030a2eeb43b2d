use lectern::domain::{SAMPLE_RATE, Waveform};

#[test]
fn given_samples_when_measuring_duration_then_uses_canonical_rate() {
    let waveform = Waveform::new(vec![0.0; SAMPLE_RATE as usize * 2]);

    assert!((waveform.duration_secs() - 2.0).abs() < f32::EPSILON);
}

#[test]
fn given_long_waveform_when_truncating_then_caps_at_max_seconds() {
    let waveform = Waveform::new(vec![0.0; SAMPLE_RATE as usize * 60]);

    let capped = waveform.truncated(30);

    assert_eq!(capped.samples().len(), SAMPLE_RATE as usize * 30);
}

#[test]
fn given_short_waveform_when_truncating_then_is_unchanged() {
    let waveform = Waveform::new(vec![0.5; 100]);

    let capped = waveform.clone().truncated(30);

    assert_eq!(capped, waveform);
}

#[test]
fn given_no_samples_when_checking_then_is_empty() {
    assert!(Waveform::new(Vec::new()).is_empty());
    assert!(!Waveform::new(vec![0.1]).is_empty());
}
