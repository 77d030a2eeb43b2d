use lectern::application::services::{SessionId, SessionRegistry};
use lectern::domain::{AudioFormat, Lecture, StudySet, Transcript};

fn study_set(filename: &str) -> StudySet {
    StudySet::new(
        Lecture::new(filename.to_string(), AudioFormat::Wav, 10),
        Transcript::Recognized("text".to_string()),
    )
}

#[test]
fn given_stored_session_when_fetching_then_returns_study_set() {
    let registry = SessionRegistry::new();
    let id = SessionId::new();

    registry.put(id, study_set("first.wav"));

    let fetched = registry.get(id).unwrap();
    assert_eq!(fetched.lecture.filename, "first.wav");
}

#[test]
fn given_unknown_session_when_fetching_then_returns_none() {
    let registry = SessionRegistry::new();

    assert!(registry.get(SessionId::new()).is_none());
}

#[test]
fn given_existing_session_when_putting_again_then_replaces_study_set() {
    let registry = SessionRegistry::new();
    let id = SessionId::new();

    registry.put(id, study_set("first.wav"));
    registry.put(id, study_set("second.wav"));

    assert_eq!(registry.get(id).unwrap().lecture.filename, "second.wav");
}

#[test]
fn given_stored_session_when_updating_then_mutation_is_visible() {
    let registry = SessionRegistry::new();
    let id = SessionId::new();
    registry.put(id, study_set("first.wav"));

    let updated = registry.update(id, |set| {
        set.set_notes("notes".to_string());
        set.notes.clone()
    });

    assert_eq!(updated, Some(Some("notes".to_string())));
    assert_eq!(registry.get(id).unwrap().notes.as_deref(), Some("notes"));
}

#[test]
fn given_unknown_session_when_updating_then_returns_none() {
    let registry = SessionRegistry::new();

    assert!(registry.update(SessionId::new(), |_| ()).is_none());
}

#[test]
fn given_stored_session_when_removing_then_it_is_gone() {
    let registry = SessionRegistry::new();
    let id = SessionId::new();
    registry.put(id, study_set("first.wav"));

    assert!(registry.remove(id));
    assert!(registry.get(id).is_none());
    assert!(!registry.remove(id));
}
