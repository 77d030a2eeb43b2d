mod lecture;
mod study_aids;
mod study_set;
mod transcript;
mod waveform;

pub use lecture::{AudioFormat, Lecture, LectureId};
pub use study_aids::{Flashcard, QuizItem};
pub use study_set::StudySet;
pub use transcript::{Transcript, TranscriptFailure};
pub use waveform::{SAMPLE_RATE, Waveform};
