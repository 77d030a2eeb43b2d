mod lecture_test;
mod study_set_test;
mod transcript_test;
mod waveform_test;
