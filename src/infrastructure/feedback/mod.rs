mod file_feedback_log;

pub use file_feedback_log::FileFeedbackLog;
