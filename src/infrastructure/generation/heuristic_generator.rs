use async_trait::async_trait;
use unicode_segmentation::UnicodeSegmentation;

use crate::application::ports::{GenerationError, NoteGenerator};
use crate::domain::{Flashcard, QuizItem};
use crate::infrastructure::text::{split_sentences, truncate_chars};

/// Minimum transcript length before sentence ranking is attempted.
const MIN_INPUT_CHARS: usize = 30;
/// Fragments shorter than this never make it into the notes.
const MIN_NOTE_FRAGMENT_CHARS: usize = 20;
/// How many top-ranked fragments the notes keep.
const TOP_FRAGMENTS: usize = 3;
/// Character cap for the notes body.
const MAX_NOTES_CHARS: usize = 300;

/// Quiz/flashcard fragments must be longer than this.
const MIN_AID_FRAGMENT_CHARS: usize = 15;
const MAX_QUIZ_ITEMS: usize = 4;
const QUIZ_EXCERPT_CHARS: usize = 70;
const QUIZ_ANSWER_CHARS: usize = 150;

const MAX_FLASHCARDS: usize = 6;
const FRONT_WORDS: usize = 3;
const PHRASE_BACK_WORDS: usize = 8;
const ONE_WORD_MIN_CHARS: usize = 5;
const FALLBACK_TOKEN: &str = "KEY";

pub const TOO_SHORT_NOTES: &str = "Transcript too short to summarize.";

/// How flashcard backs are composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashcardStyle {
    /// Back is the words following the front window.
    Phrase,
    /// Back is a single upper-cased key term.
    OneWord,
}

/// Offline backend: ranks sentences by length for notes and slices
/// sentence/word windows into question/answer pairs. Deterministic, never
/// touches the network, never fails.
pub struct HeuristicNoteGenerator {
    flashcard_style: FlashcardStyle,
}

impl HeuristicNoteGenerator {
    pub fn new(flashcard_style: FlashcardStyle) -> Self {
        Self { flashcard_style }
    }
}

impl Default for HeuristicNoteGenerator {
    fn default() -> Self {
        Self::new(FlashcardStyle::OneWord)
    }
}

#[async_trait]
impl NoteGenerator for HeuristicNoteGenerator {
    async fn summarize(&self, transcript: &str) -> Result<String, GenerationError> {
        Ok(extract_notes(transcript))
    }

    async fn quiz(&self, notes: &str) -> Result<Vec<QuizItem>, GenerationError> {
        Ok(compose_quiz(notes))
    }

    async fn flashcards(&self, notes: &str) -> Result<Vec<Flashcard>, GenerationError> {
        Ok(compose_flashcards(notes, self.flashcard_style))
    }
}

/// Rank sentence fragments by length and keep the longest three.
pub fn extract_notes(transcript: &str) -> String {
    if transcript.chars().count() < MIN_INPUT_CHARS {
        return TOO_SHORT_NOTES.to_string();
    }

    let mut fragments: Vec<&str> = split_sentences(transcript)
        .into_iter()
        .filter(|fragment| fragment.chars().count() >= MIN_NOTE_FRAGMENT_CHARS)
        .collect();

    // Stable sort: ties keep document order
    fragments.sort_by_key(|fragment| std::cmp::Reverse(fragment.chars().count()));
    fragments.truncate(TOP_FRAGMENTS);

    if fragments.is_empty() {
        // Nothing qualified; fall back to the raw text under the same cap
        let body = truncate_chars(transcript, MAX_NOTES_CHARS);
        return if body.len() < transcript.len() {
            format!("{}...", body)
        } else {
            body.to_string()
        };
    }

    let joined = fragments.join(". ");
    if joined.chars().count() > MAX_NOTES_CHARS {
        format!("{}...", truncate_chars(&joined, MAX_NOTES_CHARS))
    } else {
        format!("{}.", joined)
    }
}

/// Template question/answer pairs from the first few qualifying fragments.
pub fn compose_quiz(notes: &str) -> Vec<QuizItem> {
    aid_fragments(notes)
        .into_iter()
        .take(MAX_QUIZ_ITEMS)
        .map(|fragment| {
            let excerpt = truncate_chars(fragment, QUIZ_EXCERPT_CHARS);
            QuizItem::new(
                format!("What is the key idea in: '{}'?", excerpt),
                truncate_chars(fragment, QUIZ_ANSWER_CHARS).to_string(),
            )
        })
        .collect()
}

/// Fixed-window word slicing: fronts are the first three words, backs
/// depend on the configured style.
pub fn compose_flashcards(notes: &str, style: FlashcardStyle) -> Vec<Flashcard> {
    aid_fragments(notes)
        .into_iter()
        .filter_map(|fragment| {
            let words: Vec<&str> = fragment.unicode_words().collect();
            if words.is_empty() {
                return None;
            }

            let front_len = words.len().min(FRONT_WORDS);
            let front = format!("{} …", words[..front_len].join(" "));
            let rest = &words[front_len..];

            let back = match style {
                FlashcardStyle::Phrase => phrase_back(&words, rest),
                FlashcardStyle::OneWord => one_word_back(&words, rest),
            };

            Some(Flashcard::new(front, back))
        })
        .take(MAX_FLASHCARDS)
        .collect()
}

fn phrase_back(words: &[&str], rest: &[&str]) -> String {
    if rest.is_empty() {
        // Too few words to continue the sentence; answer with its last word
        return (*words.last().unwrap_or(&FALLBACK_TOKEN)).to_string();
    }
    rest[..rest.len().min(PHRASE_BACK_WORDS)].join(" ")
}

fn one_word_back(words: &[&str], rest: &[&str]) -> String {
    let term = rest
        .iter()
        .find(|word| word.chars().count() >= ONE_WORD_MIN_CHARS)
        .or_else(|| words.last())
        .copied()
        .unwrap_or(FALLBACK_TOKEN);
    term.to_uppercase()
}

fn aid_fragments(notes: &str) -> Vec<&str> {
    split_sentences(notes)
        .into_iter()
        .filter(|fragment| fragment.chars().count() > MIN_AID_FRAGMENT_CHARS)
        .collect()
}
