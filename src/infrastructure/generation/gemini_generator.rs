use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{GenerationError, NoteGenerator};
use crate::domain::{Flashcard, QuizItem};

const MAX_QUIZ_ITEMS: usize = 4;
const MAX_FLASHCARDS: usize = 6;

/// Remote generative backend speaking the Gemini `generateContent` wire
/// format. Prompts are fixed templates; replies are plain text, parsed
/// into Q/A pairs where the operation needs them.
pub struct GeminiNoteGenerator {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    max_output_tokens: u32,
}

impl GeminiNoteGenerator {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url
                .unwrap_or_else(|| "https://generativelanguage.googleapis.com".to_string()),
            model: model.unwrap_or_else(|| "gemini-2.0-flash".to_string()),
            max_output_tokens: 1024,
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: self.max_output_tokens,
                temperature: 0.0,
            },
        };

        tracing::debug!(model = %self.model, prompt_chars = prompt.len(), "Calling generation API");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(GenerationError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(format!("body: {}", e)))?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| GenerationError::InvalidResponse("no candidates".to_string()))?;

        Ok(text.trim().to_string())
    }
}

#[async_trait]
impl NoteGenerator for GeminiNoteGenerator {
    async fn summarize(&self, transcript: &str) -> Result<String, GenerationError> {
        let prompt = format!("Summarize the following lecture notes:\n{}", transcript);
        self.generate(&prompt).await
    }

    async fn quiz(&self, notes: &str) -> Result<Vec<QuizItem>, GenerationError> {
        let prompt = format!(
            "Generate a quiz with questions and answers based on these notes.\n\
             Format every pair as two lines, 'Q:' then 'A:'.\n{}",
            notes
        );
        let text = self.generate(&prompt).await?;

        let pairs = parse_qa_pairs(&text, MAX_QUIZ_ITEMS);
        if pairs.is_empty() {
            return Err(GenerationError::InvalidResponse(
                "no Q/A pairs in reply".to_string(),
            ));
        }

        Ok(pairs
            .into_iter()
            .map(|(q, a)| QuizItem::new(q, a))
            .collect())
    }

    async fn flashcards(&self, notes: &str) -> Result<Vec<Flashcard>, GenerationError> {
        let prompt = format!(
            "Generate flashcards with question-answer pairs based on these notes.\n\
             Format every card as two lines, 'Q:' then 'A:'.\n{}",
            notes
        );
        let text = self.generate(&prompt).await?;

        let pairs = parse_qa_pairs(&text, MAX_FLASHCARDS);
        if pairs.is_empty() {
            return Err(GenerationError::InvalidResponse(
                "no Q/A pairs in reply".to_string(),
            ));
        }

        Ok(pairs
            .into_iter()
            .map(|(front, back)| Flashcard::new(front, back))
            .collect())
    }
}

/// Collect consecutive `Q:`/`A:` line pairs, capped at `max_pairs`.
/// A `Q:` without a following `A:` is dropped.
pub fn parse_qa_pairs(text: &str, max_pairs: usize) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    let mut pending_question: Option<String> = None;

    for line in text.lines() {
        let line = line.trim().trim_start_matches(['-', '*', ' ']);

        if let Some(q) = strip_label(line, "Q") {
            pending_question = Some(q.to_string());
        } else if let Some(a) = strip_label(line, "A") {
            if let Some(question) = pending_question.take() {
                pairs.push((question, a.to_string()));
                if pairs.len() == max_pairs {
                    break;
                }
            }
        }
    }

    pairs
}

fn strip_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(label)?;
    // Accept "Q:", "Q1:", "Q 2:" style labels
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_digit() || c == ' ' || c == '.');
    let rest = rest.strip_prefix(':')?;
    let answer = rest.trim();
    (!answer.is_empty()).then_some(answer)
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}
