use axum::response::{Html, IntoResponse};

/// The single upload form page; everything else goes through the JSON API.
pub async fn index_handler() -> impl IntoResponse {
    Html(INDEX_PAGE)
}

const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Lecture Voice-to-Notes</title>
<style>
  body { font-family: sans-serif; max-width: 44rem; margin: 2rem auto; padding: 0 1rem; }
  section { margin-bottom: 1.5rem; }
  textarea { width: 100%; }
  .banner { color: #8a6d3b; background: #fcf8e3; padding: 0.5rem; }
  .error { color: #a94442; background: #f2dede; padding: 0.5rem; }
</style>
</head>
<body>
<h1>Lecture Voice-to-Notes Generator</h1>
<p>Upload your lecture audio recording (wav, mp3, m4a, ogg), transcribe it,
summarize notes, and generate quizzes and flashcards.</p>

<section>
  <form id="upload-form">
    <input type="file" name="file" accept=".wav,.mp3,.m4a,.ogg" required>
    <button type="submit">Process Audio</button>
  </form>
</section>

<section id="results" hidden>
  <h2>Lecture Transcript</h2>
  <pre id="transcript"></pre>
  <h2>Summarized Study Notes</h2>
  <pre id="notes"></pre>
  <button id="quiz-btn">Generate Quiz</button>
  <button id="cards-btn">Generate Flashcards</button>
  <div id="quiz"></div>
  <div id="flashcards"></div>
</section>

<section>
  <h2>Feedback and Suggestions</h2>
  <textarea id="feedback" rows="3" placeholder="Provide any feedback here"></textarea>
  <button id="feedback-btn">Submit Feedback</button>
  <p id="feedback-status"></p>
</section>

<script>
let sessionId = null;

document.getElementById('upload-form').addEventListener('submit', async (e) => {
  e.preventDefault();
  const data = new FormData(e.target);
  const res = await fetch('/api/v1/lectures', { method: 'POST', body: data });
  const body = await res.json();
  const results = document.getElementById('results');
  if (!res.ok) {
    results.hidden = false;
    document.getElementById('transcript').textContent = body.error;
    return;
  }
  sessionId = body.session_id;
  results.hidden = false;
  document.getElementById('transcript').textContent =
    body.transcript ?? body.transcript_banner;
  document.getElementById('notes').textContent =
    body.notes ?? body.notes_banner ?? '';
  document.getElementById('quiz').textContent = '';
  document.getElementById('flashcards').textContent = '';
});

document.getElementById('quiz-btn').addEventListener('click', async () => {
  if (!sessionId) return;
  const res = await fetch(`/api/v1/sessions/${sessionId}/quiz`, { method: 'POST' });
  const body = await res.json();
  const el = document.getElementById('quiz');
  el.textContent = res.ok
    ? body.map((q, i) => `Q${i + 1}: ${q.question}\nA${i + 1}: ${q.answer}`).join('\n\n')
    : body.error;
});

document.getElementById('cards-btn').addEventListener('click', async () => {
  if (!sessionId) return;
  const res = await fetch(`/api/v1/sessions/${sessionId}/flashcards`, { method: 'POST' });
  const body = await res.json();
  const el = document.getElementById('flashcards');
  el.textContent = res.ok
    ? body.map((c) => `${c.front} -> ${c.back}`).join('\n')
    : body.error;
});

document.getElementById('feedback-btn').addEventListener('click', async () => {
  const feedback = document.getElementById('feedback').value;
  const res = await fetch('/api/v1/feedback', {
    method: 'POST',
    headers: { 'content-type': 'application/json' },
    body: JSON.stringify({ feedback }),
  });
  const body = await res.json();
  document.getElementById('feedback-status').textContent =
    res.ok ? body.message : body.error;
});
</script>
</body>
</html>
"#;
