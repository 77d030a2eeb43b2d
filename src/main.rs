use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use lectern::application::ports::{NoteGenerator, SpeechRecognizer};
use lectern::application::services::{LectureService, SessionRegistry};
use lectern::infrastructure::audio::SymphoniaAudioDecoder;
use lectern::infrastructure::feedback::FileFeedbackLog;
use lectern::infrastructure::generation::{
    FlashcardStyle, GeneratorProvider, NoteGeneratorFactory,
};
use lectern::infrastructure::observability::{TracingConfig, init_tracing};
use lectern::infrastructure::recognition::{RecognizerProvider, SpeechRecognizerFactory};
use lectern::presentation::config::{
    FlashcardStyleSetting, GeneratorProviderSetting, RecognizerProviderSetting,
};
use lectern::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig {
            environment: environment.to_string(),
            level: settings.logging.level.clone(),
            json_format: settings.logging.enable_json,
        },
        settings.server.port,
    );

    let decoder = Arc::new(SymphoniaAudioDecoder);

    let recognizer: Arc<dyn SpeechRecognizer> = SpeechRecognizerFactory::create(
        match settings.recognition.provider {
            RecognizerProviderSetting::Remote => RecognizerProvider::Remote,
            RecognizerProviderSetting::Mock => RecognizerProvider::Mock,
        },
        settings.recognition.api_key.clone(),
        settings.recognition.base_url.clone(),
        settings.recognition.model.clone(),
        settings.recognition.language.clone(),
    )?;

    let generator: Arc<dyn NoteGenerator> = NoteGeneratorFactory::create(
        match settings.generation.provider {
            GeneratorProviderSetting::Remote => GeneratorProvider::Remote,
            GeneratorProviderSetting::Heuristic => GeneratorProvider::Heuristic,
            GeneratorProviderSetting::Mock => GeneratorProvider::Mock,
        },
        settings.generation.api_key.clone(),
        settings.generation.base_url.clone(),
        settings.generation.model.clone(),
        match settings.generation.flashcard_style {
            FlashcardStyleSetting::Phrase => FlashcardStyle::Phrase,
            FlashcardStyleSetting::Oneword => FlashcardStyle::OneWord,
        },
    )?;

    let lecture_service = Arc::new(LectureService::new(
        decoder,
        recognizer,
        generator,
        settings.recognition.max_audio_seconds,
        settings.generation.min_summary_chars,
    ));

    let feedback_sink = Arc::new(FileFeedbackLog::new(PathBuf::from(
        &settings.feedback.log_path,
    )));

    let state = AppState {
        lecture_service,
        sessions: Arc::new(SessionRegistry::new()),
        feedback_sink,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
