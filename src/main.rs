//! TalentScout server entry point.
//!
//! Loads configuration, initializes tracing, wires adapters and serves the
//! dialogue API over HTTP.

use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use talent_scout::adapters::http::{app_router, DialogueHandlers};
use talent_scout::adapters::{
    FileSessionStore, InMemoryRecordStore, InMemorySessionStore, JsonFileRecordStore,
    LexiconSentimentAnalyzer, LibreTranslateConfig, LibreTranslateTranslator,
    PassthroughTranslator,
};
use talent_scout::application::{GetSessionHandler, ProcessMessageHandler, StartSessionHandler};
use talent_scout::config::{AppConfig, StorageBackend, TranslationProvider};
use talent_scout::domain::dialogue::{DialogueConfig, DialogueEngine};
use talent_scout::domain::questions::{QuestionBank, QuestionSelector};
use talent_scout::ports::{RecordStore, SessionStore, Translator};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let addr = config.server.socket_addr()?;
    let handlers = build_handlers(&config).await?;
    let app = app_router(handlers, config.server.request_timeout());

    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        storage = ?config.storage.backend,
        translation = ?config.translation.provider,
        "Starting TalentScout"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

async fn build_handlers(config: &AppConfig) -> Result<DialogueHandlers, BoxError> {
    let sessions: Arc<dyn SessionStore>;
    let records: Arc<dyn RecordStore>;
    match config.storage.backend {
        StorageBackend::File => {
            sessions = Arc::new(FileSessionStore::new(&config.storage.sessions_dir));
            records = Arc::new(JsonFileRecordStore::open(&config.storage.records_path).await?);
        }
        StorageBackend::Memory => {
            sessions = Arc::new(InMemorySessionStore::new());
            records = Arc::new(InMemoryRecordStore::new());
        }
    }

    let translator: Arc<dyn Translator> = match config.translation.provider {
        TranslationProvider::Passthrough => Arc::new(PassthroughTranslator::new()),
        TranslationProvider::LibreTranslate => {
            let endpoint = config.translation.endpoint.clone().unwrap_or_default();
            let lt_config = LibreTranslateConfig::new(endpoint)
                .with_secret_api_key(config.translation.api_key.clone())
                .with_timeout(config.translation.timeout());
            Arc::new(LibreTranslateTranslator::new(lt_config)?)
        }
    };

    let bank = Arc::new(QuestionBank::builtin());
    let limits = config.questions.limits();
    let selector = match config.questions.seed {
        Some(seed) => QuestionSelector::seeded(bank, limits, seed),
        None => QuestionSelector::from_entropy(bank, limits),
    };

    let engine = DialogueEngine::new(DialogueConfig {
        allow_stack_resubmission: config.features.allow_stack_resubmission,
        ..Default::default()
    });

    let mut process = ProcessMessageHandler::new(
        engine,
        selector,
        Arc::clone(&sessions),
        records,
        Arc::clone(&translator),
    );
    if config.features.enable_sentiment {
        process = process.with_sentiment(Arc::new(LexiconSentimentAnalyzer::new()));
    }
    process = process.with_reply_decoration(config.features.decorate_replies);

    Ok(DialogueHandlers::new(
        Arc::new(StartSessionHandler::new(Arc::clone(&sessions), translator)),
        Arc::new(process),
        Arc::new(GetSessionHandler::new(sessions)),
    )
    .with_verbose_errors(config.features.verbose_errors))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
