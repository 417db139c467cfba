use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::Context;
use config::Environment as EnvironmentSource;
use config::{Config, File};
use tokio::net::TcpListener;

use notedown::application::ports::{MarkdownRenderer, NoteRepository};
use notedown::application::services::{GrammarCheckService, NoteService};
use notedown::infrastructure::cache::CacheFactory;
use notedown::infrastructure::grammar::CheckerFactory;
use notedown::infrastructure::markdown::{MarkdownContentProcessor, PulldownRenderer};
use notedown::infrastructure::observability::{TracingConfig, init_tracing};
use notedown::infrastructure::persistence::{PgNoteRepository, create_pool};
use notedown::presentation::config::Environment;
use notedown::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let configuration = Config::builder()
        .add_source(
            File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
        )
        .add_source(EnvironmentSource::with_prefix("APP").separator("__"))
        .build()
        .context("Failed to build configuration")?;

    let settings: Settings = configuration
        .try_deserialize()
        .context("Failed to parse configuration")?;

    init_tracing(
        TracingConfig::new(environment, &settings.logging),
        settings.server.port,
    );

    let renderer: Arc<dyn MarkdownRenderer> = Arc::new(PulldownRenderer::new());
    let content_processor = Arc::new(
        MarkdownContentProcessor::new(&settings.validation, Arc::clone(&renderer))
            .context("Invalid validation settings")?,
    );

    // An unreachable cache backend at boot is a configuration error, so
    // this is allowed to fail startup.
    let cache = CacheFactory::create(&settings.cache)
        .await
        .context("Failed to initialize cache backend")?;
    let checker = CheckerFactory::create(&settings.grammar);

    let pool = create_pool(&settings.database.url, settings.database.max_connections).await?;
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;
    let note_repository: Arc<dyn NoteRepository> = Arc::new(PgNoteRepository::new(pool));

    let state = AppState {
        grammar_service: Arc::new(GrammarCheckService::new(checker, cache)),
        note_service: Arc::new(NoteService::new(note_repository, renderer)),
        content_processor,
        max_upload_bytes: settings.validation.max_file_size_mb * 1024 * 1024,
    };

    let router = create_router(state);

    let host: IpAddr = settings
        .server
        .host
        .parse()
        .context("Invalid server.host address")?;
    let addr = SocketAddr::from((host, settings.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
