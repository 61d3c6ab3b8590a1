use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use alarm_console::{Args, Command, execute};
use application::SecurityService;
use domain::SecurityRepository;
use infrastructure::{
    ControllerConfig, FakeImageClassifier, InMemorySecurityRepository, RepositoryBackend,
    SqliteSecurityRepository, TracingEventPublisher,
};

/// Create the directory holding a file-backed SQLite database, if any
fn ensure_database_dir(database_url: &str) -> Result<()> {
    let options = SqliteConnectOptions::from_str(database_url)?;
    if let Some(parent) = options
        .get_filename()
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

async fn run() -> Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,alarm_console=debug,application=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    // 1. Load Configuration
    let config = ControllerConfig::load(&args.config_dir)?;
    config.validate()?;
    info!(
        backend = ?config.repository.backend,
        threshold = config.image.confidence_threshold,
        "✅ Configuration loaded"
    );

    // 2. Repository
    let mut sqlite = None;
    let repository: Arc<dyn SecurityRepository> = match config.repository.backend {
        RepositoryBackend::Memory => Arc::new(InMemorySecurityRepository::new()),
        RepositoryBackend::Sqlite => {
            ensure_database_dir(&config.repository.database_url)?;
            info!("💾 Connecting to Storage: {}", config.repository.database_url);
            let repo =
                Arc::new(SqliteSecurityRepository::connect(&config.repository.database_url).await?);
            sqlite = Some(repo.clone());
            repo
        }
    };

    // 3. Image classifier
    let score = match &args.command {
        Command::Scan { score: Some(score), .. } => *score,
        _ => config.image.default_score,
    };
    let classifier = Arc::new(FakeImageClassifier::new(score));

    // 4. Rule engine
    let service = SecurityService::new(repository, classifier)
        .with_confidence_threshold(config.image.confidence_threshold)?
        .with_publisher(Arc::new(TracingEventPublisher));

    let mut stdout = std::io::stdout().lock();
    let result = execute(&service, args.command, &mut stdout).await;

    if let Some(repo) = sqlite {
        repo.close().await;
    }
    result
}

fn main() {
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("❌ Failed to start runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = rt.block_on(run()) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
