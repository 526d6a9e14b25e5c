//! library-admin - terminal administration for the library API

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_admin::{
    client::ResourceClient,
    config::{AppConfig, LoggingConfig},
    console::{run_shell, ConsolePrompt},
    controller::ResourceController,
    resources::{Authors, Books, BorrowedBooks, Categories, Resource, Users},
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ResourceKind {
    Authors,
    Books,
    BorrowedBooks,
    Categories,
    Users,
}

#[derive(Parser, Debug)]
#[command(name = "library-admin", version, about = "Manage the records of the library API")]
struct Cli {
    /// Resource to manage
    #[arg(value_enum)]
    resource: ResourceKind,

    /// Extra configuration file layered over config/default.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    init_tracing(&config.logging);
    tracing::info!("Starting library-admin v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Library API at {}", config.api.base_url);

    let http = reqwest::Client::builder().build()?;

    match cli.resource {
        ResourceKind::Authors => manage::<Authors>(http, &config).await,
        ResourceKind::Books => manage::<Books>(http, &config).await,
        ResourceKind::BorrowedBooks => manage::<BorrowedBooks>(http, &config).await,
        ResourceKind::Categories => manage::<Categories>(http, &config).await,
        ResourceKind::Users => manage::<Users>(http, &config).await,
    }
}

async fn manage<R: Resource>(http: reqwest::Client, config: &AppConfig) -> anyhow::Result<()> {
    let client = ResourceClient::<R>::new(http, config);
    tracing::info!("Managing {} at {}", R::LABELS.plural, client.base_url());
    let mut controller = ResourceController::new(client, ConsolePrompt);
    run_shell(&mut controller, BufReader::new(tokio::io::stdin())).await?;
    Ok(())
}

/// Logs go to stderr so they stay out of the table output
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_admin={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
