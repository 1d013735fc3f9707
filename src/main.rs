use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use discorgi::application::catalog::{LookupCache, Refresher};
use discorgi::application::commands::{builtin_registry, CommandDeps};
use discorgi::application::errors::BotError;
use discorgi::application::messaging::Dispatcher;
use discorgi::application::services::MessageService;
use discorgi::infrastructure::adapters::ConsoleAdapter;
use discorgi::infrastructure::config::{Config, Credentials};
use discorgi::infrastructure::lookup::{GiphySearch, HttpClient, SteamCatalog, UrbanDictionary};
use discorgi::infrastructure::runtime::run_to_completion;

#[derive(Parser)]
#[command(name = "discorgi")]
#[command(about = "A corgi that fetches GIFs, games and definitions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Steam Web API key (overrides config)
    #[arg(long)]
    steam_token: Option<String>,

    /// Giphy API key (overrides config)
    #[arg(long)]
    giphy_token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            let config = load_config(&cli.config, cli.steam_token, cli.giphy_token);
            if let Err(e) = run_bot(config) {
                tracing::error!("{}", e);
                std::process::exit(1);
            }
        }
        Commands::Version => {
            println!("discorgi v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => match Config::default().to_yaml() {
            Ok(yaml) => {
                println!("{}", yaml);
                println!("\nSave this to config.yaml and adjust as needed.");
            }
            Err(e) => tracing::error!("Failed to render config: {}", e),
        },
    }
}

fn load_config(path: &str, steam_token: Option<String>, giphy_token: Option<String>) -> Config {
    let mut config = if std::path::Path::new(path).exists() {
        let mut config = Config::load(path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        });
        config.apply_env();
        config
    } else {
        Config::load_env()
    };

    if steam_token.is_some() {
        config.credentials.steam_token = steam_token;
    }
    if giphy_token.is_some() {
        config.credentials.giphy_token = giphy_token;
    }
    config
}

fn run_bot(config: Config) -> Result<(), BotError> {
    let credentials = config.validate()?;

    run_to_completion(serve(config, credentials))?
}

async fn serve(config: Config, credentials: Credentials) -> Result<(), BotError> {
    let http = HttpClient::new(config.http_timeout())?;

    // Catalog cache, loaded once now and then refreshed in the background
    let cache = Arc::new(LookupCache::new());
    let steam = Arc::new(SteamCatalog::new(credentials.steam_token, http.clone()));
    let refresher = Refresher::new(steam, Arc::clone(&cache))
        .with_interval(config.refresh_interval())
        .with_timeout(config.http_timeout());

    match refresher.refresh_once().await {
        Ok(count) => tracing::info!("Fetched {} steam games", count),
        Err(e) => tracing::warn!(
            "Initial steam catalog fetch failed, retrying in {:?}: {}",
            refresher.interval(),
            e
        ),
    }

    let cancel = CancellationToken::new();
    let refresher_handle = refresher.spawn(cancel.child_token());

    let registry = builtin_registry(CommandDeps {
        catalog: cache,
        media: Arc::new(GiphySearch::new(credentials.giphy_token, http.clone())),
        definitions: Arc::new(UrbanDictionary::new(http)),
        timeout: config.http_timeout(),
    });
    tracing::info!("Registered {} commands", registry.len());
    let dispatcher = Arc::new(Dispatcher::new(&config.bot.address, registry));

    let bot = Arc::new(ConsoleAdapter::new(&config.bot.name));
    let service = MessageService::new(bot, dispatcher);

    // Wait for SIGINT to end program
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            return;
        }
        tracing::info!("Exiting...");
        shutdown.cancel();
    });

    let result = service.run(cancel.clone()).await;

    cancel.cancel();
    if let Err(e) = refresher_handle.await {
        tracing::error!("Catalog refresher task failed: {}", e);
    }
    result
}
