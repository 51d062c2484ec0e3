//! wordweaved: the WordWeave HTTP daemon.
//!
//! Serves poem generation and theme analysis over HTTP.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use wordweave::cache::CacheGateway;
use wordweave::providers::AnthropicClient;
use wordweave::server::config::{API_KEY_ENV, Config, Secrets};
use wordweave::{WordweaveError, WordweaveService};

/// WordWeave daemon: poem generation and visual theme analysis.
#[derive(Parser)]
#[command(name = "wordweaved")]
#[command(version = wordweave::PKG_VERSION)]
#[command(about = "WordWeave poem generation daemon")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,axum=warn,tower_http=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?;
    let secrets = Secrets::load()?;

    let service = build_service(&config, &secrets)?;

    let addr: SocketAddr = config
        .server
        .address
        .parse()
        .map_err(|e| WordweaveError::Configuration(format!("Invalid address: {e}")))?;

    let build = wordweave::build_info();
    info!(
        version = %build,
        built_at = build.built_at.unwrap_or("unknown"),
        model = service.model_id(),
        %addr,
        "wordweaved starting"
    );

    let app = wordweave::server::router(Arc::new(service), config.server.limits.max_body_bytes);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build a [`WordweaveService`] from configuration.
fn build_service(config: &Config, secrets: &Secrets) -> Result<WordweaveService, WordweaveError> {
    let api_key = secrets.api_key().unwrap_or_else(|| {
        warn!("no API key in secrets.toml or {API_KEY_ENV}; model calls will be rejected");
        String::new()
    });

    let model = AnthropicClient::with_base_url(api_key, &config.model.id, &config.model.base_url)?;

    WordweaveService::builder()
        .model(Arc::new(model))
        .cache(CacheGateway::in_memory(config.cache_config()))
        .retry(config.retry_config())
        .model_timeout(config.model_timeout())
        .policy(config.policy)
        .generation_options(config.generation_options())
        .analysis_options(config.analysis_options())
        .build()
}
