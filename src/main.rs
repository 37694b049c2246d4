use clap::Parser;
use faq_insight::app::router_from_config;
use faq_insight::config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("faq_insight=info,tower_http=info")),
        )
        .init();

    let config = Config::parse();
    tracing::debug!("Configuration: {:?}", config);

    let app = router_from_config(&config)?;

    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
