use shakesearch::config::ServerConfig;
use shakesearch::corpus::Corpus;
use shakesearch::search::handlers::router;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = ServerConfig::from_env()?.with_args(&args)?;

    // 1. Corpus (parsed and indexed once, read-only afterwards):
    tracing::info!(
        "Loading titles from {} and corpus from {}",
        config.titles_path.display(),
        config.corpus_path.display()
    );
    let corpus = Corpus::load(&config.titles_path, &config.corpus_path).await?;
    tracing::info!("Loaded {} works", corpus.works().len());

    // 2. HTTP Router:
    let app = router(Arc::new(corpus), &config.static_dir);

    // 3. Start HTTP server:
    let bind_addr = config.bind_addr();
    tracing::info!("Listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
