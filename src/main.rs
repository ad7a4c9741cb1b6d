use clap::Parser;
use outfitx_api::RestApi;
use outfitx_catalog::CatalogStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// An embedding-based outfit recommender
#[derive(Parser, Debug)]
#[command(name = "outfitx")]
#[command(about = "Recommend coherent outfits from a tagged garment catalog", long_about = None)]
struct Args {
    /// Path to the tagged metadata JSON
    #[arg(short, long, default_value = "./processed/metadata.json")]
    metadata: PathBuf,

    /// Path to the embeddings JSON
    #[arg(short, long, default_value = "./processed/embeddings.json")]
    embeddings: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 8000)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting outfitx v{}", env!("CARGO_PKG_VERSION"));
    info!("Metadata: {:?}", args.metadata);
    info!("Embeddings: {:?}", args.embeddings);

    let store = Arc::new(CatalogStore::open(&args.metadata, &args.embeddings)?);
    let catalog = store.load();
    info!(
        "Catalog loaded: {} items, dimension {}",
        catalog.len(),
        catalog.dim()
    );
    drop(catalog);

    info!("HTTP API: http://localhost:{}/", args.http_port);
    let sys = actix_web::rt::System::new();
    sys.block_on(RestApi::start(store, args.http_port))?;

    info!("Shutting down...");
    Ok(())
}
