//! Shortlist HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use shortlist::classifier::TextClassifier;
use shortlist::config::Config;
use shortlist::embedding::{MiniLmConfig, MiniLmEmbedder};
use shortlist::ranking::{ContentRanker, RankerConfig};
use shortlist::segmentation::SegmentModel;
use shortlist::store::{MemoryStore, load_catalog};
use shortlist_server::gateway::{HandlerState, create_router_with_state};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!(
        r#"
███████╗██╗  ██╗ ██████╗ ██████╗ ████████╗██╗     ██╗███████╗████████╗
██╔════╝██║  ██║██╔═══██╗██╔══██╗╚══██╔══╝██║     ██║██╔════╝╚══██╔══╝
███████╗███████║██║   ██║██████╔╝   ██║   ██║     ██║███████╗   ██║
╚════██║██╔══██║██║   ██║██╔══██╗   ██║   ██║     ██║╚════██║   ██║
███████║██║  ██║╚██████╔╝██║  ██║   ██║   ███████╗██║███████║   ██║
╚══════╝╚═╝  ╚═╝ ╚═════╝ ╚═╝  ╚═╝   ╚═╝   ╚══════╝╚═╝╚══════╝   ╚═╝

        RANK. FILTER. SHIP.
                                        AGPL-3.0
"#
    );

    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        embedding_dim = config.embedding_dim,
        top_k = config.top_k,
        similarity_threshold = config.similarity_threshold,
        "Shortlist starting"
    );

    let minilm_config = if let Some(path) = &config.model_path {
        MiniLmConfig::new(path.clone()).with_embedding_dim(config.embedding_dim)
    } else {
        tracing::warn!("No SHORTLIST_MODEL_PATH configured, running embedder in stub mode");
        MiniLmConfig::stub().with_embedding_dim(config.embedding_dim)
    };
    let embedder = Arc::new(MiniLmEmbedder::load(minilm_config)?);

    let store = MemoryStore::new();
    if let Some(path) = &config.content_path {
        let entries = load_catalog(path)?;
        tracing::info!(path = %path.display(), entries = entries.len(), "Seeding content catalog");
        for entry in entries {
            let embedding = embedder.embed(&entry.embedding_text())?;
            store.insert(entry.into_item(embedding));
        }
    } else {
        tracing::warn!(
            "No SHORTLIST_CONTENT_PATH configured, starting with an empty content store"
        );
    }

    let ranker_config = RankerConfig::default()
        .with_embedding_dim(config.embedding_dim)
        .with_top_k_default(config.top_k)
        .with_threshold(config.similarity_threshold);
    let ranker = Arc::new(ContentRanker::new(
        embedder,
        store.clone(),
        ranker_config,
    )?);

    let classifier = Arc::new(TextClassifier::from_settings(
        config.safety_endpoint.as_deref(),
        config.safety_key.as_deref(),
    )?);

    let segmenter = match &config.segment_model_path {
        Some(path) => {
            let model = SegmentModel::from_json_file(path)?;
            tracing::info!(
                path = %path.display(),
                clusters = model.cluster_count(),
                "Segment model loaded"
            );
            Some(Arc::new(model))
        }
        None => {
            tracing::warn!(
                "No SHORTLIST_SEGMENT_MODEL_PATH configured, segment prediction disabled"
            );
            None
        }
    };

    let state = HandlerState::new(ranker, store, classifier, segmenter);
    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shortlist shutdown complete");
    Ok(())
}

fn run_health_check() -> i32 {
    let port = std::env::var("SHORTLIST_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build runtime");

    rt.block_on(async {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
            .expect("failed to build client");

        match client.get(&url).send().await {
            Ok(res) if res.status().is_success() => 0,
            _ => 1,
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
