//! Test server harness.

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use shortlist::classifier::TextClassifier;
use shortlist::embedding::{MiniLmConfig, MiniLmEmbedder};
use shortlist::ranking::{ContentRanker, RankerConfig};
use shortlist::segmentation::{ClusterProfile, FeatureScaler, SegmentModel};
use shortlist::store::MemoryStore;
use shortlist::store::fixtures::sample_catalog;
use shortlist_server::gateway::{HandlerState, create_router_with_state};

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;

/// Embedding dimension used by test servers. Large enough that stub
/// embeddings of unrelated texts stay well below the similarity floor.
pub const TEST_EMBEDDING_DIM: usize = 64;

#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub port: u16,
    pub similarity_threshold: f32,
    pub with_segmenter: bool,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            port: 0,
            similarity_threshold: 0.5,
            with_segmenter: true,
        }
    }
}

pub struct TestServer {
    pub addr: SocketAddr,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Server failed to start within timeout")]
    Timeout,
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
    #[error("Server startup failed: {0}")]
    StartupFailed(String),
}

pub async fn wait_for_server_ready(
    addr: SocketAddr,
    timeout: Duration,
    interval: Duration,
) -> Result<(), ServerStartupError> {
    let start = std::time::Instant::now();

    loop {
        if start.elapsed() > timeout {
            return Err(ServerStartupError::Timeout);
        }

        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(_) => {
                tokio::time::sleep(interval).await;
            }
        }
    }
}

/// A two-cluster segment model sized for the sample RFM scale.
pub fn test_segment_model() -> SegmentModel {
    SegmentModel {
        scaler: FeatureScaler {
            mean: [50.0, 10.0, 500.0],
            std: [25.0, 5.0, 250.0],
        },
        clusters: vec![
            ClusterProfile {
                cluster_id: 0,
                segment_name: "Champions".to_string(),
                center: [-1.0, 1.0, 1.0],
                stats: BTreeMap::from([("avg_monetary".to_string(), 1200.0)]),
            },
            ClusterProfile {
                cluster_id: 1,
                segment_name: "Hibernating".to_string(),
                center: [1.5, -1.0, -1.0],
                stats: BTreeMap::new(),
            },
        ],
    }
}

/// Spawns a fully-mocked test server:
///
/// - **Embedder**: stub mode (deterministic, no model files)
/// - **Store**: in-memory, seeded from the sample catalog
/// - **Classifier**: mock variant
/// - **Segment model**: constructed inline (unless disabled)
pub async fn spawn_test_server(config: TestServerConfig) -> Result<TestServer, ServerStartupError> {
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    let embedder = Arc::new(
        MiniLmEmbedder::load(MiniLmConfig::stub().with_embedding_dim(TEST_EMBEDDING_DIM))
            .map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?,
    );

    let store = MemoryStore::new();
    for entry in sample_catalog() {
        let embedding = embedder
            .embed(&entry.embedding_text())
            .map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;
        store.insert(entry.into_item(embedding));
    }

    let ranker_config = RankerConfig::default()
        .with_embedding_dim(TEST_EMBEDDING_DIM)
        .with_threshold(config.similarity_threshold);
    let ranker = Arc::new(
        ContentRanker::new(embedder, store.clone(), ranker_config)
            .map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?,
    );

    let classifier = Arc::new(
        TextClassifier::from_settings(None, None)
            .map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?,
    );

    let segmenter = config.with_segmenter.then(|| Arc::new(test_segment_model()));

    let state = HandlerState::new(ranker, store, classifier, segmenter);
    let app = create_router_with_state(state);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    wait_for_server_ready(
        local_addr,
        Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS),
        Duration::from_millis(STARTUP_POLL_INTERVAL_MS),
    )
    .await?;

    Ok(TestServer {
        addr: local_addr,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}
