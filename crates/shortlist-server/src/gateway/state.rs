use std::sync::Arc;
use std::sync::atomic::AtomicU64;

use shortlist::classifier::TextClassifier;
use shortlist::ranking::ContentRanker;
use shortlist::segmentation::SegmentModel;
use shortlist::store::ContentStore;

/// Per-process request counters exposed by the stats endpoint.
#[derive(Debug, Default)]
pub struct GatewayStats {
    pub search_requests: AtomicU64,
    pub validate_requests: AtomicU64,
}

#[derive(Clone)]
pub struct HandlerState<S: ContentStore + Clone + Send + Sync + 'static> {
    pub ranker: Arc<ContentRanker<S>>,

    pub store: S,

    pub classifier: Arc<TextClassifier>,

    /// Absent when no segment-model artifact is configured.
    pub segmenter: Option<Arc<SegmentModel>>,

    pub stats: Arc<GatewayStats>,
}

impl<S> HandlerState<S>
where
    S: ContentStore + Clone + Send + Sync + 'static,
{
    pub fn new(
        ranker: Arc<ContentRanker<S>>,
        store: S,
        classifier: Arc<TextClassifier>,
        segmenter: Option<Arc<SegmentModel>>,
    ) -> Self {
        Self {
            ranker,
            store,
            classifier,
            segmenter,
            stats: Arc::new(GatewayStats::default()),
        }
    }
}
