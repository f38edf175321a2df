use crate::core::Result;
use crate::features::FeatureExtractor;
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

pub struct ExtractSpyHandle(Arc<AtomicU64>);

impl ExtractSpyHandle {
    pub fn count(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Forwards to an inner extractor, counting calls.
pub struct CountingExtractor<E> {
    inner: E,
    count: Arc<AtomicU64>,
}

impl<E> CountingExtractor<E> {
    pub fn new(inner: E) -> (Self, ExtractSpyHandle) {
        let counter = Arc::new(AtomicU64::new(0));
        (
            Self {
                inner,
                count: counter.clone(),
            },
            ExtractSpyHandle(counter),
        )
    }
}

impl<C, D: ?Sized, E: FeatureExtractor<C, D>> FeatureExtractor<C, D> for CountingExtractor<E> {
    type Feature = E::Feature;

    fn extract_features(&self, class: &C, document: &D) -> Result<Vec<Self::Feature>> {
        self.count.fetch_add(1, Ordering::Relaxed);
        self.inner.extract_features(class, document)
    }
}
