use crate::core::Result;
use crate::models::ProbabilisticModel;
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

#[derive(Clone)]
pub struct CountingModelHandle {
    priors: Arc<AtomicU64>,
    conditionals: Arc<AtomicU64>,
}

impl CountingModelHandle {
    pub fn prior_calls(&self) -> u64 {
        self.priors.load(Ordering::Relaxed)
    }

    pub fn conditional_calls(&self) -> u64 {
        self.conditionals.load(Ordering::Relaxed)
    }
}

/// Forwards to an inner model while counting every query.
pub struct CountingModel<M> {
    inner: M,
    priors: Arc<AtomicU64>,
    conditionals: Arc<AtomicU64>,
}

impl<M> CountingModel<M> {
    pub fn new(inner: M) -> (Self, CountingModelHandle) {
        let priors = Arc::new(AtomicU64::new(0));
        let conditionals = Arc::new(AtomicU64::new(0));
        (
            Self {
                inner,
                priors: priors.clone(),
                conditionals: conditionals.clone(),
            },
            CountingModelHandle {
                priors,
                conditionals,
            },
        )
    }
}

impl<C, F, M: ProbabilisticModel<C, F>> ProbabilisticModel<C, F> for CountingModel<M> {
    fn prior(&self, class: &C) -> Result<f64> {
        self.priors.fetch_add(1, Ordering::Relaxed);
        self.inner.prior(class)
    }

    fn conditional_probability(&self, feature: &F, class: &C) -> Result<f64> {
        self.conditionals.fetch_add(1, Ordering::Relaxed);
        self.inner.conditional_probability(feature, class)
    }
}
