use std::sync::Arc;

use crate::core::Result;

/// Read-only probability queries backing a Naive Bayes classifier.
///
/// Both queries must answer with a value in (0, 1]; the model owns whatever
/// smoothing is needed to keep unseen features away from zero. A model that
/// cannot answer for a class or feature reports
/// [`ClassifierError::Unscorable`](crate::core::ClassifierError::Unscorable).
pub trait ProbabilisticModel<C, F>: Send + Sync {
    fn prior(&self, class: &C) -> Result<f64>;

    fn conditional_probability(&self, feature: &F, class: &C) -> Result<f64>;
}

impl<C, F, M: ProbabilisticModel<C, F> + ?Sized> ProbabilisticModel<C, F> for &M {
    fn prior(&self, class: &C) -> Result<f64> {
        (**self).prior(class)
    }

    fn conditional_probability(&self, feature: &F, class: &C) -> Result<f64> {
        (**self).conditional_probability(feature, class)
    }
}

impl<C, F, M: ProbabilisticModel<C, F> + ?Sized> ProbabilisticModel<C, F> for Arc<M> {
    fn prior(&self, class: &C) -> Result<f64> {
        (**self).prior(class)
    }

    fn conditional_probability(&self, feature: &F, class: &C) -> Result<f64> {
        (**self).conditional_probability(feature, class)
    }
}
