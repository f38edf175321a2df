use crate::core::Result;
use crate::features::FeatureExtractor;

/// Emits the same features for every class and document.
#[derive(Debug, Clone, Default)]
pub struct FixedFeatures<F> {
    features: Vec<F>,
}

impl<F> FixedFeatures<F> {
    pub fn new(features: Vec<F>) -> Self {
        Self { features }
    }
}

impl<C, D: ?Sized, F: Clone + Send + Sync> FeatureExtractor<C, D> for FixedFeatures<F> {
    type Feature = F;

    fn extract_features(&self, _class: &C, _document: &D) -> Result<Vec<F>> {
        Ok(self.features.clone())
    }
}
