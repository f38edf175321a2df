use crate::core::Result;

/// Turns a document into the ordered features it exhibits under `class`.
///
/// Extraction is class-conditioned because some strategies emit a different
/// feature set per class. Implementations must be deterministic for fixed
/// inputs, otherwise classification is not reproducible.
pub trait FeatureExtractor<C, D: ?Sized>: Send + Sync {
    type Feature;

    fn extract_features(&self, class: &C, document: &D) -> Result<Vec<Self::Feature>>;
}

impl<C, D: ?Sized, E: FeatureExtractor<C, D> + ?Sized> FeatureExtractor<C, D> for &E {
    type Feature = E::Feature;

    fn extract_features(&self, class: &C, document: &D) -> Result<Vec<Self::Feature>> {
        (**self).extract_features(class, document)
    }
}

impl<C, D: ?Sized, E: FeatureExtractor<C, D> + ?Sized> FeatureExtractor<C, D> for Box<E> {
    type Feature = E::Feature;

    fn extract_features(&self, class: &C, document: &D) -> Result<Vec<Self::Feature>> {
        (**self).extract_features(class, document)
    }
}
