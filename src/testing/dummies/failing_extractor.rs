use anyhow::anyhow;

use crate::core::Result;
use crate::features::FeatureExtractor;

pub const FAILING_EXTRACTOR_MESSAGE: &str = "malformed document";

#[derive(Debug, Default)]
pub struct FailingExtractor;

impl<C, D: ?Sized> FeatureExtractor<C, D> for FailingExtractor {
    type Feature = String;

    fn extract_features(&self, _class: &C, _document: &D) -> Result<Vec<String>> {
        Err(anyhow!(FAILING_EXTRACTOR_MESSAGE).into())
    }
}
