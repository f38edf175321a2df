use crate::core::{Result, TokensDocument};
use crate::features::FeatureExtractor;

/// Every token of the document is a feature, whatever the class.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenFeatures;

impl TokenFeatures {
    pub fn new() -> Self {
        Self
    }
}

impl<C> FeatureExtractor<C, TokensDocument> for TokenFeatures {
    type Feature = String;

    fn extract_features(&self, _class: &C, document: &TokensDocument) -> Result<Vec<String>> {
        Ok(document.tokens().to_vec())
    }
}

/// Tokens as features, minus any token equal to the class label itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassExcludingTokenFeatures;

impl ClassExcludingTokenFeatures {
    pub fn new() -> Self {
        Self
    }
}

impl<C: AsRef<str>> FeatureExtractor<C, TokensDocument> for ClassExcludingTokenFeatures {
    type Feature = String;

    fn extract_features(&self, class: &C, document: &TokensDocument) -> Result<Vec<String>> {
        let label = class.as_ref();
        Ok(document
            .tokens()
            .iter()
            .filter(|t| t.as_str() != label)
            .cloned()
            .collect())
    }
}
