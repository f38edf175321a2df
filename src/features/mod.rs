mod feature_extractor;
mod function_features;
mod token_features;

pub use feature_extractor::FeatureExtractor;
pub use function_features::{FeatureFn, FunctionFeatures};
pub use token_features::{ClassExcludingTokenFeatures, TokenFeatures};
