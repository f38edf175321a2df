use crate::classifiers::MultinomialNb;
use crate::core::TokensDocument;
use crate::features::{ClassExcludingTokenFeatures, FeatureExtractor, TokenFeatures};
use crate::models::ModelFile;
use crate::ui::types::choices::FeatureChoice;

pub type DynExtractor = Box<dyn FeatureExtractor<String, TokensDocument, Feature = String>>;

pub type CliClassifier = MultinomialNb<DynExtractor, ModelFile>;

pub fn build_extractor(choice: FeatureChoice) -> DynExtractor {
    match choice {
        FeatureChoice::Tokens => Box::new(TokenFeatures::new()),
        FeatureChoice::ExcludeClass => Box::new(ClassExcludingTokenFeatures::new()),
    }
}

pub fn build_classifier(choice: FeatureChoice, model: ModelFile) -> CliClassifier {
    MultinomialNb::new(build_extractor(choice), model)
}
