pub mod bayes;
pub mod classifier;

pub use bayes::MultinomialNb;
pub use classifier::Classifier;
