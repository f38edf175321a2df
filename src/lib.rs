//! Multinomial Naive Bayes class selection.
//!
//! [`MultinomialNb`](classifiers::MultinomialNb) scores a document against
//! each candidate class in log space and keeps the first class reaching the
//! maximum score. Feature extraction and probability estimation are injected
//! through [`FeatureExtractor`](features::FeatureExtractor) and
//! [`ProbabilisticModel`](models::ProbabilisticModel).

pub mod classifiers;
pub mod core;
pub mod features;
pub mod models;
pub mod ui;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
