use std::fmt::Debug;

use tracing::{debug, trace};

use crate::classifiers::classifier::Classifier;
use crate::core::{ClassifierError, ProbabilityTerm, Result};
use crate::features::FeatureExtractor;
use crate::models::ProbabilisticModel;

/// Multinomial Naive Bayes over an injected feature extractor and model.
///
/// Scores are log-likelihoods: the log-prior plus the log-conditional of
/// every extracted feature, summed in extraction order. Selection keeps the
/// first class reaching the maximum score.
#[derive(Debug, Clone)]
pub struct MultinomialNb<E, M> {
    extractor: E,
    model: M,
}

impl<E, M> MultinomialNb<E, M> {
    pub fn new(extractor: E, model: M) -> Self {
        Self { extractor, model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Log-likelihood of `document` under `class`.
    pub fn score<C, D>(&self, class: &C, document: &D) -> Result<f64>
    where
        C: Debug,
        D: ?Sized,
        E: FeatureExtractor<C, D>,
        E::Feature: Debug,
        M: ProbabilisticModel<C, E::Feature>,
    {
        let mut score = log_probability(self.model.prior(class)?, class, || {
            ProbabilityTerm::Prior
        })?;

        let features = self.extractor.extract_features(class, document)?;
        for feature in &features {
            let p = self.model.conditional_probability(feature, class)?;
            score += log_probability(p, class, || ProbabilityTerm::Conditional {
                feature: format!("{feature:?}"),
            })?;
            trace!(class = ?class, feature = ?feature, p, "feature term");
        }

        debug!(class = ?class, features = features.len(), score, "scored class");
        Ok(score)
    }

    /// Every `(class, score)` pair, in the order of `classes`.
    pub fn scores<C, D>(&self, classes: &[C], document: &D) -> Result<Vec<(C, f64)>>
    where
        C: Clone + Debug,
        D: ?Sized,
        E: FeatureExtractor<C, D>,
        E::Feature: Debug,
        M: ProbabilisticModel<C, E::Feature>,
    {
        classes
            .iter()
            .map(|class| Ok((class.clone(), self.score(class, document)?)))
            .collect()
    }

    /// Scores the classes concurrently. Among classes tied at the maximum
    /// the one earliest in `classes` wins, as in [`Classifier::classify`].
    #[cfg(feature = "parallel")]
    pub fn par_classify<C, D>(&self, classes: &[C], document: &D) -> Result<C>
    where
        C: Clone + Debug + Sync,
        D: ?Sized + Sync,
        E: FeatureExtractor<C, D>,
        E::Feature: Debug,
        M: ProbabilisticModel<C, E::Feature>,
    {
        use rayon::prelude::*;

        let best = classes
            .par_iter()
            .enumerate()
            .map(|(idx, class)| self.score(class, document).map(|score| (idx, score)))
            .try_reduce_with(|a, b| {
                let b_wins = b.1 > a.1 || (b.1 == a.1 && b.0 < a.0);
                Ok(if b_wins { b } else { a })
            });

        match best {
            Some(result) => {
                let (idx, _) = result?;
                Ok(classes[idx].clone())
            }
            None => Err(ClassifierError::NoCandidateClasses),
        }
    }
}

impl<C, D, E, M> Classifier<C, D> for MultinomialNb<E, M>
where
    C: Clone + Debug,
    D: ?Sized,
    E: FeatureExtractor<C, D>,
    E::Feature: Debug,
    M: ProbabilisticModel<C, E::Feature>,
{
    fn classify(&self, classes: &[C], document: &D) -> Result<C> {
        let Some((first, rest)) = classes.split_first() else {
            return Err(ClassifierError::NoCandidateClasses);
        };

        let mut best = first;
        let mut best_score = self.score(first, document)?;

        for class in rest {
            let score = self.score(class, document)?;
            if score > best_score {
                debug!(class = ?class, score, previous = ?best, "new best class");
                best = class;
                best_score = score;
            }
        }

        Ok(best.clone())
    }
}

#[inline]
fn log_probability<C: Debug>(
    p: f64,
    class: &C,
    term: impl FnOnce() -> ProbabilityTerm,
) -> Result<f64> {
    if p > 0.0 && p.is_finite() {
        Ok(p.ln())
    } else {
        Err(ClassifierError::InvalidProbability {
            term: term(),
            class: format!("{class:?}"),
            value: p,
        })
    }
}
