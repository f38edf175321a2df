use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::core::{ClassifierError, Result};
use crate::models::ProbabilisticModel;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountsClass {
    pub label: String,
    /// Number of training documents labelled with this class.
    pub documents: u64,
    /// Occurrences of each feature across this class's documents.
    #[serde(default)]
    pub features: HashMap<String, u64>,
}

/// Pre-computed frequency counts, as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountsTable {
    pub classes: Vec<CountsClass>,
}

/// Answers probability queries from frequency counts with add-one smoothing.
///
/// `prior(c) = n_c / N` and
/// `P(f | c) = (count(f, c) + 1) / (total(c) + |V|)`, with `V` the vocabulary
/// observed across every class. Totals are accumulated in `f64` so counts
/// near `u64::MAX` stay finite instead of overflowing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CountsTable", into = "CountsTable")]
pub struct CountsModel {
    table: CountsTable,
    feature_totals: Vec<f64>,
    total_documents: f64,
    vocabulary_size: u64,
}

impl CountsModel {
    pub fn new(table: CountsTable) -> Self {
        let feature_totals = table
            .classes
            .iter()
            .map(|c| c.features.values().map(|&n| n as f64).sum())
            .collect();
        let total_documents = table.classes.iter().map(|c| c.documents as f64).sum();
        let vocabulary_size = table
            .classes
            .iter()
            .flat_map(|c| c.features.keys())
            .collect::<HashSet<_>>()
            .len() as u64;

        Self {
            table,
            feature_totals,
            total_documents,
            vocabulary_size,
        }
    }

    pub fn labels(&self) -> Vec<String> {
        self.table.classes.iter().map(|c| c.label.clone()).collect()
    }

    pub fn vocabulary_size(&self) -> u64 {
        self.vocabulary_size
    }

    pub fn table(&self) -> &CountsTable {
        &self.table
    }

    #[inline]
    fn class_index(&self, label: &str) -> Option<usize> {
        self.table.classes.iter().position(|c| c.label == label)
    }
}

impl From<CountsTable> for CountsModel {
    fn from(table: CountsTable) -> Self {
        CountsModel::new(table)
    }
}

impl From<CountsModel> for CountsTable {
    fn from(model: CountsModel) -> Self {
        model.table
    }
}

impl ProbabilisticModel<String, String> for CountsModel {
    fn prior(&self, class: &String) -> Result<f64> {
        let idx = self
            .class_index(class)
            .ok_or_else(|| ClassifierError::unscorable_prior(class))?;
        if self.total_documents == 0.0 {
            return Err(ClassifierError::unscorable_prior(class));
        }
        Ok(self.table.classes[idx].documents as f64 / self.total_documents)
    }

    fn conditional_probability(&self, feature: &String, class: &String) -> Result<f64> {
        let idx = self
            .class_index(class)
            .ok_or_else(|| ClassifierError::unscorable_feature(feature, class))?;
        let denominator = self.feature_totals[idx] + self.vocabulary_size as f64;
        if denominator == 0.0 {
            return Err(ClassifierError::unscorable_feature(feature, class));
        }
        let count = self.table.classes[idx]
            .features
            .get(feature)
            .copied()
            .unwrap_or(0);
        Ok((count as f64 + 1.0) / denominator)
    }
}
