use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::{ClassifierError, Result};
use crate::models::ProbabilisticModel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableClass {
    pub label: String,
    pub prior: f64,
    #[serde(default)]
    pub conditionals: HashMap<String, f64>,
    /// Returned for features missing from `conditionals`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unseen: Option<f64>,
}

impl TableClass {
    pub fn new(label: impl Into<String>, prior: f64) -> Self {
        Self {
            label: label.into(),
            prior,
            conditionals: HashMap::new(),
            unseen: None,
        }
    }
}

/// Explicit probability table, one entry per class in declaration order.
///
/// A class without an `unseen` probability cannot score features it has no
/// entry for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableModel {
    pub classes: Vec<TableClass>,
}

impl TableModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prior(mut self, class: &str, p: f64) -> Self {
        match self.class_mut(class) {
            Some(entry) => entry.prior = p,
            None => self.classes.push(TableClass::new(class, p)),
        }
        self
    }

    /// Classes must be declared with [`with_prior`](Self::with_prior) first;
    /// conditionals for undeclared classes are ignored.
    pub fn with_conditional(mut self, class: &str, feature: &str, p: f64) -> Self {
        if let Some(entry) = self.class_mut(class) {
            entry.conditionals.insert(feature.to_string(), p);
        }
        self
    }

    pub fn with_unseen(mut self, class: &str, p: f64) -> Self {
        if let Some(entry) = self.class_mut(class) {
            entry.unseen = Some(p);
        }
        self
    }

    pub fn labels(&self) -> Vec<String> {
        self.classes.iter().map(|c| c.label.clone()).collect()
    }

    fn class(&self, label: &str) -> Option<&TableClass> {
        self.classes.iter().find(|c| c.label == label)
    }

    fn class_mut(&mut self, label: &str) -> Option<&mut TableClass> {
        self.classes.iter_mut().find(|c| c.label == label)
    }
}

impl ProbabilisticModel<String, String> for TableModel {
    fn prior(&self, class: &String) -> Result<f64> {
        self.class(class)
            .map(|entry| entry.prior)
            .ok_or_else(|| ClassifierError::unscorable_prior(class))
    }

    fn conditional_probability(&self, feature: &String, class: &String) -> Result<f64> {
        let entry = self
            .class(class)
            .ok_or_else(|| ClassifierError::unscorable_feature(feature, class))?;
        entry
            .conditionals
            .get(feature)
            .copied()
            .or(entry.unseen)
            .ok_or_else(|| ClassifierError::unscorable_feature(feature, class))
    }
}
