use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

/// Which probability query produced an unusable value.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbabilityTerm {
    Prior,
    Conditional { feature: String },
}

impl Display for ProbabilityTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ProbabilityTerm::Prior => write!(f, "prior"),
            ProbabilityTerm::Conditional { feature } => {
                write!(f, "conditional probability of feature {feature}")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    Domain,
    Collaborator,
}

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("no candidate classes supplied")]
    NoCandidateClasses,

    #[error("{term} for class {class} is {value}, expected a strictly positive finite probability")]
    InvalidProbability {
        term: ProbabilityTerm,
        class: String,
        value: f64,
    },

    #[error("model cannot score the {term} for class {class}")]
    Unscorable { term: ProbabilityTerm, class: String },

    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}

impl ClassifierError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClassifierError::NoCandidateClasses => ErrorKind::InvalidArgument,
            ClassifierError::InvalidProbability { .. } | ClassifierError::Unscorable { .. } => {
                ErrorKind::Domain
            }
            ClassifierError::Collaborator(_) => ErrorKind::Collaborator,
        }
    }

    pub fn unscorable_prior(class: impl std::fmt::Debug) -> Self {
        ClassifierError::Unscorable {
            term: ProbabilityTerm::Prior,
            class: format!("{class:?}"),
        }
    }

    pub fn unscorable_feature(
        feature: impl std::fmt::Debug,
        class: impl std::fmt::Debug,
    ) -> Self {
        ClassifierError::Unscorable {
            term: ProbabilityTerm::Conditional {
                feature: format!("{feature:?}"),
            },
            class: format!("{class:?}"),
        }
    }
}

pub type Result<T, E = ClassifierError> = std::result::Result<T, E>;
