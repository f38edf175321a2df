pub mod errors;
pub mod tokens_document;

pub use errors::{ClassifierError, ErrorKind, ProbabilityTerm, Result};
pub use tokens_document::TokensDocument;
