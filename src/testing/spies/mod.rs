mod counting_extractor;
mod counting_model;

pub use counting_extractor::{CountingExtractor, ExtractSpyHandle};
pub use counting_model::{CountingModel, CountingModelHandle};
