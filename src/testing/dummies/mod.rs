mod failing_extractor;

pub use failing_extractor::{FAILING_EXTRACTOR_MESSAGE, FailingExtractor};
