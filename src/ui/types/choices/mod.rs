mod feature_choice;

pub use feature_choice::{FeatureChoice, OutputFormat};
