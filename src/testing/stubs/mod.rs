mod fixed_features;
mod fn_model;

pub use fixed_features::FixedFeatures;
pub use fn_model::FnModel;
