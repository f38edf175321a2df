mod counts_model;
mod model_file;
mod probabilistic_model;
mod table_model;

pub use counts_model::{CountsClass, CountsModel, CountsTable};
pub use model_file::{ModelFile, ModelFileError};
pub use probabilistic_model::ProbabilisticModel;
pub use table_model::{TableClass, TableModel};
