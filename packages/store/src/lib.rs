pub mod age_group;
pub mod config;
pub mod listing;
pub mod models;
pub mod owners;
pub mod page;
pub mod result_value;
pub mod validation;

pub use age_group::AgeGroup;
pub use config::AppConfig;
pub use listing::{SortDirection, SortState};
pub use models::{Athlete, Discipline, Product, Record, ResultRecord, ResultType};
pub use owners::ResultOwners;
pub use page::{PageState, Phase};
pub use validation::ValidationErrors;
