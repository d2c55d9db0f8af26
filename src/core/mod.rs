pub mod aggregate;
pub mod engine;
pub mod fruit_cost;
pub mod fruit_count;

#[cfg(test)]
pub(crate) mod mock;

pub use crate::domain::model::{Crop, Farmer};
pub use crate::domain::ports::{FarmData, SourceConfig};
pub use crate::utils::error::Result;
pub use fruit_cost::calculate_total_farmer_fruit_cost;
pub use fruit_count::count_number_of_fruits;
