pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{FileFarmData, HttpFarmData};
pub use core::engine::{FarmReport, FarmReporter, ReportKind};
pub use core::{calculate_total_farmer_fruit_cost, count_number_of_fruits};
pub use domain::model::{Crop, Farmer};
pub use domain::ports::{FarmData, SourceConfig};
pub use utils::error::{FarmError, Result};
