// Adapters layer: concrete FarmData implementations (http service, json fixture).

pub mod file;
pub mod http;

use crate::core::{FarmData, SourceConfig};
use crate::utils::error::{FarmError, Result};
use std::sync::Arc;

pub use file::FileFarmData;
pub use http::HttpFarmData;

/// Builds the collaborator named by the config.
pub fn from_config<C: SourceConfig + ?Sized>(config: &C) -> Result<Arc<dyn FarmData>> {
    match (config.api_endpoint(), config.data_file()) {
        (Some(_), None) => Ok(Arc::new(HttpFarmData::from_config(config)?)),
        (None, Some(path)) => Ok(Arc::new(FileFarmData::from_file(path)?)),
        _ => Err(FarmError::ConfigError {
            message: "exactly one of api_endpoint or data_file must be set".to_string(),
        }),
    }
}
