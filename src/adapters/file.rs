use crate::core::{Crop, FarmData, Farmer};
use crate::utils::error::{FarmError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Farm data held in memory, usually loaded from a JSON fixture:
///
/// ```json
/// {
///   "farmers": [{"name": "A"}, {"name": "B", "retired": true}],
///   "crops": {"A": [{"type": "apple", "units": 3}]},
///   "prices": {"apple": 2.0}
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileFarmData {
    pub farmers: Vec<Farmer>,
    #[serde(default)]
    pub crops: HashMap<String, Vec<Crop>>,
    #[serde(default)]
    pub prices: HashMap<String, f64>,
}

impl FileFarmData {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let data = Self::from_json_str(&content)?;
        tracing::debug!(
            "Loaded {} farmers and {} prices from {}",
            data.farmers.len(),
            data.prices.len(),
            path.as_ref().display()
        );
        Ok(data)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    fn is_known_farmer(&self, name: &str) -> bool {
        self.crops.contains_key(name) || self.farmers.iter().any(|f| f.name == name)
    }
}

#[async_trait]
impl FarmData for FileFarmData {
    async fn get_farmers(&self) -> Result<Vec<Farmer>> {
        Ok(self.farmers.clone())
    }

    async fn get_crops_produced_by_farmer(&self, name: &str) -> Result<Vec<Crop>> {
        if !self.is_known_farmer(name) {
            return Err(FarmError::UnknownFarmer {
                name: name.to_string(),
            });
        }
        Ok(self.crops.get(name).cloned().unwrap_or_default())
    }

    async fn get_cost_of_single_fruit(&self, fruit_type: &str) -> Result<f64> {
        self.prices
            .get(fruit_type)
            .copied()
            .ok_or_else(|| FarmError::UnknownFruit {
                fruit_type: fruit_type.to_string(),
            })
    }
}
