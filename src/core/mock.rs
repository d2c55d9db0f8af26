use crate::domain::model::{Crop, Farmer};
use crate::domain::ports::FarmData;
use crate::utils::error::{FarmError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Barrier, Mutex};

/// Collaborator double that records every lookup it serves.
#[derive(Clone, Default)]
pub struct MockFarm {
    farmers: Vec<Farmer>,
    crops: HashMap<String, Vec<Crop>>,
    prices: HashMap<String, f64>,
    failing_farmer: Option<String>,
    fail_farmer_list: bool,
    crop_barrier: Option<Arc<Barrier>>,
    price_barrier: Option<Arc<Barrier>>,
    crop_calls: Arc<Mutex<Vec<String>>>,
    price_calls: Arc<Mutex<Vec<String>>>,
}

impl MockFarm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_farmer(mut self, farmer: Farmer, crops: Vec<Crop>) -> Self {
        self.crops
            .entry(farmer.name.clone())
            .or_default()
            .extend(crops);
        self.farmers.push(farmer);
        self
    }

    pub fn with_price(mut self, fruit_type: &str, price: f64) -> Self {
        self.prices.insert(fruit_type.to_string(), price);
        self
    }

    pub fn failing_for(mut self, name: &str) -> Self {
        self.failing_farmer = Some(name.to_string());
        self
    }

    pub fn failing_farmer_list(mut self) -> Self {
        self.fail_farmer_list = true;
        self
    }

    /// Every crop lookup waits until `parties` lookups are in flight.
    pub fn with_crop_barrier(mut self, parties: usize) -> Self {
        self.crop_barrier = Some(Arc::new(Barrier::new(parties)));
        self
    }

    /// Every price lookup waits until `parties` lookups are in flight.
    pub fn with_price_barrier(mut self, parties: usize) -> Self {
        self.price_barrier = Some(Arc::new(Barrier::new(parties)));
        self
    }

    pub async fn crop_calls(&self) -> Vec<String> {
        self.crop_calls.lock().await.clone()
    }

    pub async fn price_calls(&self) -> Vec<String> {
        let mut calls = self.price_calls.lock().await.clone();
        calls.sort();
        calls
    }
}

#[async_trait]
impl FarmData for MockFarm {
    async fn get_farmers(&self) -> Result<Vec<Farmer>> {
        if self.fail_farmer_list {
            return Err(FarmError::LookupError {
                url: "mock://farmers".to_string(),
                status: 500,
            });
        }
        Ok(self.farmers.clone())
    }

    async fn get_crops_produced_by_farmer(&self, name: &str) -> Result<Vec<Crop>> {
        self.crop_calls.lock().await.push(name.to_string());
        if let Some(barrier) = &self.crop_barrier {
            barrier.wait().await;
        }

        if self.failing_farmer.as_deref() == Some(name) {
            return Err(FarmError::UnknownFarmer {
                name: name.to_string(),
            });
        }
        Ok(self.crops.get(name).cloned().unwrap_or_default())
    }

    async fn get_cost_of_single_fruit(&self, fruit_type: &str) -> Result<f64> {
        self.price_calls.lock().await.push(fruit_type.to_string());
        if let Some(barrier) = &self.price_barrier {
            barrier.wait().await;
        }

        self.prices
            .get(fruit_type)
            .copied()
            .ok_or_else(|| FarmError::UnknownFruit {
                fruit_type: fruit_type.to_string(),
            })
    }
}
