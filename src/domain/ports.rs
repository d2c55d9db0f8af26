use crate::domain::model::{Crop, Farmer};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Data-access operations the fruit computations depend on.
#[async_trait]
pub trait FarmData: Send + Sync {
    async fn get_farmers(&self) -> Result<Vec<Farmer>>;
    async fn get_crops_produced_by_farmer(&self, name: &str) -> Result<Vec<Crop>>;
    async fn get_cost_of_single_fruit(&self, fruit_type: &str) -> Result<f64>;
}

#[async_trait]
impl<T: FarmData + ?Sized> FarmData for Arc<T> {
    async fn get_farmers(&self) -> Result<Vec<Farmer>> {
        (**self).get_farmers().await
    }

    async fn get_crops_produced_by_farmer(&self, name: &str) -> Result<Vec<Crop>> {
        (**self).get_crops_produced_by_farmer(name).await
    }

    async fn get_cost_of_single_fruit(&self, fruit_type: &str) -> Result<f64> {
        (**self).get_cost_of_single_fruit(fruit_type).await
    }
}

/// Where farm data comes from. Exactly one of `api_endpoint` / `data_file` is set.
pub trait SourceConfig: Send + Sync {
    fn api_endpoint(&self) -> Option<&str>;
    fn data_file(&self) -> Option<&str>;
    fn request_timeout(&self) -> Duration;
}
