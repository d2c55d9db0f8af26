use crate::core::aggregate::{fetch_crops, FruitAggregate};
use crate::domain::ports::FarmData;
use crate::utils::error::{FarmError, Result};
use futures::future::try_join_all;

/// Market cost of all fruit produced by active farmers.
///
/// Crops are grouped by fruit type first, so each distinct type is priced
/// exactly once no matter how many crops or farmers produced it.
pub async fn calculate_total_farmer_fruit_cost<D>(data: &D) -> Result<f64>
where
    D: FarmData + ?Sized,
{
    let farmers = data.get_farmers().await?;
    let active: Vec<_> = farmers.iter().filter(|farmer| farmer.is_active()).collect();
    tracing::debug!(
        "Pricing fruit for {} of {} farmers (retired excluded)",
        active.len(),
        farmers.len()
    );

    let crops = fetch_crops(data, active).await?;
    let aggregate = FruitAggregate::from_crops(crops)?;
    if aggregate.is_empty() {
        tracing::debug!("No crops from active farmers, nothing to price");
        return Ok(0.0);
    }
    tracing::debug!("Aggregated crops into {} fruit types", aggregate.len());

    let priced = aggregate.iter().map(|(fruit_type, units)| async move {
        let unit_cost = data.get_cost_of_single_fruit(fruit_type).await?;
        tracing::trace!("{} x {} @ {}", units, fruit_type, unit_cost);
        Ok::<_, FarmError>(unit_cost * units as f64)
    });
    let costs = try_join_all(priced).await?;

    Ok(costs.into_iter().sum())
}
