use crate::core::aggregate::{fetch_crops, total_units};
use crate::domain::ports::FarmData;
use crate::utils::error::Result;

/// Total fruit units produced by every farmer, retired or not.
pub async fn count_number_of_fruits<D>(data: &D) -> Result<u64>
where
    D: FarmData + ?Sized,
{
    let farmers = data.get_farmers().await?;
    tracing::debug!("Counting fruit for {} farmers", farmers.len());

    let crops = fetch_crops(data, &farmers).await?;
    let total = total_units(&crops)?;

    tracing::debug!("Counted {} units across {} crops", total, crops.len());
    Ok(total)
}
