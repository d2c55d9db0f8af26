use crate::domain::model::{Crop, Farmer};
use crate::domain::ports::FarmData;
use crate::utils::error::{FarmError, Result};
use futures::future::try_join_all;
use std::collections::HashMap;

/// Sum of `units` across crops. Empty input sums to 0.
pub fn total_units<'a>(crops: impl IntoIterator<Item = &'a Crop>) -> Result<u64> {
    crops.into_iter().try_fold(0u64, |total, crop| {
        total
            .checked_add(crop.units)
            .ok_or_else(|| FarmError::UnitOverflow {
                fruit_type: crop.fruit_type.clone(),
            })
    })
}

/// Units per fruit type. Each type present in the input has exactly one
/// entry, even when its total is 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FruitAggregate {
    units_by_type: HashMap<String, u64>,
}

impl FruitAggregate {
    pub fn from_crops(crops: impl IntoIterator<Item = Crop>) -> Result<Self> {
        let mut units_by_type: HashMap<String, u64> = HashMap::new();
        for crop in crops {
            let seen = units_by_type.get(&crop.fruit_type).copied().unwrap_or(0);
            let total = seen
                .checked_add(crop.units)
                .ok_or_else(|| FarmError::UnitOverflow {
                    fruit_type: crop.fruit_type.clone(),
                })?;
            units_by_type.insert(crop.fruit_type, total);
        }
        Ok(Self { units_by_type })
    }

    pub fn len(&self) -> usize {
        self.units_by_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units_by_type.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn units_of(&self, fruit_type: &str) -> Option<u64> {
        self.units_by_type.get(fruit_type).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.units_by_type
            .iter()
            .map(|(fruit_type, units)| (fruit_type.as_str(), *units))
    }
}

/// Requests every farmer's crops concurrently and flattens the results.
///
/// One lookup is issued per farmer entry, so two farmers sharing a name both
/// contribute their crops. The first failing lookup fails the whole batch.
pub async fn fetch_crops<'a, D>(
    data: &D,
    farmers: impl IntoIterator<Item = &'a Farmer>,
) -> Result<Vec<Crop>>
where
    D: FarmData + ?Sized,
{
    let lookups = farmers
        .into_iter()
        .map(move |farmer| data.get_crops_produced_by_farmer(&farmer.name));

    let per_farmer = try_join_all(lookups).await?;
    tracing::debug!("Fetched crops for {} farmers", per_farmer.len());

    Ok(per_farmer.into_iter().flatten().collect())
}
