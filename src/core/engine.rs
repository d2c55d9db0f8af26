use crate::core::{calculate_total_farmer_fruit_cost, count_number_of_fruits};
use crate::domain::ports::FarmData;
use crate::utils::error::{FarmError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which computations a run should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Count,
    Cost,
    #[default]
    All,
}

impl FromStr for ReportKind {
    type Err = FarmError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "count" => Ok(ReportKind::Count),
            "cost" => Ok(ReportKind::Cost),
            "all" => Ok(ReportKind::All),
            other => Err(FarmError::InvalidConfigValueError {
                field: "report".to_string(),
                value: other.to_string(),
                reason: "expected one of: count, cost, all".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FarmReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fruit_units: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
}

impl fmt::Display for FarmReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();
        if let Some(units) = self.fruit_units {
            lines.push(format!("fruit units: {}", units));
        }
        if let Some(cost) = self.total_cost {
            lines.push(format!("active farmer fruit cost: {:.2}", cost));
        }
        write!(f, "{}", lines.join("\n"))
    }
}

/// Runs the fruit computations against one collaborator.
pub struct FarmReporter<D: FarmData> {
    data: D,
}

impl<D: FarmData> FarmReporter<D> {
    pub fn new(data: D) -> Self {
        Self { data }
    }

    pub async fn count_number_of_fruits(&self) -> Result<u64> {
        count_number_of_fruits(&self.data).await
    }

    pub async fn calculate_total_farmer_fruit_cost(&self) -> Result<f64> {
        calculate_total_farmer_fruit_cost(&self.data).await
    }

    pub async fn run(&self, kind: ReportKind) -> Result<FarmReport> {
        tracing::info!("Starting farm report ({:?})", kind);

        let report = match kind {
            ReportKind::Count => FarmReport {
                fruit_units: Some(self.count_number_of_fruits().await?),
                total_cost: None,
            },
            ReportKind::Cost => FarmReport {
                fruit_units: None,
                total_cost: Some(self.calculate_total_farmer_fruit_cost().await?),
            },
            ReportKind::All => {
                let (units, cost) = tokio::try_join!(
                    self.count_number_of_fruits(),
                    self.calculate_total_farmer_fruit_cost()
                )?;
                FarmReport {
                    fruit_units: Some(units),
                    total_cost: Some(cost),
                }
            }
        };

        if let Some(units) = report.fruit_units {
            tracing::info!("Fruit units: {}", units);
        }
        if let Some(cost) = report.total_cost {
            tracing::info!("Active farmer fruit cost: {:.2}", cost);
        }

        Ok(report)
    }
}
