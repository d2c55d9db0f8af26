use crate::core::engine::ReportKind;
use crate::core::SourceConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_single_source, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "fruit-farm")]
#[command(about = "Count fruit units and price active farmers' fruit")]
pub struct CliConfig {
    #[arg(long, help = "Base URL of the farm data service")]
    pub api_endpoint: Option<String>,

    #[arg(long, help = "JSON fixture with farmers, crops and prices")]
    pub data_file: Option<String>,

    #[arg(long, default_value = "all", help = "count, cost or all")]
    pub report: ReportKind,

    #[arg(long, default_value = "30")]
    pub timeout_seconds: u64,

    #[arg(long, help = "Print the report as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl SourceConfig for CliConfig {
    fn api_endpoint(&self) -> Option<&str> {
        self.api_endpoint.as_deref()
    }

    fn data_file(&self) -> Option<&str> {
        self.data_file.as_deref()
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_single_source(self.api_endpoint(), self.data_file())?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file_source() {
        let config =
            CliConfig::try_parse_from(["fruit-farm", "--data-file", "farm.json", "--report", "cost"])
                .unwrap();

        assert_eq!(config.data_file(), Some("farm.json"));
        assert_eq!(config.report, ReportKind::Cost);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_both_sources_fail_validation() {
        let config = CliConfig::try_parse_from([
            "fruit-farm",
            "--api-endpoint",
            "http://localhost:8080",
            "--data-file",
            "farm.json",
        ])
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_report_kind_is_rejected() {
        let result = CliConfig::try_parse_from(["fruit-farm", "--report", "profit"]);
        assert!(result.is_err());
    }
}
