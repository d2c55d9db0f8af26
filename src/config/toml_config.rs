use crate::core::engine::ReportKind;
use crate::core::SourceConfig;
use crate::utils::error::{FarmError, Result};
use crate::utils::validation::{
    validate_positive_number, validate_required_field, validate_single_source, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceSection,
    #[serde(default)]
    pub report: ReportSection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Http,
    File,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSection {
    pub r#type: SourceType,
    pub endpoint: Option<String>,
    pub path: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSection {
    #[serde(default)]
    pub kind: ReportKind,
    #[serde(default)]
    pub format: OutputFormat,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FarmError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FarmError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FARM_API}); unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FarmError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn report_kind(&self) -> ReportKind {
        self.report.kind
    }

    pub fn json_output(&self) -> bool {
        self.report.format == OutputFormat::Json
    }
}

impl SourceConfig for TomlConfig {
    fn api_endpoint(&self) -> Option<&str> {
        match self.source.r#type {
            SourceType::Http => self.source.endpoint.as_deref(),
            SourceType::File => None,
        }
    }

    fn data_file(&self) -> Option<&str> {
        match self.source.r#type {
            SourceType::File => self.source.path.as_deref(),
            SourceType::Http => None,
        }
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        match self.source.r#type {
            SourceType::Http => {
                validate_required_field("source.endpoint", &self.source.endpoint)?;
            }
            SourceType::File => {
                validate_required_field("source.path", &self.source.path)?;
            }
        }
        validate_single_source(self.api_endpoint(), self.data_file())?;

        if let Some(timeout) = self.source.timeout_seconds {
            validate_positive_number("source.timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_http_config() {
        let toml_content = r#"
[source]
type = "http"
endpoint = "https://farm.example.com/api"
timeout_seconds = 5

[report]
kind = "cost"
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api_endpoint(), Some("https://farm.example.com/api"));
        assert_eq!(config.data_file(), None);
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.report_kind(), ReportKind::Cost);
        assert!(config.json_output());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_report_section_defaults() {
        let toml_content = r#"
[source]
type = "file"
path = "farm.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.report_kind(), ReportKind::All);
        assert!(!config.json_output());
        assert_eq!(
            config.request_timeout(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECONDS)
        );
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FRUIT_FARM_TEST_ENDPOINT", "https://test.api.com");

        let toml_content = r#"
[source]
type = "http"
endpoint = "${FRUIT_FARM_TEST_ENDPOINT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.endpoint.as_deref(), Some("https://test.api.com"));

        std::env::remove_var("FRUIT_FARM_TEST_ENDPOINT");
    }

    #[test]
    fn test_config_validation() {
        let invalid_url = r#"
[source]
type = "http"
endpoint = "invalid-url"
"#;
        let config = TomlConfig::from_toml_str(invalid_url).unwrap();
        assert!(config.validate().is_err());

        let missing_path = r#"
[source]
type = "file"
endpoint = "https://farm.example.com"
"#;
        let config = TomlConfig::from_toml_str(missing_path).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_source_type_fails_to_parse() {
        let toml_content = r#"
[source]
type = "ftp"
"#;
        assert!(TomlConfig::from_toml_str(toml_content).is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[source]\ntype = \"file\"\npath = \"farm.json\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.data_file(), Some("farm.json"));
    }
}
