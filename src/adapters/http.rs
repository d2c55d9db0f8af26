use crate::core::{Crop, FarmData, Farmer, SourceConfig};
use crate::utils::error::{FarmError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Farm data served over HTTP:
///
/// - `GET {base}/farmers`
/// - `GET {base}/farmers/{name}/crops`
/// - `GET {base}/fruits/{type}/cost`
#[derive(Debug, Clone)]
pub struct HttpFarmData {
    client: Client,
    base_url: Url,
}

impl HttpFarmData {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| FarmError::InvalidConfigValueError {
            field: "api_endpoint".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(FarmError::InvalidConfigValueError {
                field: "api_endpoint".to_string(),
                value: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn from_config<C: SourceConfig + ?Sized>(config: &C) -> Result<Self> {
        let endpoint = config.api_endpoint().ok_or_else(|| FarmError::ConfigError {
            message: "api_endpoint is required for the HTTP data source".to_string(),
        })?;
        Self::new(endpoint, config.request_timeout())
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(FarmError::LookupError {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl FarmData for HttpFarmData {
    async fn get_farmers(&self) -> Result<Vec<Farmer>> {
        self.get_json(self.endpoint(&["farmers"])).await
    }

    async fn get_crops_produced_by_farmer(&self, name: &str) -> Result<Vec<Crop>> {
        match self.get_json(self.endpoint(&["farmers", name, "crops"])).await {
            Err(FarmError::LookupError { status: 404, .. }) => Err(FarmError::UnknownFarmer {
                name: name.to_string(),
            }),
            other => other,
        }
    }

    async fn get_cost_of_single_fruit(&self, fruit_type: &str) -> Result<f64> {
        match self.get_json(self.endpoint(&["fruits", fruit_type, "cost"])).await {
            Err(FarmError::LookupError { status: 404, .. }) => Err(FarmError::UnknownFruit {
                fruit_type: fruit_type.to_string(),
            }),
            other => other,
        }
    }
}
