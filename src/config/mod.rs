#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_no_query, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_APOD_ENDPOINT: &str = "https://api.nasa.gov/planetary/apod";
pub const DEFAULT_BACKEND_BASE_URL: &str = "https://opgaver.mercantec.tech/api";

/// 客戶端的端點設定，建構時注入
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub apod_endpoint: String,
    pub backend_base_url: String,
}

impl ClientConfig {
    pub fn new(apod_endpoint: impl Into<String>, backend_base_url: impl Into<String>) -> Self {
        Self {
            apod_endpoint: apod_endpoint.into(),
            backend_base_url: backend_base_url.into(),
        }
    }

    pub fn with_apod_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.apod_endpoint = endpoint.into();
        self
    }

    pub fn with_backend_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.backend_base_url = base_url.into();
        self
    }

    /// `{base}/Status/all`，base 結尾的斜線會被忽略
    pub fn backend_status_url(&self) -> String {
        format!("{}/Status/all", self.backend_base_url.trim_end_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_APOD_ENDPOINT, DEFAULT_BACKEND_BASE_URL)
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoints.apod", &self.apod_endpoint)?;
        validate_no_query("endpoints.apod", &self.apod_endpoint)?;
        validate_url("endpoints.backend", &self.backend_base_url)?;
        Ok(())
    }
}
