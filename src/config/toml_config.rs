use crate::config::{ClientConfig, DEFAULT_APOD_ENDPOINT, DEFAULT_BACKEND_BASE_URL};
use crate::utils::error::{ApiError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    pub nasa: Option<NasaConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsConfig {
    #[serde(default = "default_apod")]
    pub apod: String,
    #[serde(default = "default_backend")]
    pub backend: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NasaConfig {
    pub api_key: Option<String>,
}

fn default_apod() -> String {
    DEFAULT_APOD_ENDPOINT.to_string()
}

fn default_backend() -> String {
    DEFAULT_BACKEND_BASE_URL.to_string()
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            apod: default_apod(),
            backend: default_backend(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ApiError::Io)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ApiError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${NASA_API_KEY})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.endpoints.apod.clone(), self.endpoints.backend.clone())
    }

    /// 設定檔中的 API key；未替換的 `${VAR}` 視為未設定
    pub fn api_key(&self) -> Option<&str> {
        self.nasa
            .as_ref()
            .and_then(|n| n.api_key.as_deref())
            .filter(|key| !(key.starts_with("${") && key.ends_with('}')))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.client_config().validate()?;
        if let Some(key) = self.nasa.as_ref().and_then(|n| n.api_key.as_deref()) {
            validate_non_empty_string("nasa.api_key", key)?;
        }
        Ok(())
    }
}
