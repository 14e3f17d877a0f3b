use crate::config::toml_config::TomlConfig;
use crate::config::ClientConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::{Parser, ValueEnum};

pub const DEMO_API_KEY: &str = "DEMO_KEY";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FeedSelection {
    Apod,
    Status,
    All,
}

impl FeedSelection {
    pub fn includes_apod(self) -> bool {
        matches!(self, FeedSelection::Apod | FeedSelection::All)
    }

    pub fn includes_status(self) -> bool {
        matches!(self, FeedSelection::Status | FeedSelection::All)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "feed-probe")]
#[command(about = "Fetch the NASA APOD and backend status feeds and print what a dashboard would show")]
pub struct ProbeArgs {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "NASA API key (falls back to the config file, then DEMO_KEY)")]
    pub api_key: Option<String>,

    #[arg(long, help = "APOD endpoint URL, without query string")]
    pub apod_endpoint: Option<String>,

    #[arg(long, help = "Backend base URL; /Status/all is appended")]
    pub backend_url: Option<String>,

    #[arg(long, value_enum, default_value = "all")]
    pub feed: FeedSelection,

    #[arg(long, help = "Print the snapshot as JSON")]
    pub json: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// 合併後的執行設定：命令列參數優先於設定檔，回傳前已完成驗證
#[derive(Debug, Clone)]
pub struct ProbeSettings {
    pub client: ClientConfig,
    pub api_key: String,
}

impl ProbeArgs {
    pub fn resolve(&self) -> Result<ProbeSettings> {
        let file_config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        file_config.validate()?;

        let mut client = file_config.client_config();
        if let Some(endpoint) = &self.apod_endpoint {
            client = client.with_apod_endpoint(endpoint.clone());
        }
        if let Some(base_url) = &self.backend_url {
            client = client.with_backend_base_url(base_url.clone());
        }

        let api_key = self
            .api_key
            .as_deref()
            .or_else(|| file_config.api_key())
            .unwrap_or(DEMO_API_KEY)
            .to_string();

        client.validate()?;
        validate_non_empty_string("api_key", &api_key)?;

        Ok(ProbeSettings { client, api_key })
    }
}
