pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::ProbeArgs;
pub use config::{toml_config::TomlConfig, ClientConfig};

pub use core::{
    api_service::ApiService,
    dashboard::{Dashboard, DashboardSnapshot},
};
pub use domain::model::{ApodData, BackendStatus, DatabaseStatus, ServerStatus};
pub use domain::ports::DashboardApi;
pub use utils::error::{ApiError, FailureKind, Feed, Result};
