use crate::domain::model::{ApodData, BackendStatus};
use crate::utils::error::{ApiError, FailureKind, Feed, Result};
use async_trait::async_trait;

/// 儀表板需要的兩個資料來源。
///
/// 實作者只需提供 `fetch_*`，回傳明確的成功/失敗結果；
/// `get_*` 由 trait 提供：記錄失敗原因後回傳 `None`，絕不把錯誤丟給呼叫端。
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn fetch_nasa_apod(&self, api_key: &str) -> Result<ApodData>;

    async fn fetch_backend_status(&self) -> Result<BackendStatus>;

    async fn get_nasa_apod(&self, api_key: &str) -> Option<ApodData> {
        match self.fetch_nasa_apod(api_key).await {
            Ok(apod) => Some(apod),
            Err(e) => {
                log_failure(Feed::Apod, &e);
                None
            }
        }
    }

    async fn get_backend_status(&self) -> Option<BackendStatus> {
        match self.fetch_backend_status().await {
            Ok(status) => Some(status),
            Err(e) => {
                log_failure(Feed::BackendStatus, &e);
                None
            }
        }
    }
}

pub(crate) fn log_failure(feed: Feed, error: &ApiError) {
    match error.kind() {
        FailureKind::Status => {
            tracing::warn!(feed = %feed, "{}", error);
        }
        FailureKind::Network => {
            tracing::error!(feed = %feed, "HTTP error when fetching {}: {}", feed, error);
        }
        FailureKind::Decode => {
            tracing::error!(feed = %feed, "Failed to decode {} response: {}", feed, error);
        }
        FailureKind::Unexpected | FailureKind::Config => {
            tracing::error!(feed = %feed, "Unexpected error when fetching {}: {}", feed, error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingApi;

    #[async_trait]
    impl DashboardApi for FailingApi {
        async fn fetch_nasa_apod(&self, _api_key: &str) -> Result<ApodData> {
            Err(ApiError::Status {
                feed: Feed::Apod,
                status: reqwest::StatusCode::TOO_MANY_REQUESTS,
            })
        }

        async fn fetch_backend_status(&self) -> Result<BackendStatus> {
            Err(ApiError::ConfigError {
                message: "no backend configured".to_string(),
            })
        }
    }

    struct StaticApi;

    #[async_trait]
    impl DashboardApi for StaticApi {
        async fn fetch_nasa_apod(&self, api_key: &str) -> Result<ApodData> {
            Ok(ApodData {
                title: api_key.to_string(),
                ..Default::default()
            })
        }

        async fn fetch_backend_status(&self) -> Result<BackendStatus> {
            Ok(BackendStatus::default())
        }
    }

    #[test]
    fn test_get_methods_swallow_failures() {
        let api = FailingApi;
        assert!(tokio_test::block_on(api.get_nasa_apod("DEMO_KEY")).is_none());
        assert!(tokio_test::block_on(api.get_backend_status()).is_none());
    }

    #[test]
    fn test_get_methods_pass_through_success() {
        let api = StaticApi;
        let apod = tokio_test::block_on(api.get_nasa_apod("k")).unwrap();
        assert_eq!(apod.title, "k");
        assert!(tokio_test::block_on(api.get_backend_status()).is_some());
    }
}
