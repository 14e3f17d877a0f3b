use crate::config::ClientConfig;
use crate::core::json::from_str_case_insensitive;
use crate::domain::model::{ApodData, BackendStatus};
use crate::domain::ports::DashboardApi;
use crate::utils::error::{ApiError, Feed, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::{Position, Url};

/// 透過單一 HTTP client 存取 NASA APOD 與後端狀態端點。
///
/// 不重試、不快取，也不覆寫 client 的預設逾時。
#[derive(Debug, Clone)]
pub struct ApiService {
    client: Client,
    config: ClientConfig,
}

impl ApiService {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// 與呼叫端共用連線池
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    fn apod_url(&self, api_key: &str) -> Result<Url> {
        Ok(Url::parse_with_params(
            &self.config.apod_endpoint,
            &[("api_key", api_key)],
        )?)
    }

    async fn get_json<T: DeserializeOwned>(&self, feed: Feed, url: Url) -> Result<T> {
        // 查詢字串含 API key，不寫進日誌
        tracing::debug!(feed = %feed, "Making API request to: {}", &url[..Position::AfterPath]);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.without_url()))?;

        let status = response.status();
        tracing::debug!(feed = %feed, "API response status: {}", status);

        if !status.is_success() {
            return Err(ApiError::Status { feed, status });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.without_url()))?;

        Ok(from_str_case_insensitive(&body)?)
    }
}

#[async_trait]
impl DashboardApi for ApiService {
    async fn fetch_nasa_apod(&self, api_key: &str) -> Result<ApodData> {
        let url = self.apod_url(api_key)?;
        self.get_json(Feed::Apod, url).await
    }

    async fn fetch_backend_status(&self) -> Result<BackendStatus> {
        let url = Url::parse(&self.config.backend_status_url())?;
        self.get_json(Feed::BackendStatus, url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FailureKind;
    use httpmock::prelude::*;

    fn service_for(server: &MockServer) -> ApiService {
        ApiService::with_client(
            Client::new(),
            ClientConfig::new(server.url("/planetary/apod"), server.url("/api")),
        )
    }

    #[test]
    fn test_apod_url_encodes_key() {
        let service = ApiService::new(ClientConfig::default());
        let url = service.apod_url("a b&c").unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.nasa.gov/planetary/apod?api_key=a+b%26c"
        );
    }

    #[tokio::test]
    async fn test_fetch_apod_success() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/planetary/apod")
                    .query_param("api_key", "DEMO_KEY");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(serde_json::json!({
                        "date": "2024-01-01",
                        "explanation": "x",
                        "media_type": "image",
                        "service_version": "v1",
                        "title": "t",
                        "url": "http://x"
                    }));
            })
            .await;

        let apod = service_for(&server).fetch_nasa_apod("DEMO_KEY").await.unwrap();

        api_mock.assert_async().await;
        assert_eq!(apod.date, "2024-01-01");
        assert_eq!(apod.media_type, "image");
        assert!(apod.hdurl.is_none());
    }

    #[tokio::test]
    async fn test_fetch_backend_status_reports_status_code() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/Status/all");
                then.status(503);
            })
            .await;

        let err = service_for(&server).fetch_backend_status().await.unwrap_err();

        api_mock.assert_async().await;
        assert_eq!(err.kind(), FailureKind::Status);
        assert_eq!(err.status(), Some(reqwest::StatusCode::SERVICE_UNAVAILABLE));
    }

    #[tokio::test]
    async fn test_fetch_apod_malformed_json_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/planetary/apod");
                then.status(200).body("{\"date\": ");
            })
            .await;

        let err = service_for(&server).fetch_nasa_apod("k").await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::Decode);
    }

    #[tokio::test]
    async fn test_invalid_endpoint_is_unexpected_error() {
        let service = ApiService::new(ClientConfig::new("not a url", "also not a url"));

        let apod_err = service.fetch_nasa_apod("k").await.unwrap_err();
        let status_err = service.fetch_backend_status().await.unwrap_err();

        assert_eq!(apod_err.kind(), FailureKind::Unexpected);
        assert_eq!(status_err.kind(), FailureKind::Unexpected);
        assert!(service.get_nasa_apod("k").await.is_none());
    }
}
