use crate::domain::model::{ApodData, BackendStatus};
use crate::domain::ports::DashboardApi;
use serde::Serialize;

/// 某一時刻兩個資料來源的快照；`None` 代表資料無法取得
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSnapshot {
    pub apod: Option<ApodData>,
    pub backend: Option<BackendStatus>,
}

pub struct Dashboard<A: DashboardApi> {
    api: A,
}

impl<A: DashboardApi> Dashboard<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// 同時抓取兩個來源，彼此互不影響
    pub async fn load(&self, api_key: &str) -> DashboardSnapshot {
        let (apod, backend) = tokio::join!(
            self.api.get_nasa_apod(api_key),
            self.api.get_backend_status()
        );

        DashboardSnapshot { apod, backend }
    }

    pub async fn load_apod(&self, api_key: &str) -> DashboardSnapshot {
        DashboardSnapshot {
            apod: self.api.get_nasa_apod(api_key).await,
            backend: None,
        }
    }

    pub async fn load_backend(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            apod: None,
            backend: self.api.get_backend_status().await,
        }
    }
}

impl DashboardSnapshot {
    pub fn is_complete(&self) -> bool {
        self.apod.is_some() && self.backend.is_some()
    }

    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        lines.extend(render_apod(self.apod.as_ref()));
        lines.extend(render_backend(self.backend.as_ref()));
        lines
    }
}

pub fn render_apod(apod: Option<&ApodData>) -> Vec<String> {
    let Some(apod) = apod else {
        return vec!["Picture of the day: unavailable".to_string()];
    };

    let mut lines = vec![format!("Picture of the day: {} ({})", apod.title, apod.date)];
    lines.push(format!("  {}: {}", apod.media_type, apod.url));
    if let Some(hdurl) = &apod.hdurl {
        lines.push(format!("  hd: {}", hdurl));
    }
    lines
}

pub fn render_backend(status: Option<&BackendStatus>) -> Vec<String> {
    let Some(status) = status else {
        return vec!["Backend status: unavailable".to_string()];
    };

    let mut lines = match status.timestamp {
        Some(ts) => vec![format!("Backend status at {}", ts.to_rfc3339())],
        None => vec!["Backend status".to_string()],
    };

    match &status.server {
        Some(server) => lines.push(format!("  Server: {}", server.status)),
        None => lines.push("  Server: unknown".to_string()),
    }

    for (name, db) in status.databases() {
        let health = if db.is_healthy() { "ok" } else { "error" };
        let mut line = format!("  {}: {} [{}]", name, db.status, health);
        if let Some(error) = &db.error {
            line.push_str(&format!(" {}", error));
        }
        lines.push(line);
    }
    lines
}
