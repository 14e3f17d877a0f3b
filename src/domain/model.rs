use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// 欄位名稱一律小寫：解碼前 JSON 鍵值會先轉成小寫 (見 core::json)

/// NASA Astronomy Picture of the Day 回傳的資料
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApodData {
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub explanation: String,
    /// 高解析度圖片，影片類型時通常不存在
    pub hdurl: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub media_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub service_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendStatus {
    pub server: Option<ServerStatus>,
    pub mongodb: Option<DatabaseStatus>,
    pub postgresql: Option<DatabaseStatus>,
    #[serde(deserialize_with = "flexible_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl BackendStatus {
    /// (名稱, 狀態) 依固定順序列出有回報的資料庫
    pub fn databases(&self) -> impl Iterator<Item = (&'static str, &DatabaseStatus)> {
        [("MongoDB", &self.mongodb), ("PostgreSQL", &self.postgresql)]
            .into_iter()
            .filter_map(|(name, status)| status.as_ref().map(|s| (name, s)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerStatus {
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
}

/// `is_error` 與 `error` 彼此獨立，兩者不一致時不做推斷
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseStatus {
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    pub database: Option<String>,
    pub error: Option<String>,
    #[serde(rename(deserialize = "iserror"), deserialize_with = "null_as_default")]
    pub is_error: bool,
}

impl DatabaseStatus {
    pub fn is_healthy(&self) -> bool {
        !self.is_error
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 接受 RFC 3339，或不帶時區的 ISO 8601 (到秒、到分，或僅日期；一律視為 UTC)
fn flexible_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Option::<String>::deserialize(deserializer)? {
        Some(raw) => raw,
        None => return Ok(None),
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(parsed.with_timezone(&Utc)));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&raw, format) {
            return Ok(Some(naive.and_utc()));
        }
    }

    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| Some(midnight.and_utc()))
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{}'", raw)))
}
