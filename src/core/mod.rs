pub mod api_service;
pub mod dashboard;
pub mod json;

pub use crate::domain::model::{ApodData, BackendStatus, DatabaseStatus, ServerStatus};
pub use crate::domain::ports::DashboardApi;
pub use crate::utils::error::Result;
