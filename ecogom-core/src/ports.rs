//! Traits describing backend capabilities and shared helper types.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::ParseError as ChronoParseError;
use reqwest::Error as ReqwestError;

use crate::model::{DropOffPoint, Schedule, Waste};

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while talking to the schedule backend.
pub enum PortError {
    /// Network layer failed.
    #[error("Network error: {0}")]
    Network(#[from] ReqwestError),
    /// Failed to parse a date from the backend response.
    #[error("Parse error: {0}")]
    Parse(#[from] ChronoParseError),
    /// Requested village is not part of the schedule list.
    #[error("Village not found")]
    VillageNotFound,
    /// Internal backend error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[async_trait]
/// Trait for the remote store of per-village schedules.
pub trait SchedulePort: Send + Sync {
    /// Fetch the full ordered list of village schedules.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the backend request fails or a record
    /// cannot be decoded.
    async fn schedules(&self) -> Result<Vec<Schedule>, PortError>;
}

#[async_trait]
/// Trait for the drop-off point directory.
pub trait LocationPort: Send + Sync {
    /// Fetch all public drop-off points.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the backend request fails.
    async fn locations(&self) -> Result<Vec<DropOffPoint>, PortError>;
}

#[async_trait]
/// Trait for the searchable waste catalog.
pub trait WastePort: Send + Sync {
    /// Search catalog entries matching `keyword`.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the backend request fails.
    async fn search(&self, keyword: &str, limit: usize) -> Result<Vec<Waste>, PortError>;
}

/// Bundle of ports implementing one backend.
pub struct BackendPorts {
    /// Implementation serving village schedules.
    pub schedule_port: Arc<dyn SchedulePort>,
    /// Implementation serving drop-off points.
    pub location_port: Arc<dyn LocationPort>,
    /// Implementation serving the waste catalog.
    pub waste_port: Arc<dyn WastePort>,
}
