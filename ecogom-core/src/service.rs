//! High-level service facade over the backend ports.

use crate::model::{DropOffPoint, Schedule, Waste};
use crate::ports::{BackendPorts, PortError};

/// Public entry point for loading schedules, drop-off points, and the waste
/// catalog.
pub struct EcogomService {
    ports: BackendPorts,
}

impl EcogomService {
    /// Create a new service bound to the provided backend ports.
    #[must_use]
    pub fn new(ports: BackendPorts) -> Self {
        Self { ports }
    }

    /// Load the full list of village schedules.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] if the backend request fails.
    pub async fn schedules(&self) -> Result<Vec<Schedule>, PortError> {
        self.ports.schedule_port.schedules().await
    }

    /// Load the schedule of a single village.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::VillageNotFound`] if the village is not part of
    /// the schedule list, or another [`PortError`] if the request fails.
    pub async fn schedule_for_village(&self, village_name: &str) -> Result<Schedule, PortError> {
        let schedules = self.ports.schedule_port.schedules().await?;
        schedules
            .into_iter()
            .find(|schedule| schedule.village_name == village_name)
            .ok_or(PortError::VillageNotFound)
    }

    /// Load all public drop-off points.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] if the backend request fails.
    pub async fn locations(&self) -> Result<Vec<DropOffPoint>, PortError> {
        self.ports.location_port.locations().await
    }

    /// Search the waste catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] if the backend request fails.
    pub async fn search_wastes(&self, keyword: &str, limit: usize) -> Result<Vec<Waste>, PortError> {
        self.ports.waste_port.search(keyword, limit).await
    }
}
