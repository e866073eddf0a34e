//! Provider implementation for the EcoGom REST backend.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use ecogom_core::{
    model::{DropOffPoint, GeoPoint, ProcessingStep, Schedule, SpecialEvent, Waste, WeeklySlot},
    ports::{BackendPorts, LocationPort, PortError, SchedulePort, WastePort},
};

const BASE_URL: &str = "https://ecogom-backend.onrender.com";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Schedule record as returned by /schedules
#[derive(Debug, Deserialize)]
struct ScheduleRecord {
    village_name: String,
    ward: String,
    #[serde(default)]
    standard_schedule: Vec<SlotRecord>,
    #[serde(default)]
    special_events: Vec<EventRecord>,
}

/// Weekly slot inside `ScheduleRecord.standard_schedule`
#[derive(Debug, Deserialize)]
struct SlotRecord {
    day_of_week: u8,
    waste_type: String,
    time_slot: String,
}

/// Special event as serialized by the backend, dates as "YYYY-MM-DD"
#[derive(Debug, Deserialize)]
struct EventRecord {
    name: String,
    start_date: String,
    end_date: String,
    #[serde(default)]
    is_cancelled: bool,
    #[serde(default)]
    time_slot: Option<String>,
    #[serde(default)]
    waste_type: Option<String>,
    #[serde(default)]
    note: Option<String>,
}

/// Drop-off point as returned by /locations
#[derive(Debug, Deserialize)]
struct LocationRecord {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    #[serde(rename = "type")]
    kind: String,
    address_hint: String,
    location: CoordinatesRecord,
}

/// GeoJSON-style point, coordinates ordered [longitude, latitude]
#[derive(Debug, Deserialize)]
struct CoordinatesRecord {
    coordinates: [f64; 2],
}

/// Catalog entry as returned by /wastes
#[derive(Debug, Deserialize)]
struct WasteRecord {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    #[serde(default)]
    local_names: Vec<String>,
    category: String,
    #[serde(default)]
    estimated_price: String,
    #[serde(default)]
    processing_steps: Vec<StepRecord>,
    is_active: bool,
}

/// Instruction step inside `WasteRecord.processing_steps`
#[derive(Debug, Deserialize)]
struct StepRecord {
    step_order: u32,
    content: String,
}

/// Schedule store implementation backed by the REST backend.
pub struct RestSchedulePort {
    client: Client,
}

impl RestSchedulePort {
    /// Create a new schedule port bound to the given HTTP client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SchedulePort for RestSchedulePort {
    async fn schedules(&self) -> Result<Vec<Schedule>, PortError> {
        let records =
            fetch_json::<Vec<ScheduleRecord>>(self.client.get(format!("{BASE_URL}/schedules")))
                .await?;

        let mut schedules = Vec::with_capacity(records.len());
        for record in records {
            schedules.push(convert_schedule(record)?);
        }
        Ok(schedules)
    }
}

/// Drop-off point directory implementation backed by the REST backend.
pub struct RestLocationPort {
    client: Client,
}

impl RestLocationPort {
    /// Create a new location port bound to the given HTTP client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LocationPort for RestLocationPort {
    async fn locations(&self) -> Result<Vec<DropOffPoint>, PortError> {
        let records =
            fetch_json::<Vec<LocationRecord>>(self.client.get(format!("{BASE_URL}/locations")))
                .await?;

        Ok(records.into_iter().map(convert_location).collect())
    }
}

/// Waste catalog implementation backed by the REST backend.
pub struct RestWastePort {
    client: Client,
}

impl RestWastePort {
    /// Create a new waste port bound to the given HTTP client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WastePort for RestWastePort {
    async fn search(&self, keyword: &str, limit: usize) -> Result<Vec<Waste>, PortError> {
        if limit == 0 || keyword.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records = fetch_json::<Vec<WasteRecord>>(
            self.client
                .get(format!("{BASE_URL}/wastes"))
                .query(&[("keyword", keyword.trim())]),
        )
        .await?;

        Ok(catalog_results(records, limit))
    }
}

/// Build the port bundle for the REST backend.
#[must_use]
pub fn ports(client: Client) -> BackendPorts {
    BackendPorts {
        schedule_port: Arc::new(RestSchedulePort::new(client.clone())),
        location_port: Arc::new(RestLocationPort::new(client.clone())),
        waste_port: Arc::new(RestWastePort::new(client)),
    }
}

fn convert_schedule(record: ScheduleRecord) -> Result<Schedule, PortError> {
    let mut standard_schedule = Vec::with_capacity(record.standard_schedule.len());
    for slot in record.standard_schedule {
        if slot.day_of_week > 6 {
            warn!(
                village = %record.village_name,
                day = slot.day_of_week,
                "Dropping weekly slot with out-of-range weekday"
            );
            continue;
        }
        standard_schedule.push(WeeklySlot {
            day_of_week: slot.day_of_week,
            waste_type: slot.waste_type,
            time_slot: slot.time_slot,
        });
    }

    let mut special_events = Vec::with_capacity(record.special_events.len());
    for event in record.special_events {
        let start_date =
            NaiveDate::parse_from_str(&event.start_date, DATE_FORMAT).map_err(PortError::from)?;
        let end_date =
            NaiveDate::parse_from_str(&event.end_date, DATE_FORMAT).map_err(PortError::from)?;

        // Kept in the list; resolution treats a reversed range as never matching.
        if start_date > end_date {
            warn!(
                village = %record.village_name,
                event = %event.name,
                "Special event has a reversed date range"
            );
        }

        special_events.push(SpecialEvent {
            name: event.name,
            start_date,
            end_date,
            is_cancelled: event.is_cancelled,
            time_slot: event.time_slot,
            waste_type: event.waste_type,
            note: event.note,
        });
    }

    Ok(Schedule {
        village_name: record.village_name,
        ward: record.ward,
        standard_schedule,
        special_events,
    })
}

fn convert_location(record: LocationRecord) -> DropOffPoint {
    let [longitude, latitude] = record.location.coordinates;
    DropOffPoint {
        id: record.id,
        name: record.name,
        kind: record.kind,
        address_hint: record.address_hint,
        position: GeoPoint {
            longitude,
            latitude,
        },
    }
}

fn convert_waste(record: WasteRecord) -> Waste {
    Waste {
        id: record.id,
        name: record.name,
        local_names: record.local_names,
        category: record.category,
        estimated_price: record.estimated_price,
        processing_steps: record
            .processing_steps
            .into_iter()
            .map(|step| ProcessingStep {
                step_order: step.step_order,
                content: step.content,
            })
            .collect(),
    }
}

/// Drop retired catalog entries and cap the result list.
fn catalog_results(records: Vec<WasteRecord>, limit: usize) -> Vec<Waste> {
    records
        .into_iter()
        .filter(|record| record.is_active)
        .take(limit)
        .map(convert_waste)
        .collect()
}

// Small helper to fetch and decode JSON with status handling.
async fn fetch_json<T: DeserializeOwned>(req: RequestBuilder) -> Result<T, PortError> {
    req.send()
        .await
        .map_err(PortError::from)?
        .error_for_status()
        .map_err(PortError::from)?
        .json()
        .await
        .map_err(PortError::from)
}
