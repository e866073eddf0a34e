//! Domain data structures for villages, schedules, and resolved collection days.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One recurring weekly pickup in a village's standard schedule.
pub struct WeeklySlot {
    /// Weekday of the pickup, `0` = Sunday through `6` = Saturday.
    pub day_of_week: u8,
    /// Waste type collected in this slot.
    pub waste_type: String,
    /// Announced pickup window, e.g. "07:00".
    pub time_slot: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Date-bounded override of the standard schedule.
///
/// Either a suspension of normal service or an announced one-off pickup.
/// The date range is inclusive on both ends and compared by calendar date
/// only; any time-of-day component upstream is ignored.
pub struct SpecialEvent {
    /// Announcement shown to residents, e.g. "Tet Holiday".
    pub name: String,
    /// First day the event applies (inclusive).
    pub start_date: NaiveDate,
    /// Last day the event applies (inclusive).
    pub end_date: NaiveDate,
    /// Whether normal service is suspended while the event is active.
    pub is_cancelled: bool,
    /// Pickup window announced by the event itself, if any.
    #[serde(default)]
    pub time_slot: Option<String>,
    /// Waste type announced by the event itself, if any.
    #[serde(default)]
    pub waste_type: Option<String>,
    /// Free-form remark shown under the status card.
    #[serde(default)]
    pub note: Option<String>,
}

impl SpecialEvent {
    /// Check whether the event is active on the given date.
    ///
    /// Records with `start_date > end_date` never match.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= self.end_date && self.start_date <= date && date <= self.end_date
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Collection schedule of a single administrative village.
pub struct Schedule {
    /// Village the schedule belongs to.
    pub village_name: String,
    /// Ward the village is part of.
    pub ward: String,
    /// Recurring weekly pickups.
    pub standard_schedule: Vec<WeeklySlot>,
    /// Date-bounded overrides.
    pub special_events: Vec<SpecialEvent>,
}

impl Schedule {
    /// Check whether the record carries any schedule data at all.
    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.standard_schedule.is_empty() || !self.special_events.is_empty()
    }

    /// Weekly slots in display order, Sunday sorted last.
    ///
    /// Slots on the same day keep their input order.
    #[must_use]
    pub fn weekly_sorted(&self) -> Vec<&WeeklySlot> {
        let mut slots: Vec<&WeeklySlot> = self.standard_schedule.iter().collect();
        slots.sort_by_key(|slot| weekday_sort_key(slot.day_of_week));
        slots
    }
}

/// Weekday number of `date` in the schedule convention, `0` = Sunday.
///
/// Resolution compares this against [`WeeklySlot::day_of_week`] directly,
/// with no shift. The full-week display ordering uses [`weekday_sort_key`]
/// instead; the two conventions must never be conflated.
#[must_use]
pub fn weekday_for_match(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Ordering key that moves Sunday behind Saturday for full-week listings.
#[must_use]
pub fn weekday_sort_key(day_of_week: u8) -> u8 {
    if day_of_week == 0 { 7 } else { day_of_week }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Concrete pickup taking place on a resolved day.
pub struct Pickup {
    /// Announced pickup window.
    pub time_slot: String,
    /// Waste type collected.
    pub waste_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Coarse category of a resolved day; the status card branches on it.
pub enum StatusKind {
    /// A special event governs the day.
    Special,
    /// The standard weekly schedule governs the day.
    Standard,
    /// Nothing applies to the day.
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Effective collection status of one village on one date.
///
/// Variants carry exactly the data valid for them, so a suspended day can
/// never expose a pickup window.
pub enum DayStatus {
    /// Normal service is suspended by a special event.
    Suspended {
        /// Announcement name.
        name: String,
        /// Remark attached to the announcement.
        note: Option<String>,
    },
    /// A special event governs the day without suspending service.
    Special {
        /// Announcement name.
        name: String,
        /// Pickup window of the day, if the event or the weekly schedule
        /// provides one.
        pickup: Option<Pickup>,
        /// Remark attached to the announcement.
        note: Option<String>,
    },
    /// Regular weekly pickups, in schedule order. Never empty.
    Standard {
        /// Pickups taking place on the day.
        pickups: Vec<Pickup>,
    },
    /// Schedule data exists but lists nothing for the day.
    NoCollection,
    /// No schedule data is available for the village.
    NoData,
}

impl DayStatus {
    /// Category the status card branches on.
    #[must_use]
    pub fn kind(&self) -> StatusKind {
        match self {
            DayStatus::Suspended { .. } | DayStatus::Special { .. } => StatusKind::Special,
            DayStatus::Standard { .. } => StatusKind::Standard,
            DayStatus::NoCollection | DayStatus::NoData => StatusKind::None,
        }
    }

    /// Whether collection is called off despite schedule data being present.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            DayStatus::Suspended { .. } | DayStatus::NoCollection
        )
    }

    /// Whether a truck actually comes on the day.
    #[must_use]
    pub fn has_truck(&self) -> bool {
        !self.is_cancelled() && self.kind() != StatusKind::None
    }

    /// Headline of the status card.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            DayStatus::Suspended { name, .. } | DayStatus::Special { name, .. } => name.clone(),
            DayStatus::Standard { pickups } => {
                let types = pickups
                    .iter()
                    .map(|pickup| pickup.waste_type.as_str())
                    .collect::<Vec<&str>>()
                    .join(" + ");
                format!("Pickup today: {types}")
            }
            DayStatus::NoCollection => "No collection today".to_owned(),
            DayStatus::NoData => "No schedule information".to_owned(),
        }
    }

    /// First pickup of the day, if a truck comes.
    #[must_use]
    pub fn pickup(&self) -> Option<&Pickup> {
        match self {
            DayStatus::Special { pickup, .. } => pickup.as_ref(),
            DayStatus::Standard { pickups } => pickups.first(),
            DayStatus::Suspended { .. } | DayStatus::NoCollection | DayStatus::NoData => None,
        }
    }

    /// Remark to render under the card, if any.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        match self {
            DayStatus::Suspended { note, .. } | DayStatus::Special { note, .. } => note.as_deref(),
            DayStatus::Standard { .. } | DayStatus::NoCollection | DayStatus::NoData => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// WGS84 coordinate of a drop-off point.
pub struct GeoPoint {
    /// Longitude in degrees.
    pub longitude: f64,
    /// Latitude in degrees.
    pub latitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Public drop-off point shown on the map.
pub struct DropOffPoint {
    /// Backend identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category of the point, e.g. "recycling".
    pub kind: String,
    /// Human-readable hint for finding the point.
    pub address_hint: String,
    /// Position of the point.
    pub position: GeoPoint,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One step of the recommended handling instructions for a waste kind.
pub struct ProcessingStep {
    /// Position within the instruction list.
    pub step_order: u32,
    /// Instruction text.
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Catalog entry describing a waste kind residents can hand in.
pub struct Waste {
    /// Backend identifier.
    pub id: String,
    /// Official name.
    pub name: String,
    /// Colloquial names the entry is found under.
    pub local_names: Vec<String>,
    /// Catalog category.
    pub category: String,
    /// Indicative buy-back price, free-form.
    pub estimated_price: String,
    /// Recommended handling instructions.
    pub processing_steps: Vec<ProcessingStep>,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{
        DayStatus, Pickup, Schedule, SpecialEvent, StatusKind, weekday_for_match,
        weekday_sort_key,
    };

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    fn slot(day_of_week: u8, waste_type: &str) -> super::WeeklySlot {
        super::WeeklySlot {
            day_of_week,
            waste_type: waste_type.to_owned(),
            time_slot: "07:00".to_owned(),
        }
    }

    #[test]
    fn match_convention_starts_the_week_on_sunday() {
        // 2024-01-07 is a Sunday, 2024-01-13 a Saturday
        assert_eq!(weekday_for_match(date(2024, 1, 7)), 0);
        assert_eq!(weekday_for_match(date(2024, 1, 8)), 1);
        assert_eq!(weekday_for_match(date(2024, 1, 13)), 6);
    }

    #[test]
    fn sort_convention_moves_sunday_last() {
        assert_eq!(weekday_sort_key(0), 7);
        assert_eq!(weekday_sort_key(1), 1);
        assert_eq!(weekday_sort_key(6), 6);
    }

    #[test]
    fn weekly_sorted_places_sunday_behind_saturday() {
        let schedule = Schedule {
            village_name: "A".to_owned(),
            ward: "W".to_owned(),
            standard_schedule: vec![slot(0, "glass"), slot(3, "organic"), slot(6, "paper")],
            special_events: Vec::new(),
        };
        let days: Vec<u8> = schedule
            .weekly_sorted()
            .into_iter()
            .map(|entry| entry.day_of_week)
            .collect();
        assert_eq!(days, vec![3, 6, 0]);
    }

    #[test]
    fn weekly_sorted_keeps_same_day_input_order() {
        let schedule = Schedule {
            village_name: "A".to_owned(),
            ward: "W".to_owned(),
            standard_schedule: vec![slot(2, "organic"), slot(2, "plastic")],
            special_events: Vec::new(),
        };
        let types: Vec<&str> = schedule
            .weekly_sorted()
            .into_iter()
            .map(|entry| entry.waste_type.as_str())
            .collect();
        assert_eq!(types, vec!["organic", "plastic"]);
    }

    #[test]
    fn reversed_event_range_contains_nothing() {
        let event = SpecialEvent {
            name: "broken".to_owned(),
            start_date: date(2024, 2, 14),
            end_date: date(2024, 2, 8),
            is_cancelled: true,
            time_slot: None,
            waste_type: None,
            note: None,
        };
        assert!(!event.contains(date(2024, 2, 10)));
    }

    #[test]
    fn cancelled_statuses_expose_no_pickup() {
        let suspended = DayStatus::Suspended {
            name: "Tet Holiday".to_owned(),
            note: None,
        };
        assert!(suspended.is_cancelled());
        assert!(suspended.pickup().is_none());
        assert!(DayStatus::NoCollection.is_cancelled());
        assert!(DayStatus::NoCollection.pickup().is_none());
    }

    #[test]
    fn no_data_is_none_without_cancellation() {
        assert_eq!(DayStatus::NoData.kind(), StatusKind::None);
        assert!(!DayStatus::NoData.is_cancelled());
        assert_eq!(DayStatus::NoData.message(), "No schedule information");
    }

    #[test]
    fn standard_message_combines_waste_types() {
        let status = DayStatus::Standard {
            pickups: vec![
                Pickup {
                    time_slot: "07:00".to_owned(),
                    waste_type: "organic".to_owned(),
                },
                Pickup {
                    time_slot: "16:00".to_owned(),
                    waste_type: "plastic".to_owned(),
                },
            ],
        };
        assert_eq!(status.message(), "Pickup today: organic + plastic");
        assert!(status.has_truck());
    }
}
