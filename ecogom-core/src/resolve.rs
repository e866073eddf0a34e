//! Resolution of the effective collection status for one village and date.

use chrono::NaiveDate;

use crate::model::{DayStatus, Pickup, Schedule, SpecialEvent, WeeklySlot, weekday_for_match};

/// Resolve what happens in a village on `date`.
///
/// Special events take precedence over the weekly schedule; a missing or
/// empty schedule degrades to [`DayStatus::NoData`]. Pure: the caller passes
/// the date explicitly, typically "today" truncated to midnight.
#[must_use]
pub fn resolve(schedule: Option<&Schedule>, date: NaiveDate) -> DayStatus {
    let Some(schedule) = schedule else {
        return DayStatus::NoData;
    };
    if !schedule.has_data() {
        return DayStatus::NoData;
    }

    if let Some(event) = active_event(&schedule.special_events, date) {
        if event.is_cancelled {
            return DayStatus::Suspended {
                name: event.name.clone(),
                note: event.note.clone(),
            };
        }
        let fallback = first_slot_for(&schedule.standard_schedule, date);
        return DayStatus::Special {
            name: event.name.clone(),
            pickup: special_pickup(event, fallback),
            note: event.note.clone(),
        };
    }

    let pickups: Vec<Pickup> = schedule
        .standard_schedule
        .iter()
        .filter(|entry| matches_date(entry, date))
        .map(|entry| Pickup {
            time_slot: entry.time_slot.clone(),
            waste_type: entry.waste_type.clone(),
        })
        .collect();

    if pickups.is_empty() {
        DayStatus::NoCollection
    } else {
        DayStatus::Standard { pickups }
    }
}

fn matches_date(entry: &WeeklySlot, date: NaiveDate) -> bool {
    u32::from(entry.day_of_week) == weekday_for_match(date)
}

/// Event governing `date`, if any.
///
/// Overlaps resolve to the earliest `start_date`; remaining ties keep the
/// first event in input order (`min_by_key` returns the first minimum).
fn active_event(events: &[SpecialEvent], date: NaiveDate) -> Option<&SpecialEvent> {
    events
        .iter()
        .filter(|event| event.contains(date))
        .min_by_key(|event| event.start_date)
}

fn first_slot_for(slots: &[WeeklySlot], date: NaiveDate) -> Option<&WeeklySlot> {
    slots.iter().find(|entry| matches_date(entry, date))
}

/// Pickup window of a non-cancelling event.
///
/// Fields announced by the event win; missing ones fall back to the day's
/// first standard slot. Without both fields the announcement carries no
/// pickup.
fn special_pickup(event: &SpecialEvent, fallback: Option<&WeeklySlot>) -> Option<Pickup> {
    let time_slot = event
        .time_slot
        .clone()
        .or_else(|| fallback.map(|entry| entry.time_slot.clone()));
    let waste_type = event
        .waste_type
        .clone()
        .or_else(|| fallback.map(|entry| entry.waste_type.clone()));

    match (time_slot, waste_type) {
        (Some(time_slot), Some(waste_type)) => Some(Pickup {
            time_slot,
            waste_type,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::resolve;
    use crate::model::{DayStatus, Pickup, Schedule, SpecialEvent, StatusKind, WeeklySlot};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    fn slot(day_of_week: u8, waste_type: &str, time_slot: &str) -> WeeklySlot {
        WeeklySlot {
            day_of_week,
            waste_type: waste_type.to_owned(),
            time_slot: time_slot.to_owned(),
        }
    }

    fn event(name: &str, start: NaiveDate, end: NaiveDate, cancelled: bool) -> SpecialEvent {
        SpecialEvent {
            name: name.to_owned(),
            start_date: start,
            end_date: end,
            is_cancelled: cancelled,
            time_slot: None,
            waste_type: None,
            note: None,
        }
    }

    fn village(slots: Vec<WeeklySlot>, events: Vec<SpecialEvent>) -> Schedule {
        Schedule {
            village_name: "Dong".to_owned(),
            ward: "Ward 1".to_owned(),
            standard_schedule: slots,
            special_events: events,
        }
    }

    #[test]
    fn missing_schedule_resolves_to_no_data() {
        let status = resolve(None, date(2024, 2, 13));
        assert_eq!(status, DayStatus::NoData);
        assert!(!status.is_cancelled());
    }

    #[test]
    fn empty_schedule_resolves_to_no_data() {
        let schedule = village(Vec::new(), Vec::new());
        assert_eq!(resolve(Some(&schedule), date(2024, 2, 13)), DayStatus::NoData);
    }

    #[test]
    fn weekly_slot_matches_its_weekday() {
        // 2024-02-13 is a Tuesday (day_of_week 2)
        let schedule = village(vec![slot(2, "organic", "07:00")], Vec::new());
        let status = resolve(Some(&schedule), date(2024, 2, 13));
        assert_eq!(
            status,
            DayStatus::Standard {
                pickups: vec![Pickup {
                    time_slot: "07:00".to_owned(),
                    waste_type: "organic".to_owned(),
                }],
            }
        );
    }

    #[test]
    fn weekday_without_slot_resolves_to_no_collection() {
        // 2024-02-14 is a Wednesday
        let schedule = village(vec![slot(2, "organic", "07:00")], Vec::new());
        let status = resolve(Some(&schedule), date(2024, 2, 14));
        assert_eq!(status, DayStatus::NoCollection);
        assert!(status.is_cancelled());
        assert_eq!(status.message(), "No collection today");
    }

    #[test]
    fn all_slots_of_the_day_are_returned_in_order() {
        let schedule = village(
            vec![
                slot(2, "organic", "07:00"),
                slot(4, "paper", "08:00"),
                slot(2, "plastic", "16:00"),
            ],
            Vec::new(),
        );
        let status = resolve(Some(&schedule), date(2024, 2, 13));
        let DayStatus::Standard { pickups } = status else {
            panic!("expected a standard day");
        };
        let types: Vec<&str> = pickups
            .iter()
            .map(|pickup| pickup.waste_type.as_str())
            .collect();
        assert_eq!(types, vec!["organic", "plastic"]);
    }

    #[test]
    fn cancelling_event_overrides_matching_slot() {
        // 2024-02-10 is a Saturday with a regular slot, but Tet wins
        let schedule = village(
            vec![slot(6, "organic", "07:00")],
            vec![event(
                "Tet Holiday",
                date(2024, 2, 8),
                date(2024, 2, 14),
                true,
            )],
        );
        let status = resolve(Some(&schedule), date(2024, 2, 10));
        assert_eq!(status.kind(), StatusKind::Special);
        assert!(status.is_cancelled());
        assert_eq!(status.message(), "Tet Holiday");
        assert!(status.pickup().is_none());
    }

    #[test]
    fn event_range_is_inclusive_on_both_ends() {
        let schedule = village(
            Vec::new(),
            vec![event("Tet", date(2024, 2, 8), date(2024, 2, 14), true)],
        );
        for day in [8, 14] {
            assert_eq!(
                resolve(Some(&schedule), date(2024, 2, day)).kind(),
                StatusKind::Special,
                "day {day} lies inside the range"
            );
        }
    }

    #[test]
    fn day_outside_event_range_falls_through() {
        let schedule = village(
            vec![slot(4, "organic", "07:00")],
            vec![event("Tet", date(2024, 2, 8), date(2024, 2, 14), true)],
        );
        // 2024-02-15 is a Thursday, one day past the event
        let status = resolve(Some(&schedule), date(2024, 2, 15));
        assert_eq!(status.kind(), StatusKind::Standard);
    }

    #[test]
    fn reversed_event_range_never_matches() {
        let schedule = village(
            Vec::new(),
            vec![event("broken", date(2024, 2, 14), date(2024, 2, 8), true)],
        );
        assert_eq!(
            resolve(Some(&schedule), date(2024, 2, 10)),
            DayStatus::NoCollection
        );
    }

    #[test]
    fn earliest_start_wins_between_overlapping_events() {
        let schedule = village(
            Vec::new(),
            vec![
                event("later", date(2024, 2, 10), date(2024, 2, 20), false),
                event("earlier", date(2024, 2, 5), date(2024, 2, 15), true),
            ],
        );
        let status = resolve(Some(&schedule), date(2024, 2, 12));
        assert_eq!(status.message(), "earlier");
    }

    #[test]
    fn overlap_tie_keeps_input_order() {
        let schedule = village(
            Vec::new(),
            vec![
                event("first", date(2024, 2, 5), date(2024, 2, 15), true),
                event("second", date(2024, 2, 5), date(2024, 2, 15), false),
            ],
        );
        let status = resolve(Some(&schedule), date(2024, 2, 12));
        assert_eq!(status.message(), "first");
    }

    #[test]
    fn announcement_carries_its_own_pickup() {
        let mut extra = event("Green Sunday", date(2024, 2, 11), date(2024, 2, 11), false);
        extra.time_slot = Some("09:00".to_owned());
        extra.waste_type = Some("bulky".to_owned());
        let schedule = village(Vec::new(), vec![extra]);

        let status = resolve(Some(&schedule), date(2024, 2, 11));
        assert_eq!(
            status.pickup(),
            Some(&Pickup {
                time_slot: "09:00".to_owned(),
                waste_type: "bulky".to_owned(),
            })
        );
        assert!(status.has_truck());
    }

    #[test]
    fn announcement_falls_back_to_weekly_slot() {
        // 2024-02-13 is a Tuesday; the event carries no window of its own
        let schedule = village(
            vec![slot(2, "organic", "07:00")],
            vec![event(
                "Extended hours",
                date(2024, 2, 12),
                date(2024, 2, 16),
                false,
            )],
        );
        let status = resolve(Some(&schedule), date(2024, 2, 13));
        assert_eq!(status.kind(), StatusKind::Special);
        assert_eq!(
            status.pickup(),
            Some(&Pickup {
                time_slot: "07:00".to_owned(),
                waste_type: "organic".to_owned(),
            })
        );
    }

    #[test]
    fn announcement_merges_partial_window_with_weekly_slot() {
        let mut extra = event("Late run", date(2024, 2, 13), date(2024, 2, 13), false);
        extra.time_slot = Some("19:00".to_owned());
        let schedule = village(vec![slot(2, "organic", "07:00")], vec![extra]);

        let status = resolve(Some(&schedule), date(2024, 2, 13));
        assert_eq!(
            status.pickup(),
            Some(&Pickup {
                time_slot: "19:00".to_owned(),
                waste_type: "organic".to_owned(),
            })
        );
    }

    #[test]
    fn announcement_without_window_or_slot_has_no_pickup() {
        let schedule = village(
            Vec::new(),
            vec![event(
                "Cleanup drive",
                date(2024, 2, 10),
                date(2024, 2, 12),
                false,
            )],
        );
        let status = resolve(Some(&schedule), date(2024, 2, 11));
        assert_eq!(status.kind(), StatusKind::Special);
        assert!(!status.is_cancelled());
        assert!(status.pickup().is_none());
    }

    #[test]
    fn same_inputs_resolve_identically() {
        let schedule = village(
            vec![slot(2, "organic", "07:00")],
            vec![event("Tet", date(2024, 2, 8), date(2024, 2, 14), true)],
        );
        let target = date(2024, 2, 13);
        assert_eq!(
            resolve(Some(&schedule), target),
            resolve(Some(&schedule), target)
        );
    }
}
