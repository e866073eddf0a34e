//! Ward and village navigation index for the region picker.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::Schedule;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Ward → villages grouping with picker defaults.
///
/// Derived from the flat schedule list and rebuilt wholesale whenever that
/// list changes; never patched in place.
pub struct RegionIndex {
    /// Villages per ward, in first-occurrence order, de-duplicated by exact
    /// name.
    pub grouped_villages: HashMap<String, Vec<String>>,
    /// Wards in first-seen order of the input.
    pub wards: Vec<String>,
    /// Ward preselected by the picker.
    pub default_ward: Option<String>,
    /// Village preselected by the picker; always a member of the default
    /// ward's village list.
    pub default_village: Option<String>,
}

impl RegionIndex {
    /// Group the schedule list into the picker hierarchy.
    ///
    /// Records with a blank ward or village name are skipped; an empty input
    /// yields an empty index.
    #[must_use]
    pub fn build(schedules: &[Schedule]) -> Self {
        let mut grouped_villages: HashMap<String, Vec<String>> = HashMap::new();
        let mut wards: Vec<String> = Vec::new();

        for schedule in schedules {
            if schedule.ward.trim().is_empty() || schedule.village_name.trim().is_empty() {
                continue;
            }

            let villages = grouped_villages
                .entry(schedule.ward.clone())
                .or_insert_with(|| {
                    wards.push(schedule.ward.clone());
                    Vec::new()
                });
            if !villages.contains(&schedule.village_name) {
                villages.push(schedule.village_name.clone());
            }
        }

        let default_ward = wards.first().cloned();
        let default_village = default_ward
            .as_ref()
            .and_then(|ward| grouped_villages.get(ward))
            .and_then(|villages| villages.first().cloned());

        Self {
            grouped_villages,
            wards,
            default_ward,
            default_village,
        }
    }

    /// Villages grouped under `ward`, empty for unknown wards.
    #[must_use]
    pub fn villages(&self, ward: &str) -> &[String] {
        self.grouped_villages
            .get(ward)
            .map_or(&[], Vec::as_slice)
    }

    /// Check whether the index contains no wards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::RegionIndex;
    use crate::model::Schedule;

    fn record(village: &str, ward: &str) -> Schedule {
        Schedule {
            village_name: village.to_owned(),
            ward: ward.to_owned(),
            standard_schedule: Vec::new(),
            special_events: Vec::new(),
        }
    }

    #[test]
    fn empty_input_yields_empty_index() {
        let index = RegionIndex::build(&[]);
        assert!(index.is_empty());
        assert!(index.grouped_villages.is_empty());
        assert!(index.wards.is_empty());
        assert_eq!(index.default_ward, None);
        assert_eq!(index.default_village, None);
    }

    #[test]
    fn groups_villages_under_their_wards() {
        let index = RegionIndex::build(&[
            record("A", "W1"),
            record("B", "W1"),
            record("C", "W2"),
        ]);
        assert_eq!(index.wards, vec!["W1", "W2"]);
        assert_eq!(index.villages("W1"), ["A", "B"]);
        assert_eq!(index.villages("W2"), ["C"]);
        assert_eq!(index.default_ward.as_deref(), Some("W1"));
        assert_eq!(index.default_village.as_deref(), Some("A"));
    }

    #[test]
    fn wards_keep_first_seen_order_when_interleaved() {
        let index = RegionIndex::build(&[
            record("A", "W2"),
            record("B", "W1"),
            record("C", "W2"),
        ]);
        assert_eq!(index.wards, vec!["W2", "W1"]);
        assert_eq!(index.default_ward.as_deref(), Some("W2"));
    }

    #[test]
    fn duplicate_villages_collapse_to_first_occurrence() {
        let index = RegionIndex::build(&[
            record("A", "W1"),
            record("B", "W1"),
            record("A", "W1"),
        ]);
        assert_eq!(index.villages("W1"), ["A", "B"]);
    }

    #[test]
    fn village_dedup_is_case_sensitive() {
        let index = RegionIndex::build(&[record("A", "W1"), record("a", "W1")]);
        assert_eq!(index.villages("W1"), ["A", "a"]);
    }

    #[test]
    fn blank_records_are_skipped() {
        let index = RegionIndex::build(&[
            record("", "W1"),
            record("  ", "W1"),
            record("A", ""),
            record("B", "W1"),
        ]);
        assert_eq!(index.wards, vec!["W1"]);
        assert_eq!(index.villages("W1"), ["B"]);
        assert_eq!(index.default_village.as_deref(), Some("B"));
    }

    #[test]
    fn unknown_ward_has_no_villages() {
        let index = RegionIndex::build(&[record("A", "W1")]);
        assert!(index.villages("W9").is_empty());
    }

    #[test]
    fn rebuilding_from_the_same_input_is_structurally_equal() {
        let input = [record("A", "W1"), record("B", "W2"), record("A", "W1")];
        assert_eq!(RegionIndex::build(&input), RegionIndex::build(&input));
    }

    #[test]
    fn default_village_belongs_to_default_ward() {
        let index = RegionIndex::build(&[record("A", "W1"), record("C", "W2")]);
        let ward = index.default_ward.clone().expect("default ward set");
        let village = index.default_village.clone().expect("default village set");
        assert!(index.villages(&ward).contains(&village));
    }
}
