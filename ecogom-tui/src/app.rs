use std::sync::Arc;

use chrono::{Local, NaiveDate};
use ecogom_core::{
    model::{DayStatus, DropOffPoint, Schedule, Waste},
    region::RegionIndex,
    resolve::resolve,
    service::EcogomService,
};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Screen {
    RegionSelect,
    ScheduleView,
    Locations,
    WasteSearch,
}

pub(crate) struct App {
    pub service: Arc<EcogomService>,

    pub screen: Screen,
    pub schedules: Vec<Schedule>,
    pub region: RegionIndex,
    pub ward_tab_index: usize,
    pub village_list_index: usize,
    pub selected_village: Option<String>,

    pub locations: Vec<DropOffPoint>,
    pub location_list_index: usize,

    pub waste_input: String,
    pub waste_results: Vec<Waste>,
    pub waste_list_index: usize,

    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl App {
    pub(crate) fn new(service: Arc<EcogomService>) -> Self {
        Self {
            service,
            screen: Screen::RegionSelect,
            schedules: Vec::new(),
            region: RegionIndex::default(),
            ward_tab_index: 0,
            village_list_index: 0,
            selected_village: None,
            locations: Vec::new(),
            location_list_index: 0,
            waste_input: String::new(),
            waste_results: Vec::new(),
            waste_list_index: 0,
            is_loading: false,
            error_message: None,
        }
    }

    pub(crate) fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Replace the schedule list and rebuild the navigation index.
    pub(crate) fn set_schedules(&mut self, schedules: Vec<Schedule>) {
        self.region = RegionIndex::build(&schedules);
        self.schedules = schedules;
        self.ward_tab_index = 0;
        self.village_list_index = 0;
        self.selected_village = self.region.default_village.clone();
    }

    pub(crate) fn active_ward(&self) -> Option<&str> {
        self.region.wards.get(self.ward_tab_index).map(String::as_str)
    }

    pub(crate) fn active_villages(&self) -> &[String] {
        match self.active_ward() {
            Some(ward) => self.region.villages(ward),
            None => &[],
        }
    }

    pub(crate) fn next_ward(&mut self) {
        if self.ward_tab_index + 1 < self.region.wards.len() {
            self.ward_tab_index += 1;
            self.village_list_index = 0;
        }
    }

    pub(crate) fn previous_ward(&mut self) {
        if self.ward_tab_index > 0 {
            self.ward_tab_index -= 1;
            self.village_list_index = 0;
        }
    }

    pub(crate) fn select_current_village(&mut self) {
        let village = self
            .active_villages()
            .get(self.village_list_index)
            .cloned();
        if let Some(village) = village {
            self.selected_village = Some(village);
            self.screen = Screen::ScheduleView;
        }
    }

    pub(crate) fn selected_schedule(&self) -> Option<&Schedule> {
        let village = self.selected_village.as_deref()?;
        self.schedules
            .iter()
            .find(|schedule| schedule.village_name == village)
    }

    /// Effective status of the selected village for today.
    pub(crate) fn today_status(&self) -> DayStatus {
        resolve(self.selected_schedule(), Self::today())
    }
}
