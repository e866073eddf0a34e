use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Screen};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Action {
    None,
    Quit,
    /// Re-fetch schedules and drop-off points, then rebuild the region index.
    Refresh,
    /// Run `service.search_wastes`(...) for the current input.
    SearchWastes,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{Backspace, Char, Down, Enter, Esc, Left, Right, Up};

    // Global quit shortcut; plain `q` quits everywhere except the search
    // input, where it has to stay typeable.
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    let mut action = Action::None;

    match app.screen {
        Screen::RegionSelect => match key.code {
            Char('q') => {
                action = Action::Quit;
            }
            Left | Char('h') => {
                app.previous_ward();
            }
            Right | Char('l') => {
                app.next_ward();
            }
            Up | Char('k') => {
                if app.village_list_index > 0 {
                    app.village_list_index -= 1;
                }
            }
            Down | Char('j') => {
                if app.village_list_index + 1 < app.active_villages().len() {
                    app.village_list_index += 1;
                }
            }
            Enter | Char(' ') => {
                app.select_current_village();
            }
            Char('d') => {
                app.screen = Screen::Locations;
            }
            Char('w') => {
                app.screen = Screen::WasteSearch;
            }
            Char('r') => {
                action = Action::Refresh;
            }
            _ => {}
        },

        Screen::ScheduleView => match key.code {
            Char('q') => {
                action = Action::Quit;
            }
            Left | Esc | Char('b') => {
                app.screen = Screen::RegionSelect;
            }
            Char('d') => {
                app.screen = Screen::Locations;
            }
            Char('w') => {
                app.screen = Screen::WasteSearch;
            }
            Char('r') => {
                action = Action::Refresh;
            }
            _ => {}
        },

        Screen::Locations => match key.code {
            Char('q') => {
                action = Action::Quit;
            }
            Up | Char('k') => {
                if app.location_list_index > 0 {
                    app.location_list_index -= 1;
                }
            }
            Down | Char('j') => {
                if app.location_list_index + 1 < app.locations.len() {
                    app.location_list_index += 1;
                }
            }
            Left | Esc | Char('b') => {
                app.screen = Screen::RegionSelect;
            }
            _ => {}
        },

        Screen::WasteSearch => match key.code {
            Up => {
                if app.waste_list_index > 0 {
                    app.waste_list_index -= 1;
                }
            }
            Down => {
                if app.waste_list_index + 1 < app.waste_results.len() {
                    app.waste_list_index += 1;
                }
            }
            Char(character) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT)
                {
                    app.waste_input.push(character);
                }
            }
            Backspace => {
                app.waste_input.pop();
            }
            Enter => {
                action = Action::SearchWastes;
            }
            Left | Esc => {
                app.screen = Screen::RegionSelect;
                app.waste_results.clear();
                app.waste_list_index = 0;
            }
            _ => {}
        },
    }
    action
}
