use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, Tabs, Wrap},
};

use ecogom_core::model::{DayStatus, weekday_for_match};

use crate::app::{App, Screen};

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Outer layout: title, main content, status line
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, content_area, status_area] = chunks else {
        return;
    };

    // Title / header
    let header = Paragraph::new("ecogom – village waste collection")
        .block(Block::default().borders(Borders::ALL).title("EcoGom"));
    frame.render_widget(header, *header_area);

    // Main screen
    match app.screen {
        Screen::RegionSelect => draw_region_select(frame, app, *content_area),
        Screen::ScheduleView => draw_schedule_view(frame, app, *content_area),
        Screen::Locations => draw_locations(frame, app, *content_area),
        Screen::WasteSearch => draw_waste_search(frame, app, *content_area),
    }

    // Status bar
    let nav_hint = match app.screen {
        Screen::RegionSelect => {
            "←/→ ward · ↑/↓ village · Enter open schedule · d drop-off points · w waste search · r refresh · q quit"
        }
        Screen::ScheduleView => {
            "Esc/←/b back · d drop-off points · w waste search · r refresh · q quit"
        }
        Screen::Locations => "↑/↓ move · Esc/←/b back · q quit",
        Screen::WasteSearch => "Type to edit · Enter search · ↑/↓ move · Left/Esc back · Ctrl-C quit",
    };

    let status_text = if app.is_loading {
        format!("Loading… · {nav_hint}")
    } else if let Some(msg) = &app.error_message {
        format!("{msg} · {nav_hint}")
    } else {
        nav_hint.to_owned()
    };

    let status_style = if app.error_message.is_some() {
        Style::default().fg(Color::Red)
    } else if app.is_loading {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style)
        .wrap(Wrap { trim: true });

    frame.render_widget(status, *status_area);
}

fn draw_region_select(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // ward tabs
            Constraint::Min(0),    // village list
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [tabs_area, list_area] = chunks else {
        return;
    };

    if app.region.is_empty() {
        let paragraph = Paragraph::new("No region data. Press r to refresh.")
            .block(Block::default().borders(Borders::ALL).title("Wards"))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let titles: Vec<String> = app.region.wards.clone();
    let tabs = Tabs::new(titles)
        .select(app.ward_tab_index)
        .block(Block::default().borders(Borders::ALL).title("Wards (←/→)"))
        .highlight_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, *tabs_area);

    let villages = app.active_villages();
    let items = villages
        .iter()
        .map(|village| ListItem::new(village.clone()))
        .collect::<Vec<ListItem<'_>>>();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Select village (↑/↓, Enter)"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if !villages.is_empty() {
        state.select(Some(app.village_list_index));
    }
    frame.render_stateful_widget(list, *list_area, &mut state);
}

fn draw_schedule_view(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let village = app
        .selected_village
        .as_deref()
        .unwrap_or("<no village>");

    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // today card
            Constraint::Min(0),    // weekly table
            Constraint::Length(7), // announcements
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [card_area, week_area, events_area] = chunks else {
        return;
    };

    draw_today_card(frame, app, village, *card_area);
    draw_weekly_table(frame, app, *week_area);
    draw_announcements(frame, app, *events_area);
}

fn draw_today_card(frame: &mut Frame<'_>, app: &App, village: &str, area: Rect) {
    let status = app.today_status();
    let color = status_color(&status);
    let today = App::today().format("%d.%m.%Y");
    let title = format!("Today in {village} – {today}");

    let mut lines = vec![Line::from(Span::styled(
        status.message(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];

    // Pickup lines only when a truck actually comes
    if status.has_truck() {
        match &status {
            DayStatus::Standard { pickups } => {
                for pickup in pickups {
                    lines.push(Line::from(format!(
                        "At {} · Collect: {}",
                        pickup.time_slot, pickup.waste_type
                    )));
                }
            }
            _ => {
                if let Some(pickup) = status.pickup() {
                    lines.push(Line::from(format!(
                        "At {} · Collect: {}",
                        pickup.time_slot, pickup.waste_type
                    )));
                }
            }
        }
    }

    if let Some(note) = status.note() {
        lines.push(Line::from(Span::styled(
            format!("*Note: {note}"),
            Style::default().add_modifier(Modifier::ITALIC),
        )));
    }

    let card = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: true });
    frame.render_widget(card, area);
}

fn draw_weekly_table(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let title = "Weekly schedule";

    let Some(schedule) = app.selected_schedule() else {
        let paragraph = Paragraph::new("No schedule information for this village.")
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    };

    let sorted = schedule.weekly_sorted();
    if sorted.is_empty() {
        let paragraph = Paragraph::new("No recurring schedule.")
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let today = weekday_for_match(App::today());
    let rows = sorted.into_iter().map(|entry| {
        let mut style = Style::default();
        if u32::from(entry.day_of_week) == today {
            style = style.add_modifier(Modifier::BOLD);
        }
        Row::new(vec![
            Cell::from(day_name(entry.day_of_week)),
            Cell::from(entry.waste_type.clone()),
            Cell::from(entry.time_slot.clone()),
        ])
        .style(style)
    });

    let column_widths = [
        Constraint::Length(10),
        Constraint::Min(20),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, column_widths)
        .header(
            Row::new(vec!["Day", "Waste", "Time"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title(title))
        .column_spacing(1);

    frame.render_widget(table, area);
}

fn draw_announcements(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let title = "Announcements";

    let events = app
        .selected_schedule()
        .map(|schedule| schedule.special_events.as_slice())
        .unwrap_or_default();

    if events.is_empty() {
        let paragraph = Paragraph::new("No announcements.")
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let mut sorted: Vec<_> = events.iter().collect();
    sorted.sort_by_key(|event| event.start_date);

    let items = sorted
        .into_iter()
        .map(|event| {
            let range = format!(
                "{} – {}",
                event.start_date.format("%d.%m.%Y"),
                event.end_date.format("%d.%m.%Y")
            );
            let label = if event.is_cancelled {
                format!("{} ({range}) · no collection", event.name)
            } else {
                format!("{} ({range})", event.name)
            };
            let style = if event.is_cancelled {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Yellow)
            };
            ListItem::new(label).style(style)
        })
        .collect::<Vec<ListItem<'_>>>();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

fn draw_locations(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items = if app.locations.is_empty() {
        vec![ListItem::new("No drop-off points loaded. Press r on the region screen.")]
    } else {
        app.locations
            .iter()
            .map(|point| {
                let coords = format!(
                    "{:.5}, {:.5}",
                    point.position.latitude, point.position.longitude
                );
                ListItem::new(format!(
                    "{} [{}] – {} ({coords})",
                    point.name, point.kind, point.address_hint
                ))
            })
            .collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Drop-off points (↑/↓)"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if !app.locations.is_empty() {
        state.select(Some(app.location_list_index));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_waste_search(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // input
            Constraint::Min(0),    // results
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [input_area, results_area] = chunks else {
        return;
    };

    let input = Paragraph::new(app.waste_input.as_str())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("What do you want to throw away? (keyword, Enter)"),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(input, *input_area);

    let items = if app.waste_results.is_empty() {
        vec![ListItem::new(
            "No results yet. Try a keyword like \"can\" or \"paper\".",
        )]
    } else {
        app.waste_results
            .iter()
            .map(|waste| {
                let locals = if waste.local_names.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", waste.local_names.join(", "))
                };
                let price = if waste.estimated_price.is_empty() {
                    String::new()
                } else {
                    format!(" – {}", waste.estimated_price)
                };
                ListItem::new(format!(
                    "{}{locals} – {}{price}",
                    waste.name, waste.category
                ))
            })
            .collect()
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Catalog (↑/↓)"))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if !app.waste_results.is_empty() {
        state.select(Some(app.waste_list_index));
    }
    frame.render_stateful_widget(list, *results_area, &mut state);
}

fn status_color(status: &DayStatus) -> Color {
    match status {
        DayStatus::Suspended { .. } => Color::Red,
        DayStatus::Special { .. } => Color::Yellow,
        DayStatus::Standard { .. } => Color::Green,
        DayStatus::NoCollection | DayStatus::NoData => Color::Gray,
    }
}

fn day_name(day_of_week: u8) -> &'static str {
    match day_of_week {
        0 => "Sunday",
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        6 => "Saturday",
        _ => "?",
    }
}
