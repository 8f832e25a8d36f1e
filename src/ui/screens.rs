use eframe::egui::{self, Align, Color32, Layout, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::level_background;
use crate::config::AppConfig;
use crate::data::lookup::category_summary;
use crate::data::model::{AnnotatedDataset, AnnotatedReading};
use crate::nav::{Action, Screen, HOME_MENU};
use crate::state::AppState;
use crate::ui::plot;

const TABLE_COLUMNS: [&str; 7] = ["Date", "PM2.5", "PM10", "NO2", "Alert", "AQI", "Category"];

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Draw the active screen. Returns the navigation action pressed, if any.
pub fn show(ui: &mut Ui, state: &mut AppState, config: &AppConfig) -> Option<Action> {
    let screen = state.screen();
    if screen == Screen::Home {
        return home(ui, state, config);
    }

    with_back_button(ui, |ui: &mut Ui| {
        ui.heading(RichText::new(screen.title()).strong());
        ui.add_space(8.0);
        match screen {
            Screen::Table => table(ui, &state.dataset),
            Screen::Summary => summary(ui, &state.dataset),
            Screen::HealthTip => health_tip(ui, state),
            Screen::Trends => plot::trend_plot(ui, &state.dataset, &state.thresholds),
            Screen::Search => search(ui, state),
            Screen::Home => {}
        }
    })
}

/// Reserve a "Back" button at the bottom, then draw `content` above it.
fn with_back_button(ui: &mut Ui, content: impl FnOnce(&mut Ui)) -> Option<Action> {
    let mut action = None;
    ui.with_layout(Layout::bottom_up(Align::Center), |ui: &mut Ui| {
        ui.add_space(8.0);
        if ui.button("⬅ Back").clicked() {
            action = Some(Action::Back);
        }
        ui.separator();
        ui.with_layout(Layout::top_down(Align::Center), content);
    });
    action
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

fn home(ui: &mut Ui, state: &mut AppState, config: &AppConfig) -> Option<Action> {
    let mut action = None;
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(20.0);
        ui.heading(RichText::new(Screen::Home.title()).size(26.0).strong());
        ui.add_space(16.0);

        ui.label("Enter your name:");
        ui.add(
            egui::TextEdit::singleline(&mut state.user_name)
                .desired_width(config.menu_button_width),
        );
        ui.add_space(20.0);

        for (label, menu_action) in HOME_MENU {
            let button = egui::Button::new(RichText::new(label).size(15.0));
            if ui
                .add_sized([config.menu_button_width, 30.0], button)
                .clicked()
            {
                action = Some(menu_action);
            }
            ui.add_space(4.0);
        }
    });
    action
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

fn table(ui: &mut Ui, dataset: &AnnotatedDataset) {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::auto().at_least(90.0))
        .columns(Column::auto().at_least(55.0), 3)
        .column(Column::auto().at_least(190.0))
        .column(Column::auto().at_least(35.0))
        .column(Column::remainder())
        .header(22.0, |mut header| {
            for title in TABLE_COLUMNS {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for row in &dataset.rows {
                let r = &row.reading;
                let cells = [
                    r.date.to_string(),
                    r.pm25.to_string(),
                    r.pm10.to_string(),
                    r.no2.to_string(),
                    row.alert.clone(),
                    row.aqi.to_string(),
                    row.category.to_string(),
                ];
                body.row(20.0, |mut table_row| {
                    for cell in &cells {
                        table_row.col(|ui: &mut Ui| {
                            ui.label(cell.as_str());
                        });
                    }
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

fn summary(ui: &mut Ui, dataset: &AnnotatedDataset) {
    ui.add_space(12.0);
    for (level, count) in category_summary(dataset) {
        ui.label(RichText::new(format!("{}: {count} day(s)", level.category())).size(15.0));
    }
}

// ---------------------------------------------------------------------------
// Health tip
// ---------------------------------------------------------------------------

fn health_tip(ui: &mut Ui, state: &mut AppState) {
    ui.label("Select a date:");

    let dates = state.dataset.dates();
    let selected_text = state
        .health
        .selected
        .map(|d| d.to_string())
        .unwrap_or_default();
    egui::ComboBox::from_id_salt("health_tip_date")
        .selected_text(selected_text)
        .show_ui(ui, |ui: &mut Ui| {
            for date in dates {
                ui.selectable_value(&mut state.health.selected, Some(date), date.to_string());
            }
        });

    ui.add_space(6.0);
    if ui.button("Show Tip").clicked() {
        state.show_tip();
    }
    ui.add_space(12.0);

    if let Some(row) = &state.health.shown {
        ScrollArea::vertical()
            .auto_shrink([false, true])
            .show(ui, |ui: &mut Ui| tip_card(ui, row));
    }
}

/// Text of the health-tip card: headline, pollutant values, AQI level,
/// alert and tip, in display order.
pub fn tip_lines(row: &AnnotatedReading) -> Vec<String> {
    let level = row.aqi;
    let r = &row.reading;
    vec![
        format!("{} Air Quality on {}: {}", level.emoji(), r.date, row.category),
        format!("PM2.5: {} | PM10: {} | NO₂: {}", r.pm25, r.pm10, r.no2),
        format!("AQI: {} ({})", level, row.category),
        format!("Alert: {}", row.alert),
        format!("💡 Tip: {}", level.tip()),
    ]
}

fn tip_card(ui: &mut Ui, row: &AnnotatedReading) {
    let level = row.aqi;
    // pastel backgrounds need dark text in either theme
    let ink = Color32::from_rgb(0x2c, 0x3e, 0x50);

    egui::Frame::group(ui.style())
        .fill(level_background(level))
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui: &mut Ui| {
                let mut lines = tip_lines(row).into_iter();
                if let Some(headline) = lines.next() {
                    ui.label(RichText::new(headline).size(20.0).strong().color(ink));
                    ui.add_space(6.0);
                }
                for line in lines {
                    ui.label(RichText::new(line).size(14.0).color(ink));
                    ui.add_space(2.0);
                }
                if level.needs_mask() {
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new("⚠ Use a mask and keep windows shut!")
                            .italics()
                            .color(Color32::DARK_RED),
                    );
                }
            });
        });
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

fn search(ui: &mut Ui, state: &mut AppState) {
    let response = ui.add(
        egui::TextEdit::singleline(&mut state.search.input)
            .hint_text("YYYY-MM-DD")
            .desired_width(200.0),
    );
    ui.label(RichText::new("(Format: YYYY-MM-DD)").small());
    ui.add_space(6.0);

    let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    if ui.button("Search").clicked() || submitted {
        state.submit_search();
    }
}
