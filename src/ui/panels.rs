use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::DatePickerButton;

use crate::data::filter::DateRange;
use crate::data::model::Pollutant;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – date range and chart options
// ---------------------------------------------------------------------------

/// Render the left options panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Date range");
    ui.separator();

    let (Some(bounds), Some(range)) = (state.bounds(), state.range) else {
        ui.label("No dataset loaded.");
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let mut start = range.start;
            let mut end = range.end;

            ui.strong("Start Date");
            ui.add(DatePickerButton::new(&mut start).id_salt("start_date"));
            ui.strong("End Date");
            ui.add(DatePickerButton::new(&mut end).id_salt("end_date"));
            ui.small(format!("Data covers {} to {}", bounds.start, bounds.end));

            if start != range.start || end != range.end {
                state.set_range(DateRange::new(start, end));
            }
            if ui.small_button("Reset range").clicked() {
                state.set_range(bounds);
            }
            ui.separator();

            // ---- Pollutant selectors ----
            ui.heading("Charts");
            let mut selection = state.selection;
            pollutant_combo(ui, "station_pollutant", "Per station", &mut selection.station_pollutant);
            pollutant_combo(ui, "seasonal_pollutant", "Rain vs dry", &mut selection.seasonal_pollutant);
            pollutant_combo(ui, "scatter_x", "Scatter x", &mut selection.scatter_x);
            pollutant_combo(ui, "scatter_y", "Scatter y", &mut selection.scatter_y);
            state.set_selection(selection);
            ui.separator();

            if let Some(ds) = &state.dataset {
                egui::CollapsingHeader::new(
                    RichText::new(format!("Stations  ({})", ds.stations.len())).strong(),
                )
                .id_salt("stations")
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    for station in &ds.stations {
                        ui.label(station);
                    }
                });
            }
        });
}

fn pollutant_combo(ui: &mut Ui, id: &str, label: &str, value: &mut Pollutant) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(label);
        egui::ComboBox::from_id_salt(id)
            .selected_text(value.column())
            .show_ui(ui, |ui: &mut Ui| {
                for pollutant in Pollutant::ALL {
                    ui.selectable_value(value, pollutant, pollutant.column());
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} records loaded, {} in range",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open air quality data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}
