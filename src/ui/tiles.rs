use eframe::egui::{Color32, RichText, Ui};

use crate::color::{MAX_COLOR, MIN_COLOR};
use crate::data::aggregate::{Aggregate, GroupMean, Highlight};

const TILES_PER_ROW: usize = 6;

/// A row of metric tiles, one per station, six to a row.
pub fn station_tiles(ui: &mut Ui, stations: &Aggregate<String>) {
    for row in stations.groups.chunks(TILES_PER_ROW) {
        ui.columns(TILES_PER_ROW, |cols: &mut [Ui]| {
            for (col, group) in cols.iter_mut().zip(row) {
                tile(col, group, stations.highlight(&group.key));
            }
        });
        ui.add_space(4.0);
    }
}

fn tile(ui: &mut Ui, group: &GroupMean<String>, highlight: Highlight) {
    ui.group(|ui: &mut Ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new(&group.key).small());
        ui.label(RichText::new(format_mean(group.mean)).size(22.0).strong());
        if let Some((text, color)) = annotation(highlight) {
            ui.label(RichText::new(text).color(color));
        }
    })
    .response
    .on_hover_text(readings_caption(group.count));
}

/// Hover text naming how many readings a tile's mean is built from.
pub fn readings_caption(count: usize) -> String {
    match count {
        1 => "mean of 1 reading".to_string(),
        n => format!("mean of {n} readings"),
    }
}

/// Tile value text: two decimals.
pub fn format_mean(mean: f64) -> String {
    format!("{mean:.2}")
}

/// The badge under a tile's value; plain tiles have none.
pub fn annotation(highlight: Highlight) -> Option<(&'static str, Color32)> {
    match highlight {
        Highlight::Max => Some(("max", MAX_COLOR)),
        Highlight::Min => Some(("min", MIN_COLOR)),
        Highlight::Plain => None,
    }
}
