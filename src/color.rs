use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::aggregate::Highlight;
use crate::data::season::Season;

// ---------------------------------------------------------------------------
// Fixed highlight colours
// ---------------------------------------------------------------------------

pub const MAX_COLOR: Color32 = Color32::from_rgb(214, 39, 40);
pub const MIN_COLOR: Color32 = Color32::from_rgb(44, 160, 44);
pub const PLAIN_COLOR: Color32 = Color32::from_rgb(31, 119, 180);

pub fn highlight_color(highlight: Highlight) -> Color32 {
    match highlight {
        Highlight::Max => MAX_COLOR,
        Highlight::Min => MIN_COLOR,
        Highlight::Plain => PLAIN_COLOR,
    }
}

pub fn season_color(season: Season) -> Color32 {
    match season {
        Season::Rain => PLAIN_COLOR,
        Season::Dry => Color32::from_rgb(255, 127, 14),
    }
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Year colours for the scatter plot
// ---------------------------------------------------------------------------

/// Maps each year present in a series to a distinct colour.
#[derive(Debug, Clone)]
pub struct YearColors {
    mapping: BTreeMap<i32, Color32>,
}

impl YearColors {
    pub fn new(years: impl IntoIterator<Item = i32>) -> Self {
        let mut mapping: BTreeMap<i32, Color32> =
            years.into_iter().map(|y| (y, Color32::GRAY)).collect();
        let palette = generate_palette(mapping.len());
        for (slot, color) in mapping.values_mut().zip(palette) {
            *slot = color;
        }
        YearColors { mapping }
    }

    /// Legend entries in year order.
    pub fn entries(&self) -> impl Iterator<Item = (i32, Color32)> + '_ {
        self.mapping.iter().map(|(y, c)| (*y, *c))
    }
}
