use eframe::egui::{RichText, ScrollArea, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use crate::color::{highlight_color, season_color, YearColors, MAX_COLOR};
use crate::data::aggregate::{Aggregate, YearMonth};
use crate::data::correlation::Correlation;
use crate::data::season::{Season, SeasonalSplit};
use crate::data::model::Pollutant;
use crate::state::AppState;
use crate::ui::tiles;

const CHART_HEIGHT: f32 = 320.0;

// ---------------------------------------------------------------------------
// Central panel – the report
// ---------------------------------------------------------------------------

/// Render the whole report in the central panel.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    let Some(report) = &state.report else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to view air quality data  (File → Open…)");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Air Quality Analysis Data Statistic");
            ui.label(
                RichText::new(format!(
                    "Analysis from {} to {} at Multiple Locations",
                    report.range.start, report.range.end
                ))
                .strong(),
            );
            ui.separator();

            if report.is_empty() {
                ui.label(RichText::new("No data in the selected range.").color(MAX_COLOR));
                return;
            }

            tiles::station_tiles(ui, &report.stations);
            ui.add_space(8.0);
            station_bar_chart(ui, &report.stations);
            ui.separator();

            ui.label(
                RichText::new(format!(
                    "Comparison of {} Levels Each Month",
                    report.seasonal_pollutant
                ))
                .strong(),
            );
            if report.seasonal.is_empty() {
                ui.label(format!("No {} readings in range.", report.seasonal_pollutant));
            } else {
                seasonal_chart(ui, &report.seasonal, report.seasonal_pollutant);
            }
            ui.separator();

            ui.label(
                RichText::new(format!(
                    "Monthly mean {} vs {}",
                    report.correlation.y, report.correlation.x
                ))
                .strong(),
            );
            correlation_plot(ui, &report.correlation);
        });
}

// ---------------------------------------------------------------------------
// Per-station bar chart
// ---------------------------------------------------------------------------

/// One bar per station; the max bar and the min bar get their own colours.
pub fn station_bar_chart(ui: &mut Ui, stations: &Aggregate<String>) {
    let names: Vec<String> = stations.groups.iter().map(|g| g.key.clone()).collect();
    let bars: Vec<Bar> = stations
        .groups
        .iter()
        .enumerate()
        .map(|(i, g)| {
            Bar::new(i as f64, g.mean)
                .name(&g.key)
                .fill(highlight_color(stations.highlight(&g.key)))
                .width(0.7)
        })
        .collect();

    Plot::new("station_means")
        .height(CHART_HEIGHT)
        .x_axis_label("Locations")
        .y_axis_label(stations.pollutant.column())
        .x_axis_formatter(move |mark, _range| category_label(&names, mark.value))
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars).name(format!("Average {} per location", stations.pollutant)),
            );
        });
}

/// Axis label for a categorical axis: only whole positions get a name.
pub fn category_label(names: &[String], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    names.get(idx as usize).cloned().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Rain vs dry monthly chart
// ---------------------------------------------------------------------------

/// Monthly means on a month axis, one bar series per season.
pub fn seasonal_chart(ui: &mut Ui, split: &SeasonalSplit, pollutant: Pollutant) {
    Plot::new("seasonal_means")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .y_axis_label(pollutant.column())
        .x_axis_formatter(|mark, _range| month_label(mark.value))
        .allow_boxed_zoom(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for season in Season::ALL {
                let bars: Vec<Bar> = split
                    .bucket(season)
                    .iter()
                    .map(|g| {
                        Bar::new(g.key.ordinal() as f64, g.mean)
                            .name(g.key.to_string())
                            .width(0.8)
                    })
                    .collect();
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .name(format!("{season} {pollutant}"))
                        .color(season_color(season)),
                );
            }
        });
}

/// Axis label for a month ordinal, e.g. `2014-07`.
pub fn month_label(value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 {
        return String::new();
    }
    YearMonth::from_ordinal(idx as i64).to_string()
}

// ---------------------------------------------------------------------------
// Correlation scatter plot
// ---------------------------------------------------------------------------

/// Paired monthly means coloured by year, with the least-squares line.
pub fn correlation_plot(ui: &mut Ui, corr: &Correlation) {
    match &corr.fit {
        Some(fit) => ui.label(format!(
            "r = {:.3}   {} = {:.3} × {} + {:.3}",
            fit.r, corr.y, fit.slope, corr.x, fit.intercept
        )),
        None => ui.label("Not enough months to fit a line."),
    };

    let colors = YearColors::new(corr.points.iter().map(|(ym, _)| ym.year));

    Plot::new("correlation")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(corr.x.column())
        .y_axis_label(corr.y.column())
        .allow_boxed_zoom(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (year, color) in colors.entries() {
                let series: Vec<[f64; 2]> = corr
                    .points
                    .iter()
                    .filter(|(ym, _)| ym.year == year)
                    .map(|(_, p)| *p)
                    .collect();
                plot_ui.points(
                    Points::new(PlotPoints::new(series))
                        .radius(4.0)
                        .color(color)
                        .name(year.to_string()),
                );
            }

            if let Some(fit) = &corr.fit {
                let xs = corr.points.iter().map(|(_, [x, _])| *x);
                let lo = xs.clone().fold(f64::INFINITY, f64::min);
                let hi = xs.fold(f64::NEG_INFINITY, f64::max);
                plot_ui.line(
                    Line::new(PlotPoints::new(vec![[lo, fit.at(lo)], [hi, fit.at(hi)]]))
                        .name("least squares")
                        .color(MAX_COLOR)
                        .width(1.5),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label() {
        let names = vec!["Aotizhongxin".to_string(), "Changping".to_string()];
        assert_eq!(category_label(&names, 0.0), "Aotizhongxin");
        assert_eq!(category_label(&names, 1.0), "Changping");
        assert_eq!(category_label(&names, 0.5), "");
        assert_eq!(category_label(&names, 2.0), "");
        assert_eq!(category_label(&names, -1.0), "");
    }

    #[test]
    fn test_month_label() {
        let ordinal = YearMonth::new(2014, 7).ordinal() as f64;
        assert_eq!(month_label(ordinal), "2014-07");
        assert_eq!(month_label(ordinal + 0.25), "");
    }
}
