use std::path::Path;

use crate::data::filter::{filtered_indices, DateRange};
use crate::data::loader::load_file;
use crate::data::model::AirQualityDataset;
use crate::report::{Report, Selection};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<AirQualityDataset>,

    /// Selected date range, always clamped to the dataset's span.
    pub range: Option<DateRange>,

    /// Indices of records inside `range` (cached).
    pub visible_indices: Vec<usize>,

    /// Pollutant chosen for each chart.
    pub selection: Selection,

    /// Statistics for the current range and selection.
    pub report: Option<Report>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Load a file, replacing the dataset on success. On failure the
    /// previous dataset stays and the error is shown in the top bar.
    pub fn load_path(&mut self, path: &Path) {
        match load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} records from {} stations ({} to {})",
                    dataset.len(),
                    dataset.stations.len(),
                    dataset.min_date,
                    dataset.max_date
                );
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Ingest a newly loaded dataset and reset the range to its full span.
    pub fn set_dataset(&mut self, dataset: AirQualityDataset) {
        self.range = Some(DateRange::full(&dataset));
        self.dataset = Some(dataset);
        self.status_message = None;
        self.refilter();
    }

    /// The dataset's observed span, the limit for both date pickers.
    pub fn bounds(&self) -> Option<DateRange> {
        self.dataset.as_ref().map(DateRange::full)
    }

    /// Change the date range (clamped to the dataset's span) and refilter.
    pub fn set_range(&mut self, range: DateRange) {
        let Some(bounds) = self.bounds() else {
            return;
        };
        let clamped = range.clamp_to(&bounds);
        if self.range != Some(clamped) {
            self.range = Some(clamped);
            self.refilter();
        }
    }

    /// Change the per-chart pollutant choices and recompute.
    pub fn set_selection(&mut self, selection: Selection) {
        if self.selection != selection {
            self.selection = selection;
            self.recompute();
        }
    }

    /// Recompute `visible_indices` after a range change.
    pub fn refilter(&mut self) {
        if let (Some(ds), Some(range)) = (&self.dataset, &self.range) {
            self.visible_indices = filtered_indices(ds, range);
        }
        self.recompute();
    }

    /// Rebuild the report from the cached indices.
    fn recompute(&mut self) {
        let (Some(ds), Some(range)) = (&self.dataset, self.range) else {
            self.report = None;
            return;
        };
        let report = Report::compute(ds, &self.visible_indices, range, &self.selection);
        log::debug!(
            "Recomputed report for {} to {}: {} rows, {} stations",
            range.start,
            range.end,
            report.row_count,
            report.stations.len()
        );
        if range.is_inverted() {
            log::warn!("Start date {} is after end date {}", range.start, range.end);
        } else if report.is_empty() {
            log::warn!("No records between {} and {}", range.start, range.end);
        }
        self.report = Some(report);
    }
}
