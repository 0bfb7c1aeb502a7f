use chrono::NaiveDate;

use super::model::{AirQualityDataset, AirQualityRecord};

// ---------------------------------------------------------------------------
// Date range predicate
// ---------------------------------------------------------------------------

/// Inclusive calendar-date range. `start > end` is allowed and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    /// The full observed span of a dataset (the default selection).
    pub fn full(dataset: &AirQualityDataset) -> Self {
        DateRange::new(dataset.min_date, dataset.max_date)
    }

    /// Whether the record's calendar date lies within `[start, end]`.
    pub fn contains(&self, record: &AirQualityRecord) -> bool {
        let date = record.date();
        self.start <= date && date <= self.end
    }

    /// Clamp both ends into `bounds`, the way the date pickers are limited
    /// to the dataset's span. An inverted range stays inverted.
    pub fn clamp_to(&self, bounds: &DateRange) -> Self {
        DateRange {
            start: self.start.clamp(bounds.start, bounds.end),
            end: self.end.clamp(bounds.start, bounds.end),
        }
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

/// Return indices of records whose date falls inside `range`.
pub fn filtered_indices(dataset: &AirQualityDataset, range: &DateRange) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, record)| range.contains(record))
        .map(|(i, _)| i)
        .collect()
}
