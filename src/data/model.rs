use std::collections::BTreeSet;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

// ---------------------------------------------------------------------------
// Pollutant – one of the measured concentration columns
// ---------------------------------------------------------------------------

/// The pollutant columns every dataset must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pollutant {
    Pm25,
    Pm10,
    No2,
    So2,
    Co,
}

impl Pollutant {
    pub const ALL: [Pollutant; 5] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::No2,
        Pollutant::So2,
        Pollutant::Co,
    ];

    /// Column header used in the source files.
    pub fn column(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::No2 => "NO2",
            Pollutant::So2 => "SO2",
            Pollutant::Co => "CO",
        }
    }

    fn index(self) -> usize {
        match self {
            Pollutant::Pm25 => 0,
            Pollutant::Pm10 => 1,
            Pollutant::No2 => 2,
            Pollutant::So2 => 3,
            Pollutant::Co => 4,
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

// ---------------------------------------------------------------------------
// Readings – the pollutant values of one observation
// ---------------------------------------------------------------------------

/// Concentrations for one observation. Missing cells are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Readings([Option<f64>; 5]);

impl Readings {
    pub fn get(&self, pollutant: Pollutant) -> Option<f64> {
        self.0[pollutant.index()]
    }

    pub fn set(&mut self, pollutant: Pollutant, value: Option<f64>) {
        // NaN is how columnar sources spell "missing"; infinities are not readings either.
        self.0[pollutant.index()] = value.filter(|v| v.is_finite());
    }

    pub fn with(mut self, pollutant: Pollutant, value: Option<f64>) -> Self {
        self.set(pollutant, value);
        self
    }
}

// ---------------------------------------------------------------------------
// AirQualityRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single observation at one station.
#[derive(Debug, Clone, PartialEq)]
pub struct AirQualityRecord {
    pub timestamp: NaiveDateTime,
    pub station: String,
    /// Grouping year; the `year` column when present, else from `timestamp`.
    pub year: i32,
    /// Grouping month (1–12); the `month` column when present, else from `timestamp`.
    pub month: u32,
    pub readings: Readings,
}

impl AirQualityRecord {
    pub fn reading(&self, pollutant: Pollutant) -> Option<f64> {
        self.readings.get(pollutant)
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

// ---------------------------------------------------------------------------
// AirQualityDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with its observed date span.
#[derive(Debug, Clone)]
pub struct AirQualityDataset {
    pub records: Vec<AirQualityRecord>,
    /// Sorted unique station names.
    pub stations: BTreeSet<String>,
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

impl AirQualityDataset {
    /// Build the dataset, computing the date span and station index.
    /// Returns `None` when there are no records (the span is undefined).
    pub fn from_records(records: Vec<AirQualityRecord>) -> Option<Self> {
        let min_date = records.iter().map(AirQualityRecord::date).min()?;
        let max_date = records.iter().map(AirQualityRecord::date).max()?;
        let stations = records.iter().map(|r| r.station.clone()).collect();

        Some(AirQualityDataset {
            records,
            stations,
            min_date,
            max_date,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
