use std::collections::BTreeMap;
use std::fmt;

use super::model::{AirQualityRecord, Pollutant};

// ---------------------------------------------------------------------------
// Grouping keys
// ---------------------------------------------------------------------------

/// Calendar month key for monthly grouping. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        YearMonth { year, month }
    }

    pub fn of(record: &AirQualityRecord) -> Self {
        YearMonth::new(record.year, record.month)
    }

    /// Months since year 0, used as a continuous plot axis.
    pub fn ordinal(&self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }

    pub fn from_ordinal(ordinal: i64) -> Self {
        YearMonth {
            year: ordinal.div_euclid(12) as i32,
            month: ordinal.rem_euclid(12) as u32 + 1,
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

// ---------------------------------------------------------------------------
// Running mean
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
struct MeanAccumulator {
    count: usize,
    sum: f64,
}

impl MeanAccumulator {
    fn add_reading(&mut self, reading: f64) {
        self.count += 1;
        self.sum += reading;
    }

    fn avg(&self) -> f64 {
        self.sum / self.count as f64
    }
}

// ---------------------------------------------------------------------------
// Aggregate – grouped means of one pollutant
// ---------------------------------------------------------------------------

/// Mean of one group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMean<K> {
    pub key: K,
    pub mean: f64,
    /// Number of non-missing readings behind `mean`.
    pub count: usize,
}

/// How a group should be highlighted in charts and tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Max,
    Min,
    Plain,
}

/// Grouped means of one pollutant, in ascending key order.
///
/// Missing readings are skipped; a group with no readings at all is
/// left out rather than reported as NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate<K> {
    pub pollutant: Pollutant,
    pub groups: Vec<GroupMean<K>>,
}

impl<K: Ord + Clone> Aggregate<K> {
    pub fn compute<'a, I, F>(pollutant: Pollutant, records: I, key_of: F) -> Self
    where
        I: IntoIterator<Item = &'a AirQualityRecord>,
        F: Fn(&AirQualityRecord) -> K,
    {
        let mut acc: BTreeMap<K, MeanAccumulator> = BTreeMap::new();
        for record in records {
            if let Some(value) = record.reading(pollutant) {
                acc.entry(key_of(record)).or_default().add_reading(value);
            }
        }

        let groups = acc
            .into_iter()
            .map(|(key, a)| GroupMean {
                key,
                mean: a.avg(),
                count: a.count,
            })
            .collect();

        Aggregate { pollutant, groups }
    }

    /// Group with the largest mean; the first in key order wins a tie.
    pub fn max(&self) -> Option<&GroupMean<K>> {
        self.groups.iter().fold(None, |best, g| match best {
            Some(b) if g.mean <= b.mean => Some(b),
            _ => Some(g),
        })
    }

    /// Group with the smallest mean; the first in key order wins a tie.
    pub fn min(&self) -> Option<&GroupMean<K>> {
        self.groups.iter().fold(None, |best, g| match best {
            Some(b) if g.mean >= b.mean => Some(b),
            _ => Some(g),
        })
    }

    pub fn get(&self, key: &K) -> Option<f64> {
        self.groups
            .binary_search_by(|g| g.key.cmp(key))
            .ok()
            .map(|i| self.groups[i].mean)
    }

    /// Max takes precedence when a single group is both max and min.
    pub fn highlight(&self, key: &K) -> Highlight {
        if self.max().is_some_and(|g| &g.key == key) {
            Highlight::Max
        } else if self.min().is_some_and(|g| &g.key == key) {
            Highlight::Min
        } else {
            Highlight::Plain
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Mean of `pollutant` per station.
pub fn station_means<'a>(
    pollutant: Pollutant,
    records: impl IntoIterator<Item = &'a AirQualityRecord>,
) -> Aggregate<String> {
    Aggregate::compute(pollutant, records, |r| r.station.clone())
}

/// Mean of `pollutant` per (year, month).
pub fn monthly_means<'a>(
    pollutant: Pollutant,
    records: impl IntoIterator<Item = &'a AirQualityRecord>,
) -> Aggregate<YearMonth> {
    Aggregate::compute(pollutant, records, YearMonth::of)
}
