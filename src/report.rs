use crate::data::aggregate::{monthly_means, station_means, Aggregate};
use crate::data::correlation::Correlation;
use crate::data::filter::DateRange;
use crate::data::model::{AirQualityDataset, AirQualityRecord, Pollutant};
use crate::data::season::SeasonalSplit;

// ---------------------------------------------------------------------------
// Pollutant choices for each chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Station bar chart and tiles.
    pub station_pollutant: Pollutant,
    /// Rain/dry comparison chart.
    pub seasonal_pollutant: Pollutant,
    pub scatter_x: Pollutant,
    pub scatter_y: Pollutant,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            station_pollutant: Pollutant::Pm25,
            seasonal_pollutant: Pollutant::No2,
            scatter_x: Pollutant::Pm10,
            scatter_y: Pollutant::Pm25,
        }
    }
}

// ---------------------------------------------------------------------------
// Report – every statistic the central panel draws
// ---------------------------------------------------------------------------

/// Derived statistics for one date range and selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub range: DateRange,
    /// Number of records inside `range`.
    pub row_count: usize,
    pub stations: Aggregate<String>,
    pub seasonal_pollutant: Pollutant,
    pub seasonal: SeasonalSplit,
    pub correlation: Correlation,
}

impl Report {
    /// Compute from the rows at `indices`, the output of the range filter.
    pub fn compute(
        dataset: &AirQualityDataset,
        indices: &[usize],
        range: DateRange,
        selection: &Selection,
    ) -> Self {
        let rows = || records_at(dataset, indices);

        let stations = station_means(selection.station_pollutant, rows());
        let seasonal_monthly = monthly_means(selection.seasonal_pollutant, rows());
        let seasonal = SeasonalSplit::from_monthly(&seasonal_monthly);
        let correlation = Correlation::between(
            &monthly_means(selection.scatter_x, rows()),
            &monthly_means(selection.scatter_y, rows()),
        );

        Report {
            range,
            row_count: indices.len(),
            stations,
            seasonal_pollutant: selection.seasonal_pollutant,
            seasonal,
            correlation,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }
}

/// The records at `indices`, in index order.
pub fn records_at<'a>(
    dataset: &'a AirQualityDataset,
    indices: &'a [usize],
) -> impl Iterator<Item = &'a AirQualityRecord> + 'a {
    indices.iter().map(move |&i| &dataset.records[i])
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::data::aggregate::Highlight;
    use crate::data::filter::filtered_indices;
    use crate::data::model::tests::record;
    use crate::data::model::Readings;

    fn readings(pm25: f64, pm10: f64, no2: f64) -> Readings {
        Readings::default()
            .with(Pollutant::Pm25, Some(pm25))
            .with(Pollutant::Pm10, Some(pm10))
            .with(Pollutant::No2, Some(no2))
    }

    fn dataset() -> AirQualityDataset {
        AirQualityDataset::from_records(vec![
            record("A", "2013-03-01", readings(50.0, 80.0, 40.0)),
            record("B", "2013-03-02", readings(75.0, 110.0, 50.0)),
            record("C", "2013-08-01", readings(30.0, 60.0, 20.0)),
            record("A", "2013-08-15", readings(50.0, 70.0, 30.0)),
            record("B", "2014-01-10", readings(75.0, 120.0, 60.0)),
        ])
        .unwrap()
    }

    #[test]
    fn test_full_range_report() {
        let ds = dataset();
        let range = DateRange::full(&ds);
        let indices = filtered_indices(&ds, &range);
        let report = Report::compute(&ds, &indices, range, &Selection::default());

        assert_eq!(report.row_count, 5);
        assert_eq!(report.stations.highlight(&"A".to_string()), Highlight::Plain);
        assert_eq!(report.stations.highlight(&"B".to_string()), Highlight::Max);
        assert_eq!(report.stations.highlight(&"C".to_string()), Highlight::Min);

        // 2013-03 and 2014-01 are rain months, 2013-08 is dry.
        assert_eq!(report.seasonal.rain.len(), 2);
        assert_eq!(report.seasonal.dry.len(), 1);
        assert_eq!(report.seasonal.dry[0].mean, 25.0);
        assert_eq!(report.seasonal_pollutant, Pollutant::No2);

        assert_eq!(report.correlation.points.len(), 3);
        assert!(report.correlation.fit.unwrap().r > 0.0);
    }

    #[test]
    fn test_narrow_range_report() {
        let ds = dataset();
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2013, 8, 1).unwrap(),
            NaiveDate::from_ymd_opt(2013, 8, 31).unwrap(),
        );
        let indices = filtered_indices(&ds, &range);
        let report = Report::compute(&ds, &indices, range, &Selection::default());

        assert_eq!(report.row_count, 2);
        assert_eq!(report.stations.len(), 2);
        assert!(report.seasonal.rain.is_empty());
        assert!(report.correlation.fit.is_none());
    }

    #[test]
    fn test_empty_report() {
        let ds = dataset();
        let range = DateRange::new(ds.max_date, ds.min_date);
        let indices = filtered_indices(&ds, &range);
        let report = Report::compute(&ds, &indices, range, &Selection::default());

        assert!(report.is_empty());
        assert!(report.stations.is_empty());
        assert!(report.seasonal.is_empty());
        assert!(report.correlation.points.is_empty());
    }

    #[test]
    fn test_records_at() {
        let ds = dataset();
        let stations: Vec<&str> = records_at(&ds, &[4, 2])
            .map(|r| r.station.as_str())
            .collect();
        assert_eq!(stations, vec!["B", "C"]);
    }
}
