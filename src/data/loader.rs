use std::path::Path;

use anyhow::{Context, Result};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type, Int64Type, TimeUnit, TimestampMillisecondType};
use arrow::record_batch::RecordBatch;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use serde_json::{Map as JsonMap, Value as JsonValue};

use super::error::LoadError;
use super::model::{AirQualityDataset, AirQualityRecord, Pollutant, Readings};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an air quality dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row; `station`, `PM2.5`, `PM10`, `NO2`, `SO2`, `CO`
///   and a `datetime` column (or `year`/`month`/`day`/`hour`)
/// * `.json`    – `[{ "datetime": "...", "station": "...", "PM2.5": 12.0, ... }, ...]`;
///   `datetime` may also be epoch milliseconds
/// * `.parquet` – same columns; timestamps may be text or a temporal type
pub fn load_file(path: &Path) -> Result<AirQualityDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string()).into()),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    log::debug!("parsed {} rows from {}", records.len(), path.display());

    AirQualityDataset::from_records(records)
        .ok_or(LoadError::Empty)
        .with_context(|| format!("loading {}", path.display()))
}

// ---------------------------------------------------------------------------
// Row shape shared by all loaders
// ---------------------------------------------------------------------------

/// One source row before validation. Numeric cells that fail to parse
/// (e.g. `NA`) deserialize to `None`. Error row numbers count data rows
/// from 1, so CSV row `n` is file line `n + 1`.
#[derive(Debug, Default, Deserialize)]
struct RawRecord {
    #[serde(default)]
    datetime: Option<String>,
    #[serde(default)]
    timestamp: Option<String>,
    /// Already-typed timestamp from a columnar source.
    #[serde(skip)]
    instant: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    year: Option<i32>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    month: Option<u32>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    day: Option<u32>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    hour: Option<u32>,
    #[serde(default)]
    station: Option<String>,
    #[serde(rename = "PM2.5", default, deserialize_with = "csv::invalid_option")]
    pm25: Option<f64>,
    #[serde(rename = "PM10", default, deserialize_with = "csv::invalid_option")]
    pm10: Option<f64>,
    #[serde(rename = "NO2", default, deserialize_with = "csv::invalid_option")]
    no2: Option<f64>,
    #[serde(rename = "SO2", default, deserialize_with = "csv::invalid_option")]
    so2: Option<f64>,
    #[serde(rename = "CO", default, deserialize_with = "csv::invalid_option")]
    co: Option<f64>,
}

impl RawRecord {
    fn into_record(self, row: usize) -> Result<AirQualityRecord, LoadError> {
        let station = self
            .station
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| LoadError::MissingValue {
                row,
                column: "station".to_string(),
            })?
            .to_string();

        let timestamp = self.resolve_timestamp(row)?;

        let readings = Readings::default()
            .with(Pollutant::Pm25, self.pm25)
            .with(Pollutant::Pm10, self.pm10)
            .with(Pollutant::No2, self.no2)
            .with(Pollutant::So2, self.so2)
            .with(Pollutant::Co, self.co);

        Ok(AirQualityRecord {
            timestamp,
            station,
            year: self.year.unwrap_or_else(|| timestamp.year()),
            month: self.month.unwrap_or_else(|| timestamp.month()),
            readings,
        })
    }

    /// `instant`, then `datetime`, then `timestamp`, then the split columns.
    fn resolve_timestamp(&self, row: usize) -> Result<NaiveDateTime, LoadError> {
        if let Some(ts) = self.instant {
            return Ok(ts);
        }
        if let Some(text) = self.datetime.as_deref().or(self.timestamp.as_deref()) {
            return parse_timestamp(text).ok_or_else(|| LoadError::BadTimestamp {
                row,
                value: text.to_string(),
            });
        }
        let bad = || LoadError::BadTimestamp {
            row,
            value: format!(
                "year={:?} month={:?} day={:?} hour={:?}",
                self.year, self.month, self.day, self.hour
            ),
        };
        let (year, month, day) = match (self.year, self.month, self.day) {
            (Some(y), Some(m), Some(d)) => (y, m, d),
            _ => return Err(bad()),
        };
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(self.hour.unwrap_or(0), 0, 0))
            .ok_or_else(bad)
    }
}

const TIMESTAMP_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse the timestamp spellings seen in exported air quality tables.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Fail unless the station, pollutant and time columns are all present.
fn check_columns(has: impl Fn(&str) -> bool) -> Result<(), LoadError> {
    if !has("station") {
        return Err(LoadError::MissingColumn("station".to_string()));
    }
    for pollutant in Pollutant::ALL {
        if !has(pollutant.column()) {
            return Err(LoadError::MissingColumn(pollutant.column().to_string()));
        }
    }
    let has_stamp = has("datetime") || has("timestamp");
    let has_parts = has("year") && has("month") && has("day");
    if !has_stamp && !has_parts {
        return Err(LoadError::MissingTimeColumn);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Any extra columns (`No`, `TEMP`, `wd`, ...) are ignored.
fn load_csv(path: &Path) -> Result<Vec<AirQualityRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();
    check_columns(|name| headers.iter().any(|h| h == name))?;

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<RawRecord>().enumerate() {
        let row = i + 1;
        let raw = result.with_context(|| format!("CSV row {row}"))?;
        records.push(raw.into_record(row)?);
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')`.
/// Timestamps may be text or the epoch milliseconds Pandas writes for
/// datetime columns.
fn load_json(path: &Path) -> Result<Vec<AirQualityRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = root.as_array().context("Expected top-level JSON array")?;

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let row_no = i + 1;
        let mut obj = row
            .as_object()
            .with_context(|| format!("Row {row_no} is not a JSON object"))?
            .clone();
        check_columns(|name| obj.contains_key(name)).with_context(|| format!("Row {row_no}"))?;

        let instant = take_epoch_millis(&mut obj);
        let mut raw: RawRecord = serde_json::from_value(JsonValue::Object(obj))
            .with_context(|| format!("Row {row_no}"))?;
        raw.instant = instant;
        records.push(raw.into_record(row_no)?);
    }
    Ok(records)
}

/// Remove an integer `datetime`/`timestamp` cell and read it as epoch
/// milliseconds. Text cells are left for `RawRecord` to parse.
fn take_epoch_millis(obj: &mut JsonMap<String, JsonValue>) -> Option<NaiveDateTime> {
    for key in ["datetime", "timestamp"] {
        let Some(ms) = obj.get(key).and_then(JsonValue::as_i64) else {
            continue;
        };
        let instant = DateTime::from_timestamp_millis(ms)?.naive_utc();
        obj.remove(key);
        return Some(instant);
    }
    None
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file written by **Pandas** (`df.to_parquet()`) or
/// **Polars** (`df.write_parquet()`). Numeric columns of any width are
/// accepted; `datetime` may be text, a timestamp or a date.
fn load_parquet(path: &Path) -> Result<Vec<AirQualityRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let schema = builder.schema().clone();
    check_columns(|name| schema.index_of(name).is_ok())?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let offset = records.len() + 1;
        for (i, raw) in raw_records(&batch)?.into_iter().enumerate() {
            records.push(raw.into_record(offset + i)?);
        }
    }
    Ok(records)
}

// -- Parquet / Arrow helpers --

/// Convert one record batch into raw rows by casting each known column to
/// the type the row expects.
fn raw_records(batch: &RecordBatch) -> Result<Vec<RawRecord>> {
    let text = DataType::Utf8;
    let int = DataType::Int64;
    let float = DataType::Float64;

    let station = cast_column(batch, "station", &text)?;
    let datetime = time_column(batch, "datetime")?;
    let timestamp = time_column(batch, "timestamp")?;
    let year = cast_column(batch, "year", &int)?;
    let month = cast_column(batch, "month", &int)?;
    let day = cast_column(batch, "day", &int)?;
    let hour = cast_column(batch, "hour", &int)?;
    let pollutants = Pollutant::ALL
        .iter()
        .map(|p| cast_column(batch, p.column(), &float))
        .collect::<Result<Vec<_>>>()?;

    let rows = (0..batch.num_rows())
        .map(|row| {
            let mut raw = RawRecord {
                station: string_at(station.as_ref(), row),
                year: int_at(year.as_ref(), row).and_then(|v| i32::try_from(v).ok()),
                month: int_at(month.as_ref(), row).and_then(|v| u32::try_from(v).ok()),
                day: int_at(day.as_ref(), row).and_then(|v| u32::try_from(v).ok()),
                hour: int_at(hour.as_ref(), row).and_then(|v| u32::try_from(v).ok()),
                pm25: float_at(pollutants[0].as_ref(), row),
                pm10: float_at(pollutants[1].as_ref(), row),
                no2: float_at(pollutants[2].as_ref(), row),
                so2: float_at(pollutants[3].as_ref(), row),
                co: float_at(pollutants[4].as_ref(), row),
                ..RawRecord::default()
            };
            for column in [&datetime, &timestamp] {
                match column {
                    Some(TimeColumn::Text(arr)) => {
                        raw.datetime = raw.datetime.or_else(|| string_at(Some(arr), row));
                    }
                    Some(TimeColumn::Millis(arr)) if !arr.is_null(row) => {
                        let ms = arr.as_primitive::<TimestampMillisecondType>().value(row);
                        raw.instant = raw
                            .instant
                            .or_else(|| DateTime::from_timestamp_millis(ms).map(|t| t.naive_utc()));
                    }
                    _ => {}
                }
            }
            raw
        })
        .collect();
    Ok(rows)
}

enum TimeColumn {
    Text(ArrayRef),
    Millis(ArrayRef),
}

/// Temporal columns become millisecond timestamps; anything else is read as text.
fn time_column(batch: &RecordBatch, name: &str) -> Result<Option<TimeColumn>> {
    let Ok(idx) = batch.schema().index_of(name) else {
        return Ok(None);
    };
    let temporal = matches!(
        batch.column(idx).data_type(),
        DataType::Timestamp(_, _) | DataType::Date32 | DataType::Date64
    );
    if temporal {
        let millis = DataType::Timestamp(TimeUnit::Millisecond, None);
        Ok(cast_column(batch, name, &millis)?.map(TimeColumn::Millis))
    } else {
        Ok(cast_column(batch, name, &DataType::Utf8)?.map(TimeColumn::Text))
    }
}

/// Cast a column to `to`; absent columns are `None`. Unconvertible cells become null.
fn cast_column(batch: &RecordBatch, name: &str, to: &DataType) -> Result<Option<ArrayRef>> {
    let Ok(idx) = batch.schema().index_of(name) else {
        return Ok(None);
    };
    let array = cast(batch.column(idx), to)
        .with_context(|| format!("casting column '{name}' to {to:?}"))?;
    Ok(Some(array))
}

fn string_at(col: Option<&ArrayRef>, row: usize) -> Option<String> {
    let col = col.filter(|c| !c.is_null(row))?;
    Some(col.as_string::<i32>().value(row).to_string())
}

fn int_at(col: Option<&ArrayRef>, row: usize) -> Option<i64> {
    let col = col.filter(|c| !c.is_null(row))?;
    Some(col.as_primitive::<Int64Type>().value(row))
}

fn float_at(col: Option<&ArrayRef>, row: usize) -> Option<f64> {
    let col = col.filter(|c| !c.is_null(row))?;
    Some(col.as_primitive::<Float64Type>().value(row))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use arrow::array::{Float64Array, Int64Array, StringArray};
    use arrow::datatypes::{Field, Schema};
    use parquet::arrow::ArrowWriter;

    use super::*;

    const HEADER: &str = "No,year,month,day,hour,PM2.5,PM10,SO2,NO2,CO,O3,station,datetime";

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "air_quality_loader_{}_{name}",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = NaiveDate::from_ymd_opt(2013, 3, 1)
            .unwrap()
            .and_hms_opt(5, 0, 0)
            .unwrap();
        assert_eq!(parse_timestamp("2013-03-01 05:00:00"), Some(expected));
        assert_eq!(parse_timestamp("2013-03-01T05:00:00"), Some(expected));
        assert_eq!(parse_timestamp("2013-03-01 05:00"), Some(expected));
        assert_eq!(
            parse_timestamp("2013-03-01"),
            NaiveDate::from_ymd_opt(2013, 3, 1).unwrap().and_hms_opt(0, 0, 0)
        );
        assert_eq!(parse_timestamp("01/03/2013"), None);
    }

    #[test]
    fn test_load_csv() {
        let path = temp_file(
            "ok.csv",
            &format!(
                "{HEADER}\n\
                 1,2013,3,1,0,4.0,4.0,4.0,7.0,300.0,77.0,Aotizhongxin,2013-03-01 00:00:00\n\
                 2,2013,3,1,1,NA,8.0,4.0,7.0,300.0,77.0,Dongsi,2013-03-01 01:00:00\n\
                 3,2013,4,2,0,,6.0,5.0,9.0,400.0,80.0,Dongsi,2013-04-02 00:00:00\n"
            ),
        );
        let ds = load_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.stations.len(), 2);
        assert_eq!(ds.records[0].reading(Pollutant::Pm25), Some(4.0));
        assert_eq!(ds.records[1].reading(Pollutant::Pm25), None);
        assert_eq!(ds.records[2].reading(Pollutant::Pm25), None);
        assert_eq!(ds.records[2].reading(Pollutant::No2), Some(9.0));
        assert_eq!(ds.records[2].month, 4);
        assert_eq!(ds.max_date, NaiveDate::from_ymd_opt(2013, 4, 2).unwrap());
    }

    #[test]
    fn test_load_csv_from_split_time_columns() {
        let path = temp_file(
            "split.csv",
            "year,month,day,hour,PM2.5,PM10,SO2,NO2,CO,station\n\
             2016,12,31,23,100.0,120.0,10.0,60.0,1500.0,Tiantan\n",
        );
        let ds = load_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let expected = NaiveDate::from_ymd_opt(2016, 12, 31)
            .unwrap()
            .and_hms_opt(23, 0, 0)
            .unwrap();
        assert_eq!(ds.records[0].timestamp, expected);
        assert_eq!((ds.records[0].year, ds.records[0].month), (2016, 12));
    }

    #[test]
    fn test_missing_column_fails() {
        let path = temp_file(
            "no_co.csv",
            "station,datetime,PM2.5,PM10,SO2,NO2\nDongsi,2013-03-01 00:00:00,1,2,3,4\n",
        );
        let err = load_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        match err.downcast_ref::<LoadError>() {
            Some(LoadError::MissingColumn(col)) => assert_eq!(col, "CO"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_time_column_fails() {
        let path = temp_file(
            "no_time.csv",
            "station,PM2.5,PM10,SO2,NO2,CO\nDongsi,1,2,3,4,5\n",
        );
        let err = load_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::MissingTimeColumn)
        ));
    }

    #[test]
    fn test_bad_timestamp_fails() {
        let path = temp_file(
            "bad_ts.csv",
            "station,datetime,PM2.5,PM10,SO2,NO2,CO\nDongsi,yesterday,1,2,3,4,5\n",
        );
        let err = load_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::BadTimestamp { row: 1, .. })
        ));
    }

    #[test]
    fn test_error_rows_count_from_first_data_row() {
        let path = temp_file(
            "bad_third_row.csv",
            "station,datetime,PM2.5,PM10,SO2,NO2,CO\n\
             Dongsi,2013-03-01 00:00:00,1,2,3,4,5\n\
             Dongsi,2013-03-01 01:00:00,1,2,3,4,5\n\
             ,2013-03-01 02:00:00,1,2,3,4,5\n",
        );
        let err = load_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        match err.downcast_ref::<LoadError>() {
            Some(LoadError::MissingValue { row, column }) => {
                assert_eq!(*row, 3);
                assert_eq!(column, "station");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(format!("{err:#}").contains("row 3"));
    }

    #[test]
    fn test_empty_file_fails() {
        let path = temp_file("empty.csv", "station,datetime,PM2.5,PM10,SO2,NO2,CO\n");
        let err = load_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err.downcast_ref::<LoadError>(), Some(LoadError::Empty)));
    }

    #[test]
    fn test_missing_file_fails() {
        let path = std::env::temp_dir().join("air_quality_loader_does_not_exist.csv");
        assert!(load_file(&path).is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let err = load_file(Path::new("readings.xlsx")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::UnsupportedExtension(ext)) if ext == "xlsx"
        ));
    }

    #[test]
    fn test_load_json() {
        let path = temp_file(
            "records.json",
            r#"[
                {"datetime": "2014-07-01 12:00:00", "station": "Gucheng",
                 "PM2.5": 35.5, "PM10": 60, "NO2": 40.0, "SO2": 3.0, "CO": null},
                {"datetime": "2014-07-02 12:00:00", "station": "Gucheng",
                 "PM2.5": "NA", "PM10": 70, "NO2": 42.0, "SO2": 2.0, "CO": 500}
            ]"#,
        );
        let ds = load_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].reading(Pollutant::Pm10), Some(60.0));
        assert_eq!(ds.records[0].reading(Pollutant::Co), None);
        assert_eq!(ds.records[1].reading(Pollutant::Pm25), None);
        assert_eq!(ds.records[1].month, 7);
    }

    #[test]
    fn test_load_json_epoch_millis() {
        let path = temp_file(
            "epoch.json",
            r#"[{"datetime": 1362096000000, "station": "Dongsi",
                 "PM2.5": 4.0, "PM10": 4.0, "NO2": 7.0, "SO2": 4.0, "CO": 300.0}]"#,
        );
        let ds = load_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let expected = NaiveDate::from_ymd_opt(2013, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(ds.records[0].timestamp, expected);
        assert_eq!((ds.records[0].year, ds.records[0].month), (2013, 3));
    }

    #[test]
    fn test_load_json_missing_column() {
        let path = temp_file(
            "partial.json",
            r#"[{"datetime": "2014-07-01", "station": "Gucheng", "PM2.5": 1}]"#,
        );
        let err = load_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_load_parquet() {
        let schema = Arc::new(Schema::new(vec![
            Field::new("station", DataType::Utf8, false),
            Field::new("datetime", DataType::Utf8, false),
            Field::new("month", DataType::Int64, false),
            Field::new("PM2.5", DataType::Float64, true),
            Field::new("PM10", DataType::Float64, true),
            Field::new("NO2", DataType::Float64, true),
            Field::new("SO2", DataType::Float64, true),
            Field::new("CO", DataType::Int64, true),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["Wanliu", "Shunyi"])),
                Arc::new(StringArray::from(vec![
                    "2015-02-01 00:00:00",
                    "2015-02-03 06:00:00",
                ])),
                Arc::new(Int64Array::from(vec![2, 2])),
                Arc::new(Float64Array::from(vec![Some(80.0), None])),
                Arc::new(Float64Array::from(vec![Some(90.0), Some(95.0)])),
                Arc::new(Float64Array::from(vec![Some(50.0), Some(55.0)])),
                Arc::new(Float64Array::from(vec![Some(9.0), Some(f64::NAN)])),
                Arc::new(Int64Array::from(vec![Some(1200), Some(1300)])),
            ],
        )
        .unwrap();

        let path = std::env::temp_dir().join(format!(
            "air_quality_loader_{}_records.parquet",
            std::process::id()
        ));
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].station, "Wanliu");
        assert_eq!(ds.records[0].reading(Pollutant::Co), Some(1200.0));
        assert_eq!(ds.records[1].reading(Pollutant::Pm25), None);
        assert_eq!(ds.records[1].reading(Pollutant::So2), None);
        assert_eq!(ds.records[1].timestamp.format("%H").to_string(), "06");
    }
}
