use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use chrono::{Datelike, Duration, NaiveDate, Timelike};
use parquet::arrow::ArrowWriter;
use serde::Serialize;

const STATIONS: [(&str, f64); 12] = [
    ("Aotizhongxin", 1.05),
    ("Changping", 0.85),
    ("Dingling", 0.75),
    ("Dongsi", 1.10),
    ("Guanyuan", 1.05),
    ("Gucheng", 1.08),
    ("Huairou", 0.80),
    ("Nongzhanguan", 1.06),
    ("Shunyi", 0.92),
    ("Tiantan", 1.02),
    ("Wanliu", 1.00),
    ("Wanshouxigong", 1.09),
];

/// Baseline concentration and noise level for PM2.5, PM10, SO2, NO2, CO.
const BASELINES: [(f64, f64); 5] = [
    (80.0, 25.0),
    (105.0, 30.0),
    (15.0, 6.0),
    (50.0, 12.0),
    (1200.0, 300.0),
];

const DAYS: i64 = 730;
const HOURS: [u32; 2] = [0, 12];
const MISSING_RATE: f64 = 0.02;

/// Same column layout as the published multi-site air quality exports.
#[derive(Debug, Serialize)]
struct Row {
    #[serde(rename = "No")]
    no: i64,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    #[serde(rename = "PM2.5")]
    pm25: Option<f64>,
    #[serde(rename = "PM10")]
    pm10: Option<f64>,
    #[serde(rename = "SO2")]
    so2: Option<f64>,
    #[serde(rename = "NO2")]
    no2: Option<f64>,
    #[serde(rename = "CO")]
    co: Option<f64>,
    station: String,
    datetime: String,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Winter heating peaks in January, the cleanest air in July.
fn seasonal_factor(month: u32) -> f64 {
    let phase = (month as f64 - 1.0) / 12.0 * 2.0 * std::f64::consts::PI;
    1.0 + 0.35 * phase.cos()
}

fn reading(rng: &mut SimpleRng, baseline: (f64, f64), scale: f64) -> Option<f64> {
    if rng.next_f64() < MISSING_RATE {
        return None;
    }
    let (mean, noise) = baseline;
    let value = rng.gauss(mean * scale, noise).max(1.0);
    Some((value * 10.0).round() / 10.0)
}

fn generate_rows() -> Result<Vec<Row>> {
    let mut rng = SimpleRng::new(2013);
    let start = NaiveDate::from_ymd_opt(2013, 3, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .context("invalid start date")?;

    let mut rows = Vec::new();
    for day in 0..DAYS {
        for &hour in &HOURS {
            let ts = start + Duration::days(day) + Duration::hours(hour as i64);
            let factor = seasonal_factor(ts.month());
            for (station, station_scale) in STATIONS {
                let scale = factor * station_scale;
                let [pm25, pm10, so2, no2, co] = BASELINES.map(|b| reading(&mut rng, b, scale));
                rows.push(Row {
                    no: rows.len() as i64 + 1,
                    year: ts.year(),
                    month: ts.month(),
                    day: ts.day(),
                    hour: ts.hour(),
                    pm25,
                    pm10,
                    so2,
                    no2,
                    co,
                    station: station.to_string(),
                    datetime: ts.format("%Y-%m-%d %H:%M:%S").to_string(),
                });
            }
        }
    }
    Ok(rows)
}

fn write_csv(path: &Path, rows: &[Row]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    for row in rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn write_parquet(path: &Path, rows: &[Row]) -> Result<()> {
    let int_col = |f: fn(&Row) -> i64| Int64Array::from(rows.iter().map(f).collect::<Vec<_>>());
    let float_col =
        |f: fn(&Row) -> Option<f64>| Float64Array::from(rows.iter().map(f).collect::<Vec<_>>());

    let schema = Arc::new(Schema::new(vec![
        Field::new("No", DataType::Int64, false),
        Field::new("year", DataType::Int64, false),
        Field::new("month", DataType::Int64, false),
        Field::new("day", DataType::Int64, false),
        Field::new("hour", DataType::Int64, false),
        Field::new("PM2.5", DataType::Float64, true),
        Field::new("PM10", DataType::Float64, true),
        Field::new("SO2", DataType::Float64, true),
        Field::new("NO2", DataType::Float64, true),
        Field::new("CO", DataType::Float64, true),
        Field::new("station", DataType::Utf8, false),
        Field::new("datetime", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(int_col(|r| r.no)),
            Arc::new(int_col(|r| r.year as i64)),
            Arc::new(int_col(|r| r.month as i64)),
            Arc::new(int_col(|r| r.day as i64)),
            Arc::new(int_col(|r| r.hour as i64)),
            Arc::new(float_col(|r| r.pm25)),
            Arc::new(float_col(|r| r.pm10)),
            Arc::new(float_col(|r| r.so2)),
            Arc::new(float_col(|r| r.no2)),
            Arc::new(float_col(|r| r.co)),
            Arc::new(StringArray::from(
                rows.iter().map(|r| r.station.as_str()).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                rows.iter().map(|r| r.datetime.as_str()).collect::<Vec<_>>(),
            )),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating writer")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let rows = generate_rows()?;

    let csv_path = Path::new("sample_air_quality.csv");
    let parquet_path = Path::new("sample_air_quality.parquet");
    write_csv(csv_path, &rows)?;
    write_parquet(parquet_path, &rows)?;

    println!(
        "Wrote {} readings from {} stations to {} and {}",
        rows.len(),
        STATIONS.len(),
        csv_path.display(),
        parquet_path.display()
    );
    Ok(())
}
