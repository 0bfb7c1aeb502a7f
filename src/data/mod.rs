//! Data layer: core types, loading, filtering and statistics.
//!
//! Architecture:
//! ```text
//!  .csv / .json / .parquet
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → AirQualityDataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  DateRange → filtered indices
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ aggregate  │  mean per station / per (year, month), max & min
//!   └───────────┘
//!      │      │
//!      ▼      ▼
//!  season   correlation
//! ```

pub mod aggregate;
pub mod correlation;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod season;
