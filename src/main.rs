mod app;
mod color;
mod data;
mod report;
mod state;
mod ui;

use std::path::PathBuf;

use app::AirQualityApp;
use clap::Parser;
use eframe::egui;
use state::AppState;

#[derive(Parser)]
#[command(name = "air-quality-dashboard")]
#[command(about = "Descriptive statistics for station air quality readings", long_about = None)]
struct Cli {
    /// Data file to open at start-up (.csv, .json or .parquet)
    #[arg(value_name = "DATA_FILE")]
    data: Option<PathBuf>,
}

fn main() -> eframe::Result {
    env_logger::init();
    let cli = Cli::parse();

    let mut state = AppState::default();
    if let Some(path) = &cli.data {
        state.load_path(path);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Air Quality Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(AirQualityApp::new(state)))),
    )
}
