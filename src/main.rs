mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::SocialPulseApp;
use clap::Parser;
use data::filter::Period;
use eframe::egui;
use state::AppState;

/// Monthly social-media engagement dashboard.
#[derive(Debug, Parser)]
#[command(name = "social-pulse", version, about)]
struct Cli {
    /// Dataset to open on start-up (.csv, .json or .parquet).
    #[arg(value_name = "FILE")]
    data: Option<PathBuf>,

    /// Initially selected year.
    #[arg(long)]
    year: Option<i32>,

    /// Initially selected month (1-12).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: Option<u32>,
}

impl Cli {
    fn initial_state(&self) -> AppState {
        let mut state = AppState::default();
        let Some(path) = &self.data else {
            return state;
        };

        state.open_or_report(path);
        if let Some(current) = state.period {
            state.select_period(Period {
                year: self.year.unwrap_or(current.year),
                month: self.month.unwrap_or(current.month),
            });
        }
        state
    }
}

fn main() -> eframe::Result {
    env_logger::init();
    let cli = Cli::parse();
    let state = cli.initial_state();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Social Pulse – Engagement Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(SocialPulseApp::new(state)))),
    )
}
