//! PNT GUI
//!
//! A graphical interface for playing Pick Numbered Tokens against the engine
//! or against another player.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;

use pnt::cli::init_logging;
use pnt::config::EngineConfig;
use pnt::ui::PntApp;
use pnt::Solver;

#[derive(Parser, Debug)]
#[command(name = "pnt-gui")]
#[command(version, about = "Play Pick Numbered Tokens in a window", long_about = None)]
struct Args {
    /// JSON configuration file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = EngineConfig::load_or_default(args.config.as_deref())?;
    init_logging(&config.log_filter);
    let solver = Solver::from_config(&config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 650.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("PNT - Pick Numbered Tokens"),
        ..Default::default()
    };

    eframe::run_native(
        "PNT",
        options,
        Box::new(move |cc| Ok(Box::new(PntApp::new(cc, solver)))),
    )
    .map_err(|err| anyhow!("GUI error: {err}"))
}
