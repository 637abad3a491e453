use clap::Parser;
use eframe::egui;

mod app;
mod board;
mod theme;

/// Desktop Minesweeper on a fixed 9x9 grid with ten mines.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    log::debug!("seed: {:?}", args.seed);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([app::WINDOW_WIDTH, app::WINDOW_HEIGHT])
            .with_resizable(false)
            .with_title("Minesweeper"),
        ..Default::default()
    };

    eframe::run_native(
        "minefield",
        options,
        Box::new(move |cc| Ok(Box::new(app::MinefieldApp::new(cc, args.seed)))),
    )
    .map_err(|err| anyhow::anyhow!("could not start the UI: {err}"))?;

    Ok(())
}
