mod app;
mod cli;
mod event;
mod logging;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use logging::LogTarget;
use player_radar::config::{debug_enabled, get_log_file, load_dotenv, ChartConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    load_dotenv();

    let headless = args.headless || !is_terminal();
    let target = if headless {
        LogTarget::Stderr
    } else {
        LogTarget::File(get_log_file())
    };
    logging::init(target, debug_enabled())?;

    let config = ChartConfig::from_env();
    log::info!("data source: {}", config.data_source);

    if headless {
        return event::run_headless(config, &args).await;
    }

    let mut app = App::new(config);
    app.start_loading();

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app).await;
    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
