use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "player_radar", version, about = "Player attribute radar chart")]
pub struct CliArgs {
    /// Render once without the terminal UI and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless chart geometry as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override dataset location (file path or http(s) URL)
    #[arg(long, value_name = "PATH|URL")]
    pub data: Option<String>,

    /// Override the player shown first
    #[arg(long, value_name = "NAME")]
    pub player: Option<String>,

    /// Override the minimum overall score
    #[arg(long = "min-overall", value_name = "SCORE")]
    pub min_overall: Option<f64>,

    /// Override the log file used by the terminal UI
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,

    /// Player to switch to after loading (headless only)
    #[arg(long, value_name = "NAME")]
    pub select: Option<String>,

    /// Headless viewport width in pixels
    #[arg(long, default_value_t = 800.0)]
    pub width: f64,

    /// Headless viewport height in pixels
    #[arg(long, default_value_t = 600.0)]
    pub height: f64,

    /// Write the headless chart as an SVG document
    #[arg(long, value_name = "PATH")]
    pub svg: Option<PathBuf>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(data) = &self.data {
            std::env::set_var("DATA_SOURCE", data);
        }
        if let Some(player) = &self.player {
            std::env::set_var("DEFAULT_PLAYER", player);
        }
        if let Some(min_overall) = self.min_overall {
            std::env::set_var("MIN_OVERALL", min_overall.to_string());
        }
        if let Some(path) = &self.log_file {
            std::env::set_var("LOG_FILE", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}
