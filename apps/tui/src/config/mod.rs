#[allow(clippy::module_inception)]
mod config;

pub use config::{
    debug_enabled, get_log_file, load_dotenv, ChartConfig, DEFAULT_DATA_SOURCE, DEFAULT_LOG_FILE,
    DEFAULT_MIN_OVERALL, DEFAULT_PLAYER,
};
