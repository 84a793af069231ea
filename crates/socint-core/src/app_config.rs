use std::path::PathBuf;

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_TREND_WINDOW: usize = 7;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Tracing filter directive for the subscriber (`SOCINT_LOG_LEVEL`).
    pub log_level: String,
    /// Optional YAML seed file; `None` means the built-in demo dataset
    /// (`SOCINT_SEED_PATH`).
    pub seed_path: Option<PathBuf>,
    /// Window size for trend comparisons (`SOCINT_TREND_WINDOW`).
    pub trend_window: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            seed_path: None,
            trend_window: DEFAULT_TREND_WINDOW,
        }
    }
}
