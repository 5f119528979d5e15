use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_THEME_FILE: &str = ".portfolio/theme.json";

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed numbers fail at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub theme_file: PathBuf,
    /// Real contact delivery endpoint. `None` keeps submission simulated.
    pub contact_endpoint: Option<String>,
    pub submit_delay: Duration,
    pub view: ViewTuning,
    pub rust_log: String,
}

/// Constants consumed by the view-state reducer and the toast timer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTuning {
    /// Distance from the viewport top used for active-section detection.
    pub section_marker_px: f64,
    pub scrolled_threshold_px: f64,
    pub back_to_top_threshold_px: f64,
    pub toast_duration: Duration,
}

impl Default for ViewTuning {
    fn default() -> Self {
        Self {
            section_marker_px: 100.0,
            scrolled_threshold_px: 50.0,
            back_to_top_threshold_px: 400.0,
            toast_duration: Duration::from_millis(5000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_file: PathBuf::from(DEFAULT_THEME_FILE),
            contact_endpoint: None,
            submit_delay: Duration::from_millis(1500),
            view: ViewTuning::default(),
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            theme_file: std::env::var("PORTFOLIO_THEME_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.theme_file),
            contact_endpoint: std::env::var("CONTACT_ENDPOINT")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            submit_delay: Duration::from_millis(
                parse_env("CONTACT_SUBMIT_DELAY_MS")?.unwrap_or(1500),
            ),
            view: ViewTuning {
                section_marker_px: parse_env("SECTION_MARKER_PX")?
                    .unwrap_or(defaults.view.section_marker_px),
                scrolled_threshold_px: parse_env("SCROLLED_THRESHOLD_PX")?
                    .unwrap_or(defaults.view.scrolled_threshold_px),
                back_to_top_threshold_px: parse_env("BACK_TO_TOP_THRESHOLD_PX")?
                    .unwrap_or(defaults.view.back_to_top_threshold_px),
                toast_duration: Duration::from_millis(
                    parse_env("TOAST_DURATION_MS")?.unwrap_or(5000),
                ),
            },
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_env<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Environment variable '{key}' must be a number")),
        Err(_) => Ok(None),
    }
}
