//! Theme resolution and persistence.
//!
//! The theme is resolved synchronously by `ThemeController::hydrate` before a
//! session is mounted, so the first rendered frame already carries it.

use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::config::Config;
use crate::errors::PortfolioError;

/// Storage key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the hydrated theme came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    Persisted,
    OsPreference,
    Default,
}

/// Persistence for the single theme key.
pub trait ThemeStore: Send + Sync {
    fn load(&self) -> Result<Option<String>, PortfolioError>;
    fn save(&self, theme: Theme) -> Result<(), PortfolioError>;
}

/// Resolves the initial theme: persisted value, then OS preference, then light.
///
/// Any persisted value other than `"dark"` resolves to light. A blank
/// persisted value counts as absent.
pub fn resolve_initial_theme(
    persisted: Option<&str>,
    os_preference: Option<Theme>,
) -> (Theme, ThemeSource) {
    match persisted.map(str::trim).filter(|v| !v.is_empty()) {
        Some("dark") => (Theme::Dark, ThemeSource::Persisted),
        Some(_) => (Theme::Light, ThemeSource::Persisted),
        None => match os_preference {
            Some(theme) => (theme, ThemeSource::OsPreference),
            None => (Theme::Light, ThemeSource::Default),
        },
    }
}

/// Owns the current theme and writes every change through to the store.
#[derive(Clone)]
pub struct ThemeController {
    theme: Theme,
    source: ThemeSource,
    store: Arc<dyn ThemeStore>,
}

impl fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeController")
            .field("theme", &self.theme)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl ThemeController {
    /// Reads the persisted value and resolves the theme.
    /// Storage read failures degrade to the OS preference.
    pub fn hydrate(store: Arc<dyn ThemeStore>, os_preference: Option<Theme>) -> Self {
        let persisted = match store.load() {
            Ok(value) => value,
            Err(e) => {
                warn!("Theme storage unreadable, ignoring persisted value: {e}");
                None
            }
        };

        let (theme, source) = resolve_initial_theme(persisted.as_deref(), os_preference);
        info!("Theme hydrated: {theme} ({source:?})");

        Self {
            theme,
            source,
            store,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn source(&self) -> ThemeSource {
        self.source
    }

    /// Flips the theme and persists it. A failed write is logged; the
    /// in-memory flip still applies.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.source = ThemeSource::Persisted;

        if let Err(e) = self.store.save(self.theme) {
            warn!("Failed to persist theme '{}': {e}", self.theme);
        }

        info!("Theme toggled to {}", self.theme);
        self.theme
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Store backends
// ────────────────────────────────────────────────────────────────────────────

/// JSON object file standing in for browser local storage.
/// Other keys in the file are preserved on write.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.theme_file.clone())
    }

    fn read_map(&self) -> Result<Option<Map<String, Value>>, PortfolioError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(Some(map)),
            Ok(_) => Err(PortfolioError::ThemeFormat(format!(
                "{} does not contain a JSON object",
                self.path.display()
            ))),
            Err(e) => Err(PortfolioError::ThemeFormat(e.to_string())),
        }
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<String>, PortfolioError> {
        let Some(map) = self.read_map()? else {
            return Ok(None);
        };

        match map.get(THEME_STORAGE_KEY) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(PortfolioError::ThemeFormat(format!(
                "key '{THEME_STORAGE_KEY}' holds a non-string value: {other}"
            ))),
        }
    }

    fn save(&self, theme: Theme) -> Result<(), PortfolioError> {
        // An unreadable file is replaced rather than blocking the write.
        let mut map = self.read_map().ok().flatten().unwrap_or_default();
        map.insert(
            THEME_STORAGE_KEY.to_string(),
            Value::String(theme.as_str().to_string()),
        );

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let body = serde_json::to_string_pretty(&Value::Object(map))
            .map_err(|e| PortfolioError::ThemeFormat(e.to_string()))?;
        std::fs::write(&self.path, body)?;
        Ok(())
    }
}

/// In-process store for headless hosts and tests.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    value: Mutex<Option<String>>,
}

impl MemoryThemeStore {
    pub fn with_value(raw: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        match self.value.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<String>, PortfolioError> {
        Ok(self.raw())
    }

    fn save(&self, theme: Theme) -> Result<(), PortfolioError> {
        let mut value = match self.value.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *value = Some(theme.as_str().to_string());
        Ok(())
    }
}
