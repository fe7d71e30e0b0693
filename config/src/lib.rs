//! Configuration for Folio.
//!
//! Read from `~/.folio/config.toml` (or `$FOLIO_CONFIG`). Every section is
//! optional; missing keys fall back to the defaults documented below.
//!
//! ```toml
//! [app]
//! reduced_motion = false
//! high_contrast = false
//! ascii_only = false
//!
//! [motion]
//! ms_per_char = 70
//! stage_pause_ms = 160
//! copied_badge_ms = 1500
//! section_reveal_ms = 600
//!
//! [nav]
//! scroll_threshold = 4
//! sections = ["home", "projects", "about"]
//! band_top = 0.2
//! band_bottom = 0.6
//!
//! [hero]
//! headline = ["Full-stack", "Developer"]
//! tagline = "Building modern web apps..."
//!
//! [content]
//! path = "content.toml"
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use folio_types::ui::UiOptions;

/// Env var naming an alternate config file.
pub const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG";
/// Env var forcing the reduced-motion preference on or off.
pub const REDUCED_MOTION_ENV: &str = "FOLIO_REDUCED_MOTION";

const DEFAULT_TAGLINE: &str =
    "Building modern web apps: frontend + backend + API + database. Always improving through real projects.";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config at {}: {reason}", path.display())]
    Invalid { path: PathBuf, reason: String },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FolioConfig {
    pub app: AppConfig,
    pub motion: MotionConfig,
    pub nav: NavConfig,
    pub hero: HeroConfig,
    pub content: ContentConfig,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for carets and markers.
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    pub high_contrast: bool,
    /// Skip the typewriter and show everything fully revealed.
    pub reduced_motion: bool,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MotionConfig {
    pub ms_per_char: u64,
    pub stage_pause_ms: u64,
    pub copied_badge_ms: u64,
    /// Fade-in time for a section entering the viewport for the first time.
    pub section_reveal_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            ms_per_char: 70,
            stage_pause_ms: 160,
            copied_badge_ms: 1500,
            section_reveal_ms: 600,
        }
    }
}

impl MotionConfig {
    #[must_use]
    pub fn char_interval(&self) -> Duration {
        Duration::from_millis(self.ms_per_char)
    }

    #[must_use]
    pub fn stage_pause(&self) -> Duration {
        Duration::from_millis(self.stage_pause_ms)
    }

    #[must_use]
    pub fn copied_badge(&self) -> Duration {
        Duration::from_millis(self.copied_badge_ms)
    }

    #[must_use]
    pub fn section_reveal(&self) -> Duration {
        Duration::from_millis(self.section_reveal_ms)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavConfig {
    /// Scroll offset (rows in the terminal page) past which the nav compacts.
    pub scroll_threshold: u32,
    /// Section ids in document order.
    pub sections: Vec<String>,
    /// Fraction of the viewport height excluded from the top of the active band.
    pub band_top: f64,
    /// Fraction of the viewport height excluded from the bottom of the active band.
    pub band_bottom: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 4,
            sections: vec!["home".into(), "projects".into(), "about".into()],
            band_top: 0.2,
            band_bottom: 0.6,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HeroConfig {
    /// Headline lines typed one after another. The last one keeps its caret.
    pub headline: Vec<String>,
    /// Typed after the headline; empty disables the stage.
    pub tagline: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            headline: vec!["Full-stack".into(), "Developer".into()],
            tagline: DEFAULT_TAGLINE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContentConfig {
    /// External content table. Relative paths resolve against the config directory.
    pub path: Option<PathBuf>,
}

impl FolioConfig {
    /// Load the config file if present.
    ///
    /// Returns `Ok(None)` when no config file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        let mut config = match Self::parse(&content) {
            Ok(config) => config,
            Err(ParseFailure::Toml(err)) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                return Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
            Err(ParseFailure::Invalid(reason)) => {
                return Err(ConfigError::Invalid {
                    path: path.to_path_buf(),
                    reason,
                });
            }
        };

        if let Some(content_path) = config.content.path.take() {
            config.content.path = Some(resolve_relative(path, content_path));
        }
        Ok(config)
    }

    fn parse(content: &str) -> Result<Self, ParseFailure> {
        let config: Self = toml::from_str(content).map_err(ParseFailure::Toml)?;
        config.validate().map_err(ParseFailure::Invalid)?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        let nav = &self.nav;
        let in_range = |v: f64| (0.0..1.0).contains(&v);
        if !in_range(nav.band_top) || !in_range(nav.band_bottom) {
            return Err("nav.band_top and nav.band_bottom must be in [0, 1)".to_string());
        }
        if nav.band_top + nav.band_bottom >= 1.0 {
            return Err("nav.band_top + nav.band_bottom must leave a non-empty band".to_string());
        }
        if self.hero.headline.iter().all(|line| line.trim().is_empty())
            && self.hero.tagline.trim().is_empty()
        {
            tracing::warn!("Hero headline and tagline are both empty");
        }
        Ok(())
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// UI options with environment overrides applied.
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let mut reduced_motion = self.app.reduced_motion;
        if let Ok(raw) = env::var(REDUCED_MOTION_ENV) {
            match parse_flag(&raw) {
                Some(value) => reduced_motion = value,
                None => tracing::warn!("Ignoring {REDUCED_MOTION_ENV}={raw:?}"),
            }
        }
        UiOptions {
            ascii_only: self.app.ascii_only,
            high_contrast: self.app.high_contrast,
            reduced_motion,
        }
    }
}

enum ParseFailure {
    Toml(toml::de::Error),
    Invalid(String),
}

fn resolve_relative(config_file: &Path, target: PathBuf) -> PathBuf {
    if target.is_absolute() {
        return target;
    }
    match config_file.parent() {
        Some(dir) => dir.join(target),
        None => target,
    }
}

/// Parse a boolean-ish environment value.
#[must_use]
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".folio").join("config.toml"))
}
