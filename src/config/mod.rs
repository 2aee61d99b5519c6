//! Configuration file management
//!
//! Loads TOML configuration files and resolves the glyph set to draw with.
//! Default config path: ~/.config/bolt-glyph/config.toml

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::bolt::{GlyphError, GlyphSet};
use crate::constants::{DEFAULT_PRESET, PRESET_ASCII, PRESET_UNICODE};

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV_VAR: &str = "BOLT_GLYPH_CONFIG";

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Glyph settings
    pub glyphs: GlyphConfig,
}

/// Glyph settings
///
/// A preset supplies all five glyphs; any slot set here replaces the
/// preset's character for that direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphConfig {
    /// Base glyph set: "ascii" (default) or "unicode"
    pub preset: String,
    /// Glyph for down-right / up-left lines
    pub diagonal_down: Option<char>,
    /// Glyph for up-right / down-left lines
    pub diagonal_up: Option<char>,
    /// Glyph for vertical lines
    pub vertical: Option<char>,
    /// Glyph for horizontal lines
    pub horizontal: Option<char>,
    /// Glyph when source and target coincide
    pub fallback: Option<char>,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            preset: DEFAULT_PRESET.to_string(),
            diagonal_down: None,
            diagonal_up: None,
            vertical: None,
            horizontal: None,
            fallback: None,
        }
    }
}

impl GlyphConfig {
    /// Build the glyph set: preset first, then per-slot overrides
    pub fn resolve(&self) -> std::result::Result<GlyphSet, GlyphError> {
        let mut glyphs = GlyphSet::from_preset(&self.preset)?;
        if let Some(ch) = self.diagonal_down {
            glyphs.diagonal_down = ch;
        }
        if let Some(ch) = self.diagonal_up {
            glyphs.diagonal_up = ch;
        }
        if let Some(ch) = self.vertical {
            glyphs.vertical = ch;
        }
        if let Some(ch) = self.horizontal {
            glyphs.horizontal = ch;
        }
        if let Some(ch) = self.fallback {
            glyphs.fallback = ch;
        }
        glyphs.validate()?;
        Ok(glyphs)
    }
}

impl Config {
    /// System-wide config path
    const SYSTEM_CONFIG_PATH: &'static str = "/etc/bolt-glyph/config.toml";

    /// Get the path that would be used for loading config
    /// Returns None if using built-in defaults
    pub fn config_path() -> Option<PathBuf> {
        // 1. BOLT_GLYPH_CONFIG environment variable
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = Path::new(&path);
            if p.exists() {
                return Some(p.to_path_buf());
            }
            warn!("{} points at missing file: {}", CONFIG_ENV_VAR, path);
        }

        // 2. User config: ~/.config/bolt-glyph/config.toml
        if let Some(config_path) = Self::default_config_path() {
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // 3. System config: /etc/bolt-glyph/config.toml
        let system_config = Path::new(Self::SYSTEM_CONFIG_PATH);
        if system_config.exists() {
            return Some(system_config.to_path_buf());
        }

        None
    }

    /// Get default (user) config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("bolt-glyph").join("config.toml"))
    }

    /// Load configuration with priority:
    /// 1. BOLT_GLYPH_CONFIG environment variable
    /// 2. ~/.config/bolt-glyph/config.toml (user config)
    /// 3. /etc/bolt-glyph/config.toml (system config)
    /// 4. Built-in defaults
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            match Self::load_from_file(&path) {
                Ok(config) => {
                    info!("Loaded config: {}", path.display());
                    return config;
                }
                Err(e) => {
                    warn!("Failed to load config {}: {:#}", path.display(), e);
                }
            }
        }
        info!("Using built-in default config");
        Self::default()
    }

    /// Load settings from specified path
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        debug!("Parsed config: {:?}", config);
        Ok(config)
    }

    /// Resolved glyph set
    ///
    /// Invalid glyph settings are logged and replaced by the ASCII set.
    pub fn glyph_set(&self) -> GlyphSet {
        match self.glyphs.resolve() {
            Ok(glyphs) => glyphs,
            Err(e) => {
                warn!("Invalid glyph config ({}), using ASCII glyphs", e);
                GlyphSet::ascii()
            }
        }
    }

    /// Write a commented config template for `preset` to `path`
    ///
    /// Parent directories are created as needed.
    pub fn write_config_with_preset(preset: &str, path: &Path) -> Result<PathBuf> {
        let glyphs = GlyphSet::from_preset(preset)?;
        let preset = preset.trim().to_ascii_lowercase();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let template = format!(
            r#"# bolt-glyph configuration file
# Generated with preset: {preset}

[glyphs]
# Base glyph set: "{ascii}" or "{unicode}"
preset = "{preset}"

# Per-direction overrides (uncomment to replace the preset's glyph)
# Each glyph must occupy exactly one terminal cell.
#
# Down-right / up-left
# diagonal_down = "{dd}"
# Up-right / down-left
# diagonal_up = "{du}"
# Same column
# vertical = "{v}"
# Same row
# horizontal = "{h}"
# Source and target are the same cell
# fallback = "{f}"
"#,
            preset = preset,
            ascii = PRESET_ASCII,
            unicode = PRESET_UNICODE,
            dd = escape_toml_char(glyphs.diagonal_down),
            du = escape_toml_char(glyphs.diagonal_up),
            v = escape_toml_char(glyphs.vertical),
            h = escape_toml_char(glyphs.horizontal),
            f = escape_toml_char(glyphs.fallback),
        );

        std::fs::write(path, template)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(path.to_path_buf())
    }
}

/// Escape a glyph for a TOML basic string
fn escape_toml_char(ch: char) -> String {
    match ch {
        '\\' => "\\\\".to_string(),
        '"' => "\\\"".to_string(),
        _ => ch.to_string(),
    }
}
